use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::db::postgres::schema::position_closed;

#[derive(Queryable, Selectable, Insertable, Identifiable, AsChangeset, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = position_closed)]
#[diesel(primary_key(id))]
#[serde(rename_all = "camelCase")]
pub struct PositionClosed {
    pub id: String,
    #[diesel(column_name = user_address)]
    pub user: String,
    pub block_number: BigDecimal,
    pub block_timestamp: BigDecimal,
    pub transaction_hash: String,
}

impl Entity for PositionClosed {
    const NAME: &'static str = "PositionClosed";

    fn id(&self) -> &str {
        &self.id
    }

    fn user(&self) -> &str {
        &self.user
    }

    fn block_number(&self) -> &BigDecimal {
        &self.block_number
    }
}
