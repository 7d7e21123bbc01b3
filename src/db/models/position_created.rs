use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::db::postgres::schema::position_created;

#[derive(Queryable, Selectable, Insertable, Identifiable, AsChangeset, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = position_created)]
#[diesel(primary_key(id))]
#[serde(rename_all = "camelCase")]
pub struct PositionCreated {
    pub id: String,
    #[diesel(column_name = user_address)]
    pub user: String,
    /// Timestamp carried by the event itself, not the block.
    pub timestamp: BigDecimal,
    pub block_number: BigDecimal,
    pub block_timestamp: BigDecimal,
    pub transaction_hash: String,
}

impl Entity for PositionCreated {
    const NAME: &'static str = "PositionCreated";

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
