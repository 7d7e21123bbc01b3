use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::db::postgres::schema::repaid;

#[derive(Queryable, Selectable, Insertable, Identifiable, AsChangeset, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = repaid)]
#[diesel(primary_key(id))]
#[serde(rename_all = "camelCase")]
pub struct Repaid {
    pub id: String,
    #[diesel(column_name = user_address)]
    pub user: String,
    pub amount: BigDecimal,
    pub block_number: BigDecimal,
    pub block_timestamp: BigDecimal,
    pub transaction_hash: String,
}

impl Entity for Repaid {
    const NAME: &'static str = "Repaid";

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
