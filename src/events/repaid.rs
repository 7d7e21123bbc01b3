use lazy_static::lazy_static;
use primitive_types::{H160, H256, U256};

use super::common::{
    convert_address_to_hex_string, convert_hash_to_hex_string, u256_to_decimal, u64_to_decimal,
    Event, MappingError,
};
use super::log::{address_word, event_topic, uint_word, DecodeError, EventParams, ParamReader};
use crate::db::models::repaid::Repaid;

lazy_static! {
    static ref REPAID_TOPIC: H256 = event_topic(RepaidParams::SIGNATURE);
}

/// Mirrors the LendingPool `Repaid(address user, uint256 amount)` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepaidParams {
    pub user: H160,
    pub amount: U256,
}

impl EventParams for RepaidParams {
    const SIGNATURE: &'static str = "Repaid(address,uint256)";

    fn topic() -> H256 {
        *REPAID_TOPIC
    }

    fn decode(reader: &mut ParamReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            user: reader.address("user")?,
            amount: reader.uint("amount")?,
        })
    }

    fn to_words(&self) -> Vec<[u8; 32]> {
        vec![address_word(self.user), uint_word(self.amount)]
    }
}

impl Event<RepaidParams> {
    pub fn try_map_to_db(&self) -> Result<Repaid, MappingError> {
        Ok(Repaid {
            id: self.entity_id()?,
            user: convert_address_to_hex_string(self.params.user),
            amount: u256_to_decimal(self.params.amount, "amount")?,
            block_number: u64_to_decimal(self.block.number),
            block_timestamp: u64_to_decimal(self.block.timestamp),
            transaction_hash: convert_hash_to_hex_string(self.transaction.hash),
        })
    }
}
