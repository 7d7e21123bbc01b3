use lazy_static::lazy_static;
use primitive_types::{H160, H256, U256};

use super::common::{
    convert_address_to_hex_string, convert_hash_to_hex_string, u256_to_decimal, u64_to_decimal,
    Event, MappingError,
};
use super::log::{address_word, event_topic, uint_word, DecodeError, EventParams, ParamReader};
use crate::db::models::position_created::PositionCreated;

lazy_static! {
    static ref POSITION_CREATED_TOPIC: H256 = event_topic(PositionCreatedParams::SIGNATURE);
}

/// Mirrors the LendingPool `PositionCreated(address user, uint256 timestamp)` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionCreatedParams {
    pub user: H160,
    pub timestamp: U256,
}

impl EventParams for PositionCreatedParams {
    const SIGNATURE: &'static str = "PositionCreated(address,uint256)";

    fn topic() -> H256 {
        *POSITION_CREATED_TOPIC
    }

    fn decode(reader: &mut ParamReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            user: reader.address("user")?,
            timestamp: reader.uint("timestamp")?,
        })
    }

    fn to_words(&self) -> Vec<[u8; 32]> {
        vec![address_word(self.user), uint_word(self.timestamp)]
    }
}

impl Event<PositionCreatedParams> {
    /// Maps the event onto its database entity.
    pub fn try_map_to_db(&self) -> Result<PositionCreated, MappingError> {
        Ok(PositionCreated {
            id: self.entity_id()?,
            user: convert_address_to_hex_string(self.params.user),
            timestamp: u256_to_decimal(self.params.timestamp, "timestamp")?,
            block_number: u64_to_decimal(self.block.number),
            block_timestamp: u64_to_decimal(self.block.timestamp),
            transaction_hash: convert_hash_to_hex_string(self.transaction.hash),
        })
    }
}
