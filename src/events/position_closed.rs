use lazy_static::lazy_static;
use primitive_types::{H160, H256};

use super::common::{convert_address_to_hex_string, convert_hash_to_hex_string, u64_to_decimal, Event, MappingError};
use super::log::{address_word, event_topic, DecodeError, EventParams, ParamReader};
use crate::db::models::position_closed::PositionClosed;

lazy_static! {
    static ref POSITION_CLOSED_TOPIC: H256 = event_topic(PositionClosedParams::SIGNATURE);
}

/// Mirrors the LendingPool `PositionClosed(address user)` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionClosedParams {
    pub user: H160,
}

impl EventParams for PositionClosedParams {
    const SIGNATURE: &'static str = "PositionClosed(address)";

    fn topic() -> H256 {
        *POSITION_CLOSED_TOPIC
    }

    fn decode(reader: &mut ParamReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            user: reader.address("user")?,
        })
    }

    fn to_words(&self) -> Vec<[u8; 32]> {
        vec![address_word(self.user)]
    }
}

impl Event<PositionClosedParams> {
    /// Maps the event onto its database entity.
    pub fn try_map_to_db(&self) -> Result<PositionClosed, MappingError> {
        Ok(PositionClosed {
            id: self.entity_id()?,
            user: convert_address_to_hex_string(self.params.user),
            block_number: u64_to_decimal(self.block.number),
            block_timestamp: u64_to_decimal(self.block.timestamp),
            transaction_hash: convert_hash_to_hex_string(self.transaction.hash),
        })
    }
}
