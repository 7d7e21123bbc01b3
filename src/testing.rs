//! Builders for mock LendingPool events.
//!
//! Every builder takes only the parameters that matter to the event plus an
//! explicit [`MockEventDefaults`] supplying the provenance fields, so a test
//! controls the whole event without any ambient state.

use primitive_types::{H160, H256, U256};

use crate::events::{
    BlockInfo, Event, EventParams, PositionClosedParams, PositionCreatedParams, RawLog,
    RepaidParams, TransactionInfo,
};

/// `0xA16081F360e3847006dB660bae1c6d1b2e17eC2A`, the address mock events use
/// for the emitting contract and the transaction hash.
pub const DEFAULT_MOCK_ADDRESS: H160 = H160([
    0xa1, 0x60, 0x81, 0xf3, 0x60, 0xe3, 0x84, 0x70, 0x06, 0xdb, 0x66, 0x0b, 0xae, 0x1c, 0x6d,
    0x1b, 0x2e, 0x17, 0xec, 0x2a,
]);

/// Provenance stamped onto every mock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockEventDefaults {
    pub address: H160,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: H256,
    pub log_index: u64,
}

impl Default for MockEventDefaults {
    fn default() -> Self {
        Self {
            address: DEFAULT_MOCK_ADDRESS,
            block_number: 1,
            block_timestamp: 1,
            transaction_hash: H256::from(DEFAULT_MOCK_ADDRESS),
            log_index: 1,
        }
    }
}

impl MockEventDefaults {
    pub fn with_log_index(mut self, log_index: u64) -> Self {
        self.log_index = log_index;
        self
    }

    pub fn with_transaction_hash(mut self, hash: H256) -> Self {
        self.transaction_hash = hash;
        self
    }

    pub fn with_block(mut self, number: u64, timestamp: u64) -> Self {
        self.block_number = number;
        self.block_timestamp = timestamp;
        self
    }

    /// Wraps `params` in an event carrying these defaults.
    pub fn event<P>(&self, params: P) -> Event<P> {
        Event {
            address: self.address,
            log_index: self.log_index,
            block: BlockInfo {
                number: self.block_number,
                timestamp: self.block_timestamp,
            },
            transaction: TransactionInfo {
                hash: self.transaction_hash,
            },
            params,
        }
    }
}

pub fn create_position_closed_event(
    user: H160,
    defaults: &MockEventDefaults,
) -> Event<PositionClosedParams> {
    defaults.event(PositionClosedParams { user })
}

pub fn create_position_created_event(
    user: H160,
    timestamp: U256,
    defaults: &MockEventDefaults,
) -> Event<PositionCreatedParams> {
    defaults.event(PositionCreatedParams { user, timestamp })
}

pub fn create_repaid_event(
    user: H160,
    amount: U256,
    defaults: &MockEventDefaults,
) -> Event<RepaidParams> {
    defaults.event(RepaidParams { user, amount })
}

/// Encodes `event` as a raw log. The first `indexed` parameters go into the
/// topics, the rest into the data section.
pub fn encode_log<P: EventParams>(event: &Event<P>, indexed: usize) -> RawLog {
    let words = event.params.to_words();
    let split = indexed.min(words.len());
    let mut topics = vec![P::topic()];
    topics.extend(words[..split].iter().map(|w| H256(*w)));
    RawLog {
        address: event.address,
        topics,
        data: words[split..].concat(),
        block_number: event.block.number,
        block_timestamp: event.block.timestamp,
        transaction_hash: event.transaction.hash,
        log_index: event.log_index,
    }
}
