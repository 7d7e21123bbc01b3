use primitive_types::{H160, H256, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tiny_keccak::{Hasher, Keccak};

use super::common::{BlockInfo, Event, TransactionInfo};

const WORD: usize = 32;

/// An undecoded EVM log as delivered by the upstream log source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    pub address: H160,
    pub topics: Vec<H256>,
    #[serde(with = "hex_data")]
    pub data: Vec<u8>,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: H256,
    pub log_index: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("log has no signature topic")]
    MissingSignature,
    #[error("topic {found:?} does not match {signature}")]
    SignatureMismatch { signature: &'static str, found: H256 },
    #[error("missing parameter `{0}`")]
    MissingParam(&'static str),
    #[error("parameter `{0}` is not a valid address word")]
    InvalidAddress(&'static str),
}

/// Typed parameters of one LendingPool event.
pub trait EventParams: Sized {
    /// Canonical Solidity signature, e.g. `Repaid(address,uint256)`.
    const SIGNATURE: &'static str;

    /// keccak-256 of [`Self::SIGNATURE`].
    fn topic() -> H256;

    fn decode(reader: &mut ParamReader<'_>) -> Result<Self, DecodeError>;

    /// ABI words in declaration order.
    fn to_words(&self) -> Vec<[u8; WORD]>;
}

pub fn event_topic(signature: &str) -> H256 {
    let mut keccak = Keccak::v256();
    keccak.update(signature.as_bytes());
    let mut out = [0u8; WORD];
    keccak.finalize(&mut out);
    H256(out)
}

/// Reads parameters in declaration order: indexed ones from the topics first,
/// then 32-byte words from the data section.
pub struct ParamReader<'a> {
    topics: &'a [H256],
    data: &'a [u8],
    next_topic: usize,
    next_word: usize,
}

impl<'a> ParamReader<'a> {
    pub fn new(indexed: &'a [H256], data: &'a [u8]) -> Self {
        Self {
            topics: indexed,
            data,
            next_topic: 0,
            next_word: 0,
        }
    }

    fn word(&mut self, name: &'static str) -> Result<[u8; WORD], DecodeError> {
        if let Some(topic) = self.topics.get(self.next_topic) {
            self.next_topic += 1;
            return Ok(topic.0);
        }
        let start = self.next_word * WORD;
        let chunk = self
            .data
            .get(start..start + WORD)
            .ok_or(DecodeError::MissingParam(name))?;
        self.next_word += 1;
        let mut word = [0u8; WORD];
        word.copy_from_slice(chunk);
        Ok(word)
    }

    pub fn address(&mut self, name: &'static str) -> Result<H160, DecodeError> {
        let word = self.word(name)?;
        if word[..12].iter().any(|b| *b != 0) {
            return Err(DecodeError::InvalidAddress(name));
        }
        Ok(H160::from_slice(&word[12..]))
    }

    pub fn uint(&mut self, name: &'static str) -> Result<U256, DecodeError> {
        Ok(U256::from_big_endian(&self.word(name)?))
    }
}

pub fn address_word(address: H160) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[12..].copy_from_slice(address.as_bytes());
    word
}

pub fn uint_word(value: U256) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    value.to_big_endian(&mut word);
    word
}

impl RawLog {
    pub fn signature(&self) -> Option<H256> {
        self.topics.first().copied()
    }

    /// Decodes this log as `P`, checking the signature topic first.
    pub fn decode<P: EventParams>(&self) -> Result<Event<P>, DecodeError> {
        let found = self.signature().ok_or(DecodeError::MissingSignature)?;
        if found != P::topic() {
            return Err(DecodeError::SignatureMismatch {
                signature: P::SIGNATURE,
                found,
            });
        }
        let mut reader = ParamReader::new(&self.topics[1..], &self.data);
        let params = P::decode(&mut reader)?;
        Ok(Event {
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
        })
    }
}

mod hex_data {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(data)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let digits = raw.strip_prefix("0x").unwrap_or(&raw);
        hex::decode(digits).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{PositionClosedParams, PositionCreatedParams, RepaidParams};

    fn raw(topics: Vec<H256>, data: Vec<u8>) -> RawLog {
        RawLog {
            address: H160::repeat_byte(0x11),
            topics,
            data,
            block_number: 42,
            block_timestamp: 1_700_000_000,
            transaction_hash: H256::repeat_byte(0x22),
            log_index: 3,
        }
    }

    #[test]
    fn event_topic_matches_known_erc20_transfer() {
        assert_eq!(
            format!("{:x}", event_topic("Transfer(address,address,uint256)")),
            "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }

    #[test]
    fn decodes_params_from_data_section() {
        let user = H160::from_low_u64_be(1);
        let data = [address_word(user), uint_word(U256::from(1234))].concat();
        let log = raw(vec![PositionCreatedParams::topic()], data);

        let event = log.decode::<PositionCreatedParams>().unwrap();
        assert_eq!(event.params.user, user);
        assert_eq!(event.params.timestamp, U256::from(1234));
        assert_eq!(event.block.number, 42);
        assert_eq!(event.block.timestamp, 1_700_000_000);
        assert_eq!(event.transaction.hash, H256::repeat_byte(0x22));
        assert_eq!(event.log_index, 3);
    }

    #[test]
    fn decodes_indexed_user_from_topics() {
        let user = H160::from_low_u64_be(2);
        let data = uint_word(U256::from(500)).to_vec();
        let log = raw(vec![RepaidParams::topic(), H256(address_word(user))], data);

        let event = log.decode::<RepaidParams>().unwrap();
        assert_eq!(event.params.user, user);
        assert_eq!(event.params.amount, U256::from(500));
    }

    #[test]
    fn rejects_wrong_signature() {
        let log = raw(vec![RepaidParams::topic()], address_word(H160::zero()).to_vec());
        assert!(matches!(
            log.decode::<PositionClosedParams>(),
            Err(DecodeError::SignatureMismatch { .. })
        ));
        assert_eq!(
            raw(vec![], vec![]).decode::<PositionClosedParams>(),
            Err(DecodeError::MissingSignature)
        );
    }

    #[test]
    fn rejects_truncated_data() {
        let data = address_word(H160::zero()).to_vec();
        let log = raw(vec![RepaidParams::topic()], data);
        assert_eq!(
            log.decode::<RepaidParams>(),
            Err(DecodeError::MissingParam("amount"))
        );
    }

    #[test]
    fn rejects_dirty_address_word() {
        let mut word = address_word(H160::from_low_u64_be(9));
        word[0] = 1;
        let log = raw(vec![PositionClosedParams::topic()], word.to_vec());
        assert_eq!(
            log.decode::<PositionClosedParams>(),
            Err(DecodeError::InvalidAddress("user"))
        );
    }

    #[test]
    fn raw_log_reads_json() {
        let json = format!(
            r#"{{
                "address": "0x{addr}",
                "topics": ["{topic:?}"],
                "data": "0x{data}",
                "blockNumber": 7,
                "blockTimestamp": 99,
                "transactionHash": "0x{tx}",
                "logIndex": 0
            }}"#,
            addr = "11".repeat(20),
            topic = PositionClosedParams::topic(),
            data = hex::encode(address_word(H160::from_low_u64_be(5))),
            tx = "33".repeat(32),
        );
        let log: RawLog = serde_json::from_str(&json).unwrap();
        let event = log.decode::<PositionClosedParams>().unwrap();
        assert_eq!(event.params.user, H160::from_low_u64_be(5));
        assert_eq!(event.block.number, 7);
    }
}
