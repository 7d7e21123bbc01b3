use bigdecimal::BigDecimal;
use primitive_types::{H160, H256, U256};
use std::str::FromStr;
use thiserror::Error;

/// Block provenance attached to every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInfo {
    pub number: u64,
    pub timestamp: u64,
}

/// Transaction provenance attached to every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionInfo {
    pub hash: H256,
}

/// A decoded LendingPool log: typed parameters plus where the log came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<P> {
    /// Contract that emitted the log.
    pub address: H160,
    /// Position of the log within its transaction.
    pub log_index: u64,
    pub block: BlockInfo,
    pub transaction: TransactionInfo,
    pub params: P,
}

/// Errors raised while projecting an event onto its entity.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("log index {0} does not fit in a 32-bit signed integer")]
    LogIndexOutOfRange(u64),
    #[error("failed to convert {field} to a numeric value")]
    Numeric { field: &'static str },
}

impl<P> Event<P> {
    /// Derives the entity id: transaction hash bytes followed by the log index
    /// as a little-endian i32.
    pub fn entity_id(&self) -> Result<String, MappingError> {
        entity_id(self.transaction.hash, self.log_index)
    }
}

pub fn entity_id(tx_hash: H256, log_index: u64) -> Result<String, MappingError> {
    let index = i32::try_from(log_index).map_err(|_| MappingError::LogIndexOutOfRange(log_index))?;
    let mut bytes = Vec::with_capacity(H256::len_bytes() + 4);
    bytes.extend_from_slice(tx_hash.as_bytes());
    bytes.extend_from_slice(&index.to_le_bytes());
    Ok(format!("0x{}", hex::encode(bytes)))
}

pub fn convert_address_to_hex_string(address: H160) -> String {
    format!("0x{}", hex::encode(address.as_bytes()))
}

pub fn convert_hash_to_hex_string(hash: H256) -> String {
    format!("0x{}", hex::encode(hash.as_bytes()))
}

/// Parses a 20-byte address, with or without the `0x` prefix.
pub fn parse_address(value: &str) -> anyhow::Result<H160> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(digits)?;
    if bytes.len() != H160::len_bytes() {
        anyhow::bail!("expected 20 address bytes, got {}", bytes.len());
    }
    Ok(H160::from_slice(&bytes))
}

pub(crate) fn u256_to_decimal(value: U256, field: &'static str) -> Result<BigDecimal, MappingError> {
    BigDecimal::from_str(&value.to_string()).map_err(|_| MappingError::Numeric { field })
}

pub(crate) fn u64_to_decimal(value: u64) -> BigDecimal {
    BigDecimal::from(value)
}
