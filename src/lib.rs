//! Indexer for the LendingPool contract.
//!
//! Decodes `PositionClosed`, `PositionCreated` and `Repaid` logs, projects each
//! onto a write-once entity keyed by transaction hash and log index, and
//! serves the stored entities over a small HTTP API.

pub mod config;
pub mod db;
pub mod events;
pub mod handlers;
pub mod mappings;
pub mod router;
pub mod testing;
pub mod worker;

pub use db::Repositories;
pub use worker::{LendingPoolWorker, ProcessSummary};
