// Declare event submodules
pub mod common;
pub mod log;
pub mod position_closed;
pub mod position_created;
pub mod repaid;

pub use common::{BlockInfo, Event, MappingError, TransactionInfo};
pub use log::{DecodeError, EventParams, RawLog};
pub use position_closed::PositionClosedParams;
pub use position_created::PositionCreatedParams;
pub use repaid::RepaidParams;

/// A log decoded into one of the LendingPool events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LendingPoolEvent {
    PositionClosed(Event<PositionClosedParams>),
    PositionCreated(Event<PositionCreatedParams>),
    Repaid(Event<RepaidParams>),
}

impl LendingPoolEvent {
    /// Decodes `log` by its signature topic. Returns `Ok(None)` for logs that
    /// are not LendingPool events, anonymous (topic-less) logs included.
    pub fn from_log(log: &RawLog) -> Result<Option<Self>, DecodeError> {
        let Some(topic) = log.signature() else {
            return Ok(None);
        };
        let event = if topic == PositionClosedParams::topic() {
            Self::PositionClosed(log.decode()?)
        } else if topic == PositionCreatedParams::topic() {
            Self::PositionCreated(log.decode()?)
        } else if topic == RepaidParams::topic() {
            Self::Repaid(log.decode()?)
        } else {
            return Ok(None);
        };
        Ok(Some(event))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PositionClosed(_) => "PositionClosed",
            Self::PositionCreated(_) => "PositionCreated",
            Self::Repaid(_) => "Repaid",
        }
    }
}
