use bigdecimal::BigDecimal;

// Declare model modules
pub mod position_closed;
pub mod position_created;
pub mod repaid;

pub use position_closed::PositionClosed;
pub use position_created::PositionCreated;
pub use repaid::Repaid;

/// Shared view over the persisted LendingPool entities.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Entity type name, as used in logs and API errors.
    const NAME: &'static str;

    fn id(&self) -> &str;
    fn user(&self) -> &str;
    fn block_number(&self) -> &BigDecimal;
}
