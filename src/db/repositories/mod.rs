use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager};
use thiserror::Error;

use crate::db::models::Entity;

// Define the common DBPool type alias, making it available to submodules
pub type DBPool = r2d2::Pool<ConnectionManager<PgConnection>>;

// Declare the repository implementation modules
pub mod position_closed;
pub mod position_created;
pub mod repaid;

pub use position_closed::PositionClosedRepository;
pub use position_created::PositionCreatedRepository;
pub use repaid::RepaidRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to get DB connection: {0}")]
    Pool(#[from] r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("in-memory store lock poisoned")]
    Poisoned,
}

/// Persistence for one entity type.
///
/// Writes are upserts keyed by entity id: saving the same entity twice leaves
/// a single row holding the latest values.
pub trait Repository<E: Entity>: Send + Sync {
    fn upsert(&self, entity: &E) -> Result<(), StoreError>;

    fn find(&self, id: &str) -> Result<Option<E>, StoreError>;

    /// All entities for `user`, ordered by block number then id.
    fn find_by_user(&self, user: &str) -> Result<Vec<E>, StoreError>;
}
