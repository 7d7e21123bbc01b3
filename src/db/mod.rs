use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

// Declare database submodules
pub mod memory;
pub mod models;
pub mod postgres; // Contains schema.rs
pub mod repositories;

use memory::InMemoryRepository;
use models::{PositionClosed, PositionCreated, Repaid};
use repositories::{
    DBPool, PositionClosedRepository, PositionCreatedRepository, RepaidRepository, Repository,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies any pending schema migrations.
pub fn run_migrations(pool: &DBPool) -> Result<()> {
    let mut conn = pool
        .get()
        .context("Failed to get DB connection for migrations")?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Failed to run migrations: {}", e))?;
    tracing::info!("Applied {} pending migration(s).", applied.len());
    Ok(())
}

/// One repository per entity type, shared by the worker and the API.
#[derive(Clone)]
pub struct Repositories {
    pub position_closed: Arc<dyn Repository<PositionClosed>>,
    pub position_created: Arc<dyn Repository<PositionCreated>>,
    pub repaid: Arc<dyn Repository<Repaid>>,
}

impl Repositories {
    pub fn postgres(pool: Arc<DBPool>) -> Self {
        Self {
            position_closed: Arc::new(PositionClosedRepository::new(pool.clone())),
            position_created: Arc::new(PositionCreatedRepository::new(pool.clone())),
            repaid: Arc::new(RepaidRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            position_closed: Arc::new(InMemoryRepository::<PositionClosed>::new()),
            position_created: Arc::new(InMemoryRepository::<PositionCreated>::new()),
            repaid: Arc::new(InMemoryRepository::<Repaid>::new()),
        }
    }
}
