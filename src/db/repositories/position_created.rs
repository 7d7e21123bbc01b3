use std::sync::Arc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::pg::PgConnection;

use crate::db::models::position_created::PositionCreated;
// Import the schema's dsl for easy table access
use crate::db::postgres::schema::position_created::dsl::*;
use super::{DBPool, Repository, StoreError};

/// Repository struct holding the connection pool for PositionCreated operations
#[derive(Clone)]
pub struct PositionCreatedRepository {
    pool: Arc<DBPool>,
}

impl PositionCreatedRepository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<DBPool>) -> Self {
        PositionCreatedRepository { pool }
    }

    fn get_conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, StoreError> {
        Ok(self.pool.get()?)
    }
}

impl Repository<PositionCreated> for PositionCreatedRepository {
    fn upsert(&self, entity: &PositionCreated) -> Result<(), StoreError> {
        let mut conn = self.get_conn()?;
        diesel::insert_into(position_created)
            .values(entity)
            .on_conflict(id)
            .do_update()
            .set(entity)
            .execute(&mut conn)?;
        Ok(())
    }

    fn find(&self, entity_id: &str) -> Result<Option<PositionCreated>, StoreError> {
        let mut conn = self.get_conn()?;
        Ok(position_created
            .find(entity_id)
            .select(PositionCreated::as_select())
            .first(&mut conn)
            .optional()?)
    }

    fn find_by_user(&self, user: &str) -> Result<Vec<PositionCreated>, StoreError> {
        let mut conn = self.get_conn()?;
        Ok(position_created
            .filter(user_address.eq(user))
            .order((block_number.asc(), id.asc()))
            .select(PositionCreated::as_select())
            .load(&mut conn)?)
    }
}
