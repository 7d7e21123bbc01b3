use std::sync::Arc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::pg::PgConnection;

use crate::db::models::position_closed::PositionClosed;
// Import the schema's dsl for easy table access
use crate::db::postgres::schema::position_closed::dsl::*;
use super::{DBPool, Repository, StoreError};

/// Repository struct holding the connection pool for PositionClosed operations
#[derive(Clone)]
pub struct PositionClosedRepository {
    pool: Arc<DBPool>,
}

impl PositionClosedRepository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<DBPool>) -> Self {
        PositionClosedRepository { pool }
    }

    fn get_conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, StoreError> {
        Ok(self.pool.get()?)
    }
}

impl Repository<PositionClosed> for PositionClosedRepository {
    fn upsert(&self, entity: &PositionClosed) -> Result<(), StoreError> {
        let mut conn = self.get_conn()?;
        diesel::insert_into(position_closed)
            .values(entity)
            .on_conflict(id)
            .do_update()
            .set(entity)
            .execute(&mut conn)?;
        Ok(())
    }

    fn find(&self, entity_id: &str) -> Result<Option<PositionClosed>, StoreError> {
        let mut conn = self.get_conn()?;
        Ok(position_closed
            .find(entity_id)
            .select(PositionClosed::as_select())
            .first(&mut conn)
            .optional()?)
    }

    fn find_by_user(&self, user: &str) -> Result<Vec<PositionClosed>, StoreError> {
        let mut conn = self.get_conn()?;
        Ok(position_closed
            .filter(user_address.eq(user))
            .order((block_number.asc(), id.asc()))
            .select(PositionClosed::as_select())
            .load(&mut conn)?)
    }
}
