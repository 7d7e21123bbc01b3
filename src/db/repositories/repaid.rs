use std::sync::Arc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::pg::PgConnection;

use crate::db::models::repaid::Repaid;
// Import the schema's dsl for easy table access
use crate::db::postgres::schema::repaid::dsl::*;
use super::{DBPool, Repository, StoreError};

/// Repository struct holding the connection pool for Repaid operations
#[derive(Clone)]
pub struct RepaidRepository {
    pool: Arc<DBPool>,
}

impl RepaidRepository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<DBPool>) -> Self {
        RepaidRepository { pool }
    }

    fn get_conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, StoreError> {
        Ok(self.pool.get()?)
    }
}

impl Repository<Repaid> for RepaidRepository {
    fn upsert(&self, entity: &Repaid) -> Result<(), StoreError> {
        let mut conn = self.get_conn()?;
        diesel::insert_into(repaid)
            .values(entity)
            .on_conflict(id)
            .do_update()
            .set(entity)
            .execute(&mut conn)?;
        Ok(())
    }

    fn find(&self, entity_id: &str) -> Result<Option<Repaid>, StoreError> {
        let mut conn = self.get_conn()?;
        Ok(repaid
            .find(entity_id)
            .select(Repaid::as_select())
            .first(&mut conn)
            .optional()?)
    }

    fn find_by_user(&self, user: &str) -> Result<Vec<Repaid>, StoreError> {
        let mut conn = self.get_conn()?;
        Ok(repaid
            .filter(user_address.eq(user))
            .order((block_number.asc(), id.asc()))
            .select(Repaid::as_select())
            .load(&mut conn)?)
    }
}
