use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::db::models::Entity;
use crate::db::repositories::{Repository, StoreError};

/// Process-local repository keyed by entity id. Backs tests and dry runs.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    rows: RwLock<BTreeMap<String, E>>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Poisoned)?;
        Ok(rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Every stored entity, ordered by id.
    pub fn all(&self) -> Result<Vec<E>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Poisoned)?;
        Ok(rows.values().cloned().collect())
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn upsert(&self, entity: &E) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::Poisoned)?;
        rows.insert(entity.id().to_string(), entity.clone());
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Option<E>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Poisoned)?;
        Ok(rows.get(id).cloned())
    }

    fn find_by_user(&self, user: &str) -> Result<Vec<E>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Poisoned)?;
        let mut matches: Vec<E> = rows.values().filter(|e| e.user() == user).cloned().collect();
        matches.sort_by(|a, b| {
            a.block_number()
                .cmp(b.block_number())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(matches)
    }
}
