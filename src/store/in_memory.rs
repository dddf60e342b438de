//! InMemoryStore - RwLock-backed league document for tests and throwaway runs.

use std::sync::RwLock;

use super::{DocumentStore, StoreError};
use crate::models::LeagueData;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<LeagueData>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing document.
    pub fn with_data(data: LeagueData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<LeagueData, StoreError> {
        let data = self
            .data
            .read()
            .map_err(|_| StoreError::LockPoisoned("load"))?;
        Ok(data.clone())
    }

    fn save(&self, data: &LeagueData) -> Result<(), StoreError> {
        let mut stored = self
            .data
            .write()
            .map_err(|_| StoreError::LockPoisoned("save"))?;
        *stored = data.clone();
        Ok(())
    }
}
