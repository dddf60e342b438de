//! JsonFileStore - the league document as a single JSON file on disk.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::{DocumentStore, StoreError};
use crate::models::LeagueData;

/// File-backed store. The whole document is read on every load and rewritten on every save.
///
/// Saves go to a temporary sibling file first and are then renamed over the target, so a
/// concurrent reader sees either the old document or the new one.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}.tmp", Uuid::new_v4().simple()));
        PathBuf::from(name)
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<LeagueData, StoreError> {
        if !self.path.exists() {
            return Ok(LeagueData::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, data: &LeagueData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)?;
        let tmp = self.temp_path();
        if let Err(e) = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}
