//! Persistence for the league document.

mod error;
mod in_memory;
mod json_file;

pub use error::StoreError;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

use crate::models::LeagueData;

/// Whole-document storage: every load returns the full league, every save replaces it.
pub trait DocumentStore: Send + Sync {
    /// Load the league. A store that has never been written returns an empty league.
    fn load(&self) -> Result<LeagueData, StoreError>;

    /// Replace the stored league with `data`.
    fn save(&self, data: &LeagueData) -> Result<(), StoreError>;
}
