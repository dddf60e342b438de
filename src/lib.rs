//! Basketball league web app: library with models, standings logic, storage and HTTP handlers.

pub mod api;
pub mod config;
pub mod league;
pub mod logic;
pub mod models;
pub mod store;

pub use config::ServerConfig;
pub use league::League;
pub use logic::{compute_table, table_to_csv};
pub use models::{LeagueData, LeagueError, MatchEntry, MatchRecord, Side, TeamStats};
pub use store::{DocumentStore, InMemoryStore, JsonFileStore, StoreError};
