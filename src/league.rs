//! League: the store operations the API needs, on top of an injected document store.

use std::sync::Mutex;

use crate::models::{LeagueData, LeagueError, MatchRecord, TeamStats};
use crate::store::DocumentStore;

/// Shared league handle. Reads load the document as-is; every mutation runs
/// load -> modify -> save while holding one process-wide lock, so two requests never
/// interleave their writes.
pub struct League {
    store: Box<dyn DocumentStore>,
    write_lock: Mutex<()>,
}

impl League {
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            write_lock: Mutex::new(()),
        }
    }

    /// The full document: teams and match log.
    pub fn load_all(&self) -> Result<LeagueData, LeagueError> {
        Ok(self.store.load()?)
    }

    /// Registered team names in registration order.
    pub fn teams(&self) -> Result<Vec<String>, LeagueError> {
        Ok(self.load_all()?.teams)
    }

    /// Standings recomputed from the complete match history.
    pub fn table(&self) -> Result<Vec<TeamStats>, LeagueError> {
        Ok(self.load_all()?.table())
    }

    /// Register a team; returns the team list including the new one.
    pub fn add_team(&self, name: &str) -> Result<Vec<String>, LeagueError> {
        let teams = self.mutate("add_team", |data| {
            data.add_team(name)?;
            Ok(data.teams.clone())
        })?;
        log::info!("Registered team {:?} ({} teams)", name.trim(), teams.len());
        Ok(teams)
    }

    /// Append a match result. Both teams must be registered.
    pub fn add_match(&self, record: MatchRecord) -> Result<(), LeagueError> {
        let summary = format!(
            "{} {}-{} {}",
            record.home_team, record.home_score, record.away_score, record.away_team
        );
        self.mutate("add_match", |data| data.add_match(record))?;
        log::info!("Recorded match {}", summary);
        Ok(())
    }

    /// Clear the match history; teams are kept. Returns the number of matches removed.
    pub fn reset_matches(&self) -> Result<usize, LeagueError> {
        let cleared = self.mutate("reset_matches", |data| Ok(data.reset_matches()))?;
        log::info!("Cleared {} match(es)", cleared);
        Ok(cleared)
    }

    /// Run `op` against a freshly loaded document under the write lock; save only if it succeeds.
    fn mutate<T>(
        &self,
        operation: &'static str,
        op: impl FnOnce(&mut LeagueData) -> Result<T, LeagueError>,
    ) -> Result<T, LeagueError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| LeagueError::Storage(format!("write lock poisoned during {}", operation)))?;
        let mut data = self.store.load()?;
        let out = op(&mut data).map_err(|e| {
            log::debug!("{} rejected: {}", operation, e);
            e
        })?;
        self.store.save(&data)?;
        Ok(out)
    }
}
