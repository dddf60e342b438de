//! LeagueData (the persisted document) and LeagueError.

use crate::logic::compute_table;
use crate::models::match_record::{MatchEntry, MatchRecord};
use crate::models::team_stats::TeamStats;
use serde::{Deserialize, Serialize};

/// Errors that can occur during league operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// Request fields missing, empty, or of the wrong type.
    InvalidInput,
    /// Team name missing, empty, or not a string.
    InvalidTeamName,
    /// Both sides of a match are the same team.
    InvalidMatch,
    /// A team with this exact name is already registered.
    DuplicateTeam(String),
    /// A match references a team that is not registered.
    UnknownTeam(String),
    /// The league document could not be read or written.
    Storage(String),
}

impl LeagueError {
    /// Validation and conflict errors are the caller's fault; storage errors are not.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, LeagueError::Storage(_))
    }
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::InvalidInput => write!(f, "Invalid input"),
            LeagueError::InvalidTeamName => write!(f, "Invalid team name"),
            LeagueError::InvalidMatch => write!(f, "A team cannot play against itself"),
            LeagueError::DuplicateTeam(_) => write!(f, "Team already exists"),
            LeagueError::UnknownTeam(_) => write!(f, "One or both teams do not exist"),
            LeagueError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for LeagueError {}

/// The whole league as stored: registered teams in registration order and the match log in
/// submission order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueData {
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub matches: Vec<MatchEntry>,
}

impl LeagueData {
    /// Create a league with the given teams and no matches.
    pub fn with_teams<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teams: teams.into_iter().map(Into::into).collect(),
            matches: Vec::new(),
        }
    }

    pub fn has_team(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t == name)
    }

    /// Register a team. Names are trimmed and must be unique (exact match).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<(), LeagueError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(LeagueError::InvalidTeamName);
        }
        if self.has_team(name_trimmed) {
            return Err(LeagueError::DuplicateTeam(name_trimmed.to_string()));
        }
        self.teams.push(name_trimmed.to_string());
        Ok(())
    }

    /// Append a match result. Both teams must already be registered.
    pub fn add_match(&mut self, record: MatchRecord) -> Result<(), LeagueError> {
        for name in [&record.home_team, &record.away_team] {
            if !self.has_team(name) {
                return Err(LeagueError::UnknownTeam(name.clone()));
            }
        }
        self.matches.push(record.into());
        Ok(())
    }

    /// Clear the match history, keeping every registered team. Returns how many matches were dropped.
    pub fn reset_matches(&mut self) -> usize {
        let cleared = self.matches.len();
        self.matches.clear();
        cleared
    }

    /// Match rows that read as valid records, in submission order.
    pub fn records(&self) -> impl Iterator<Item = &MatchRecord> {
        self.matches.iter().filter_map(MatchEntry::record)
    }

    /// Current standings computed from the full match log. Unreadable rows are skipped.
    pub fn table(&self) -> Vec<TeamStats> {
        compute_table(&self.teams, self.records())
    }
}
