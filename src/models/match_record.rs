//! MatchRecord and Side: one submitted result between two registered teams.

use crate::models::league::LeagueError;
use serde::{Deserialize, Serialize};

/// Positional form used on disk: `[team1, team2, score1, score2]`.
type MatchRow = (String, String, u32, u32);

/// Which side won the match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

/// A single recorded match. Immutable once appended to the league document.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "MatchRow", into = "MatchRow")]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl MatchRecord {
    /// Build a validated record: names are trimmed, must be non-empty and must differ.
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_score: u32,
        away_score: u32,
    ) -> Result<Self, LeagueError> {
        let home_team = home_team.into().trim().to_string();
        let away_team = away_team.into().trim().to_string();
        if home_team.is_empty() || away_team.is_empty() {
            return Err(LeagueError::InvalidInput);
        }
        if home_team == away_team {
            return Err(LeagueError::InvalidMatch);
        }
        Ok(Self {
            home_team,
            away_team,
            home_score,
            away_score,
        })
    }

    /// Home wins only on a strictly higher score; a level score goes to the away side.
    pub fn winner(&self) -> Side {
        if self.home_score > self.away_score {
            Side::Home
        } else {
            Side::Away
        }
    }
}

impl From<MatchRow> for MatchRecord {
    fn from((home_team, away_team, home_score, away_score): MatchRow) -> Self {
        Self {
            home_team,
            away_team,
            home_score,
            away_score,
        }
    }
}

impl From<MatchRecord> for MatchRow {
    fn from(m: MatchRecord) -> Self {
        (m.home_team, m.away_team, m.home_score, m.away_score)
    }
}

/// One row of the stored match log. Rows that do not read as a `MatchRecord` (negative,
/// fractional or oversized scores, wrong arity) are kept verbatim so the rest of the
/// document stays usable and a later save writes them back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchEntry {
    Valid(MatchRecord),
    Unreadable(serde_json::Value),
}

impl MatchEntry {
    pub fn record(&self) -> Option<&MatchRecord> {
        match self {
            MatchEntry::Valid(record) => Some(record),
            MatchEntry::Unreadable(_) => None,
        }
    }
}

impl From<MatchRecord> for MatchEntry {
    fn from(record: MatchRecord) -> Self {
        MatchEntry::Valid(record)
    }
}
