//! Data structures for the league: teams, match records, standings rows.

mod league;
mod match_record;
mod team_stats;

pub use league::{LeagueData, LeagueError};
pub use match_record::{MatchEntry, MatchRecord, Side};
pub use team_stats::{TeamStats, POINTS_FOR_LOSS, POINTS_FOR_WIN};
