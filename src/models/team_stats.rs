//! TeamStats: one derived standings row.

use serde::{Deserialize, Serialize};

/// Standings row for a team. Never persisted; rebuilt from the match log on every query.
///
/// Field names on the wire keep the table's column headings (`P`, `W`, `DIFF`, ...).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub name: String,
    #[serde(rename = "P")]
    pub played: u32,
    #[serde(rename = "W")]
    pub wins: u32,
    #[serde(rename = "L")]
    pub losses: u32,
    #[serde(rename = "PS")]
    pub scored: u64,
    #[serde(rename = "PC")]
    pub conceded: u64,
    #[serde(rename = "DIFF")]
    pub diff: i64,
    /// Positive: current winning run. Negative: current losing run. Zero: no games yet.
    #[serde(rename = "Str")]
    pub streak: i32,
    #[serde(rename = "PTS")]
    pub points: u32,
}

/// League points for a win.
pub const POINTS_FOR_WIN: u32 = 2;
/// League points for a loss (participation point).
pub const POINTS_FOR_LOSS: u32 = 1;

impl TeamStats {
    /// Create an all-zero row for a registered team.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Apply one match from this team's point of view.
    pub fn record(&mut self, scored: u32, conceded: u32, won: bool) {
        self.played += 1;
        self.scored += u64::from(scored);
        self.conceded += u64::from(conceded);
        self.diff = self.scored as i64 - self.conceded as i64;
        if won {
            self.add_win();
        } else {
            self.add_loss();
        }
    }

    fn add_win(&mut self) {
        self.wins += 1;
        self.points += POINTS_FOR_WIN;
        self.streak = if self.streak >= 0 { self.streak + 1 } else { 1 };
    }

    fn add_loss(&mut self) {
        self.losses += 1;
        self.points += POINTS_FOR_LOSS;
        self.streak = if self.streak <= 0 { self.streak - 1 } else { -1 };
    }
}
