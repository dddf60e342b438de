//! Standings: aggregate the match log into a ranked table.

use crate::models::{MatchRecord, Side, TeamStats};
use std::collections::HashMap;

/// Compute the league table from registered teams and the match log.
///
/// 1. One zeroed row per team, in registration order.
/// 2. Replay matches in submission order. A match naming an unregistered team, or the same
///    team on both sides, is skipped without touching any row.
/// 3. Sort by points, then points differential, then points scored, all descending. The sort
///    is stable, so full ties keep registration order.
pub fn compute_table<'a, S, I>(teams: &[S], matches: I) -> Vec<TeamStats>
where
    S: AsRef<str>,
    I: IntoIterator<Item = &'a MatchRecord>,
{
    let mut table: Vec<TeamStats> = teams.iter().map(|t| TeamStats::new(t.as_ref())).collect();

    let mut index: HashMap<&str, usize> = HashMap::with_capacity(teams.len());
    for (i, t) in teams.iter().enumerate() {
        index.entry(t.as_ref()).or_insert(i);
    }

    for m in matches {
        let (home, away) = match (
            index.get(m.home_team.as_str()),
            index.get(m.away_team.as_str()),
        ) {
            (Some(&h), Some(&a)) if h != a => (h, a),
            _ => continue,
        };
        let winner = m.winner();
        table[home].record(m.home_score, m.away_score, winner == Side::Home);
        table[away].record(m.away_score, m.home_score, winner == Side::Away);
    }

    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.diff.cmp(&a.diff))
            .then_with(|| b.scored.cmp(&a.scored))
    });
    table
}
