use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Final outcome of a fixture, seen from the home side.
///
/// Stored in the history CSV as `H` / `D` / `A` — the same encoding the
/// trained classifier uses for its class labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "A")]
    Away,
}

/// One historical fixture. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Match date; drives recency ordering
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    /// Stored result column; derivable from goals but consumed as given
    pub result: MatchOutcome,
}

impl MatchRecord {
    /// Whether the team appeared in this fixture on either side.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// (goals for, goals against) from the given team's perspective.
    /// Callers must have checked [`involves`](Self::involves) first; an
    /// unrelated team reads as the away side.
    pub fn goals_for_team(&self, team: &str) -> (u32, u32) {
        if self.home_team == team {
            (self.home_goals, self.away_goals)
        } else {
            (self.away_goals, self.home_goals)
        }
    }
}
