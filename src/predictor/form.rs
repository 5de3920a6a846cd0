//! Recent-form statistics over a team's last few fixtures.

use serde::Serialize;

use crate::history::MatchHistory;

/// Number of recent fixtures the form window covers by default.
pub const DEFAULT_FORM_WINDOW: usize = 5;

/// Rolling form over a team's most recent fixtures.
///
/// The `_5` suffix names the default window; the fields are arithmetic
/// means over however many fixtures were actually available (at least one,
/// at most the window).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormSummary {
    /// Mean points per match (3 win / 1 draw / 0 loss)
    pub form_5: f64,
    /// Mean goals scored per match
    pub goals_for_5: f64,
    /// Mean goals conceded per match
    pub goals_against_5: f64,
}

/// Summarize the team's last `n` fixtures, most recent first.
///
/// Returns `None` when the team has zero qualifying fixtures; callers must
/// treat that as insufficient data and stop before feature construction.
pub fn recent_form(history: &MatchHistory, team: &str, n: usize) -> Option<FormSummary> {
    let recent = history.last_matches(team, n);
    if recent.is_empty() {
        return None;
    }

    let mut points = 0u32;
    let mut goals_for = 0u32;
    let mut goals_against = 0u32;
    for record in &recent {
        let (gf, ga) = record.goals_for_team(team);
        goals_for += gf;
        goals_against += ga;
        points += match gf.cmp(&ga) {
            std::cmp::Ordering::Greater => 3,
            std::cmp::Ordering::Equal => 1,
            std::cmp::Ordering::Less => 0,
        };
    }

    let played = recent.len() as f64;
    Some(FormSummary {
        form_5: f64::from(points) / played,
        goals_for_5: f64::from(goals_for) / played,
        goals_against_5: f64::from(goals_against) / played,
    })
}
