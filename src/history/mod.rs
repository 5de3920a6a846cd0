use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub mod models;
pub use models::{MatchOutcome, MatchRecord};

/// Read-only store of historical fixtures.
///
/// Loaded once at startup and held behind an immutable handle for the
/// process lifetime; refreshing the data means loading a new store and
/// swapping the handle, never mutating this one.
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    records: Vec<MatchRecord>,
}

impl MatchHistory {
    /// Load the history from a CSV file with columns
    /// `date,home_team,away_team,home_goals,away_goals,result`.
    ///
    /// A malformed row fails the whole load; partial histories would skew
    /// every form statistic computed from them.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("opening match history {}", path.display()))?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: MatchRecord =
                row.with_context(|| format!("parsing match history {}", path.display()))?;
            records.push(record);
        }
        info!("Loaded {} match records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    /// Build a store from in-memory records.
    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// All fixtures the team appeared in, on either side, in load order.
    pub fn matches_for<'h, 't>(
        &'h self,
        team: &'t str,
    ) -> impl Iterator<Item = &'h MatchRecord> + 't
    where
        'h: 't,
    {
        self.records.iter().filter(move |r| r.involves(team))
    }

    /// The team's `n` most recent fixtures, most recent first.
    /// Fixtures sharing a date keep their load order relative to each other.
    pub fn last_matches(&self, team: &str, n: usize) -> Vec<&MatchRecord> {
        let mut matches: Vec<&MatchRecord> = self.matches_for(team).collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches.truncate(n);
        matches
    }
}
