//! Fixed-schema feature construction for the outcome classifier.

use serde::Serialize;

use crate::predictor::form::FormSummary;
use crate::tiers::TierTable;

/// Input record for the outcome classifier.
///
/// The field names and the column order of [`FeatureVector::as_array`] are
/// the schema the model was trained against. Changing either silently
/// invalidates every prediction, so treat this struct as a wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    /// Away tier minus home tier (positive when home is stronger)
    pub diff_tier: f64,
    /// Home mean points minus away mean points
    pub diff_form_5: f64,
    /// Home mean goals scored minus away mean goals scored
    pub diff_goals_for_5: f64,
    /// Home mean goals conceded minus away mean goals conceded
    pub diff_goals_against_5: f64,
}

impl FeatureVector {
    /// Number of columns in the feature schema.
    pub const WIDTH: usize = 4;

    /// Columns in training order:
    /// `[diff_tier, diff_form_5, diff_goals_for_5, diff_goals_against_5]`.
    pub fn as_array(&self) -> [f64; Self::WIDTH] {
        [
            self.diff_tier,
            self.diff_form_5,
            self.diff_goals_for_5,
            self.diff_goals_against_5,
        ]
    }
}

/// Combine tier difference and form differences for one fixture.
///
/// Pure; the pipeline has already rejected self-matches and missing form
/// summaries before this runs.
pub fn build_features(
    tiers: &TierTable,
    home_team: &str,
    away_team: &str,
    home_form: &FormSummary,
    away_form: &FormSummary,
) -> FeatureVector {
    let home_tier = tiers.tier_of(home_team);
    let away_tier = tiers.tier_of(away_team);
    FeatureVector {
        diff_tier: f64::from(away_tier) - f64::from(home_tier),
        diff_form_5: home_form.form_5 - away_form.form_5,
        diff_goals_for_5: home_form.goals_for_5 - away_form.goals_for_5,
        diff_goals_against_5: home_form.goals_against_5 - away_form.goals_against_5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn form(points: f64, scored: f64, conceded: f64) -> FormSummary {
        FormSummary {
            form_5: points,
            goals_for_5: scored,
            goals_against_5: conceded,
        }
    }

    #[test]
    fn tier_one_home_against_tier_three_away_gives_diff_two() {
        let tiers = TierTable::liga_mx();
        let f = build_features(
            &tiers,
            "Club América", // tier 1
            "Mazatlán FC",  // tier 3
            &form(2.0, 1.6, 0.8),
            &form(0.8, 0.6, 1.4),
        );
        assert_relative_eq!(f.diff_tier, 2.0, epsilon = 1e-12);
        assert_relative_eq!(f.diff_form_5, 1.2, epsilon = 1e-12);
        assert_relative_eq!(f.diff_goals_for_5, 1.0, epsilon = 1e-12);
        assert_relative_eq!(f.diff_goals_against_5, -0.6, epsilon = 1e-12);
    }

    #[test]
    fn unknown_teams_fall_back_to_medium_tier() {
        let tiers = TierTable::liga_mx();
        let f = build_features(
            &tiers,
            "Unknown FC",
            "Also Unknown FC",
            &form(1.0, 1.0, 1.0),
            &form(1.0, 1.0, 1.0),
        );
        assert_relative_eq!(f.diff_tier, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn array_order_matches_training_schema() {
        let f = FeatureVector {
            diff_tier: 1.0,
            diff_form_5: 2.0,
            diff_goals_for_5: 3.0,
            diff_goals_against_5: 4.0,
        };
        assert_eq!(f.as_array(), [1.0, 2.0, 3.0, 4.0]);
    }
}
