//! The end-to-end prediction pipeline.

use serde::Serialize;
use std::sync::Arc;

use crate::error::PredictError;
use crate::history::MatchHistory;
use crate::model::Classifier;
use crate::tiers::TierTable;

use super::confidence::{classify_confidence, ConfidenceLevel};
use super::engine::{predict, OutcomeProbabilities};
use super::features::{build_features, FeatureVector};
use super::form::{recent_form, FormSummary, DEFAULT_FORM_WINDOW};

/// Everything the presentation layer needs to render one prediction.
/// Plain data only.
#[derive(Debug, Clone, Serialize)]
pub struct MatchPrediction {
    pub home_team: String,
    pub away_team: String,
    pub home_tier: u8,
    pub away_tier: u8,
    pub home_form: FormSummary,
    pub away_form: FormSummary,
    pub features: FeatureVector,
    pub probabilities: OutcomeProbabilities,
    pub confidence: ConfidenceLevel,
    pub interpretation: &'static str,
}

/// The core prediction pipeline.
///
/// Holds immutable handles to everything loaded once at process startup
/// (history, tier table, trained model). Each request is a pure function
/// of those handles and the two team identifiers, so shared references to
/// a `Predictor` are safe to use concurrently.
pub struct Predictor {
    history: Arc<MatchHistory>,
    tiers: TierTable,
    classifier: Box<dyn Classifier>,
    form_window: usize,
}

impl Predictor {
    pub fn new(
        history: Arc<MatchHistory>,
        tiers: TierTable,
        classifier: Box<dyn Classifier>,
    ) -> Self {
        Self {
            history,
            tiers,
            classifier,
            form_window: DEFAULT_FORM_WINDOW,
        }
    }

    /// Override the recent-form window (default 5).
    pub fn with_form_window(mut self, form_window: usize) -> Self {
        self.form_window = form_window.max(1);
        self
    }

    /// Swap in freshly loaded history. This is the explicit refresh hook;
    /// nothing expires behind the caller's back.
    pub fn reload_history(&mut self, history: Arc<MatchHistory>) {
        self.history = history;
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Estimate the outcome probabilities for one fixture.
    ///
    /// Rejects self-matches before any computation, stops before feature
    /// construction when either team lacks qualifying history, and
    /// surfaces classifier failures untouched.
    pub fn predict(&self, home_team: &str, away_team: &str) -> Result<MatchPrediction, PredictError> {
        if home_team == away_team {
            return Err(PredictError::SameTeam {
                team: home_team.to_string(),
            });
        }

        let home_form = recent_form(&self.history, home_team, self.form_window);
        let away_form = recent_form(&self.history, away_team, self.form_window);
        let (home_form, away_form) = match (home_form, away_form) {
            (Some(home), Some(away)) => (home, away),
            (home, away) => {
                let mut teams = Vec::new();
                if home.is_none() {
                    teams.push(home_team.to_string());
                }
                if away.is_none() {
                    teams.push(away_team.to_string());
                }
                return Err(PredictError::InsufficientData { teams });
            }
        };

        let features = build_features(&self.tiers, home_team, away_team, &home_form, &away_form);
        let probabilities = predict(self.classifier.as_ref(), &features)?;
        let confidence = classify_confidence(probabilities.max());

        Ok(MatchPrediction {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_tier: self.tiers.tier_of(home_team),
            away_tier: self.tiers.tier_of(away_team),
            home_form,
            away_form,
            features,
            probabilities,
            confidence,
            interpretation: confidence.interpretation(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{MatchOutcome, MatchRecord};
    use crate::model::LogisticModel;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn record(date: &str, home: &str, away: &str, home_goals: u32, away_goals: u32) -> MatchRecord {
        let result = match home_goals.cmp(&away_goals) {
            std::cmp::Ordering::Greater => MatchOutcome::Home,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Away,
        };
        MatchRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            home_team: home.into(),
            away_team: away.into(),
            home_goals,
            away_goals,
            result,
        }
    }

    fn sample_history() -> Arc<MatchHistory> {
        Arc::new(MatchHistory::from_records(vec![
            record("2024-01-07", "Club América", "Atlas", 3, 0),
            record("2024-01-14", "Atlas", "Puebla", 1, 1),
            record("2024-01-21", "Puebla", "Club América", 0, 2),
            record("2024-01-28", "Club América", "Puebla", 1, 1),
            record("2024-02-04", "Atlas", "Club América", 0, 1),
        ]))
    }

    fn model() -> LogisticModel {
        LogisticModel::new(
            vec!["A".into(), "D".into(), "H".into()],
            vec![
                vec![-0.9, -0.6, -0.4, 0.3],
                vec![-0.1, 0.0, 0.0, 0.0],
                vec![0.9, 0.6, 0.4, -0.3],
            ],
            vec![-0.3, 0.0, 0.2],
        )
        .unwrap()
    }

    fn predictor() -> Predictor {
        Predictor::new(sample_history(), TierTable::liga_mx(), Box::new(model()))
    }

    #[test]
    fn self_match_is_rejected_before_any_computation() {
        let p = predictor();
        let err = p.predict("Atlas", "Atlas").unwrap_err();
        assert!(matches!(err, PredictError::SameTeam { .. }));

        // Same rejection even for a team with no history at all.
        let err = p.predict("Unknown FC", "Unknown FC").unwrap_err();
        assert!(matches!(err, PredictError::SameTeam { .. }));
    }

    #[test]
    fn missing_history_names_every_lacking_team() {
        let p = predictor();
        let err = p.predict("Unknown FC", "Also Unknown FC").unwrap_err();
        match err {
            PredictError::InsufficientData { teams } => {
                assert_eq!(teams, vec!["Unknown FC", "Also Unknown FC"]);
            }
            other => panic!("expected InsufficientData, got {:?}", other),
        }

        let err = p.predict("Club América", "Unknown FC").unwrap_err();
        match err {
            PredictError::InsufficientData { teams } => {
                assert_eq!(teams, vec!["Unknown FC"]);
            }
            other => panic!("expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn probabilities_sum_to_one() {
        let p = predictor();
        let prediction = p.predict("Club América", "Atlas").unwrap();
        let total = prediction.probabilities.home
            + prediction.probabilities.draw
            + prediction.probabilities.away;
        assert_relative_eq!(total, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn prediction_carries_tiers_forms_and_features() {
        let p = predictor();
        let prediction = p.predict("Club América", "Atlas").unwrap();
        assert_eq!(prediction.home_tier, 1);
        assert_eq!(prediction.away_tier, 3);
        // América: points [3, 1, 3, 3] over four fixtures.
        assert_relative_eq!(prediction.home_form.form_5, 10.0 / 4.0, epsilon = 1e-12);
        assert_relative_eq!(prediction.features.diff_tier, 2.0, epsilon = 1e-12);
        assert_relative_eq!(
            prediction.features.diff_form_5,
            prediction.home_form.form_5 - prediction.away_form.form_5,
            epsilon = 1e-12
        );
        assert_eq!(prediction.interpretation, prediction.confidence.interpretation());
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let p = predictor();
        let first = p.predict("Club América", "Atlas").unwrap();
        let second = p.predict("Club América", "Atlas").unwrap();
        assert_eq!(first.features, second.features);
        assert_eq!(first.probabilities, second.probabilities);
        assert_eq!(first.confidence, second.confidence);
    }

    #[test]
    fn reload_history_swaps_the_handle() {
        let mut p = predictor();
        p.predict("Club América", "Atlas").unwrap();

        let fresh = Arc::new(MatchHistory::from_records(vec![record(
            "2024-03-01",
            "Necaxa",
            "Tijuana",
            2,
            0,
        )]));
        p.reload_history(fresh);

        // Old teams are gone from the new handle.
        let err = p.predict("Club América", "Atlas").unwrap_err();
        assert!(matches!(err, PredictError::InsufficientData { .. }));
        assert!(p.predict("Necaxa", "Tijuana").is_ok());
    }

    #[test]
    fn classifier_failure_propagates() {
        struct BrokenClassifier {
            labels: Vec<String>,
        }
        impl crate::model::Classifier for BrokenClassifier {
            fn class_labels(&self) -> &[String] {
                &self.labels
            }
            fn predict_proba(
                &self,
                _features: &crate::predictor::features::FeatureVector,
            ) -> Result<Vec<f64>, PredictError> {
                Err(PredictError::Classifier {
                    reason: "malformed input shape".into(),
                })
            }
        }

        let p = Predictor::new(
            sample_history(),
            TierTable::liga_mx(),
            Box::new(BrokenClassifier {
                labels: vec!["H".into(), "D".into(), "A".into()],
            }),
        );
        let err = p.predict("Club América", "Atlas").unwrap_err();
        assert!(matches!(err, PredictError::Classifier { .. }));
    }
}
