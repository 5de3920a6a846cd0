//! Single-shot classifier invocation and canonical label mapping.

use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

use crate::error::PredictError;
use crate::model::Classifier;
use crate::predictor::features::FeatureVector;

/// Class labels the pipeline expects a trained model to expose.
const LABEL_HOME: &str = "H";
const LABEL_DRAW: &str = "D";
const LABEL_AWAY: &str = "A";

/// Probability triple in canonical {home, draw, away} order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeProbabilities {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl OutcomeProbabilities {
    /// Probability of the favorite outcome.
    pub fn max(&self) -> f64 {
        self.home.max(self.draw).max(self.away)
    }
}

/// Run the classifier once on the feature vector and map its raw labels to
/// canonical order.
///
/// A canonical label the model never emits defaults to probability 0.0;
/// that case is logged because it usually means the artifact was trained
/// against a different label set than `H`/`D`/`A`. Structural failures
/// (label and probability counts out of sync, non-finite output) are
/// surfaced verbatim, never retried or defaulted.
pub fn predict(
    classifier: &dyn Classifier,
    features: &FeatureVector,
) -> Result<OutcomeProbabilities, PredictError> {
    let probs = classifier.predict_proba(features)?;
    let labels = classifier.class_labels();

    if labels.len() != probs.len() {
        return Err(PredictError::Classifier {
            reason: format!(
                "classifier returned {} probabilities for {} labels",
                probs.len(),
                labels.len()
            ),
        });
    }
    if let Some(bad) = probs.iter().find(|p| !p.is_finite()) {
        return Err(PredictError::Classifier {
            reason: format!("non-finite class probability {}", bad),
        });
    }

    let mut by_label: HashMap<&str, f64> = HashMap::with_capacity(labels.len());
    for (label, p) in labels.iter().zip(&probs) {
        match label.as_str() {
            LABEL_HOME | LABEL_DRAW | LABEL_AWAY => {
                by_label.insert(label.as_str(), *p);
            }
            other => warn!("Ignoring unrecognized classifier class {:?}", other),
        }
    }

    let probability_of = |label: &str| {
        by_label.get(label).copied().unwrap_or_else(|| {
            warn!(
                "Classifier exposes no {:?} class; defaulting its probability to 0",
                label
            );
            0.0
        })
    };

    Ok(OutcomeProbabilities {
        home: probability_of(LABEL_HOME),
        draw: probability_of(LABEL_DRAW),
        away: probability_of(LABEL_AWAY),
    })
}
