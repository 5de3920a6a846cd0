//! Multinomial logistic regression over the four-column feature schema.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::error::PredictError;
use crate::model::Classifier;
use crate::predictor::features::FeatureVector;

/// A pre-trained logistic regression model.
///
/// The JSON artifact carries one coefficient row (width 4) and one
/// intercept per class, classes in the model's own order. Class scores go
/// through a softmax, so the returned probabilities always sum to 1.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModel {
    classes: Vec<String>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LogisticModel {
    pub fn new(
        classes: Vec<String>,
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    ) -> Result<Self, PredictError> {
        let model = Self {
            classes,
            coefficients,
            intercepts,
        };
        model.validate()?;
        Ok(model)
    }

    /// Parse and validate a JSON artifact.
    pub fn from_json(raw: &str) -> Result<Self> {
        let model: LogisticModel = serde_json::from_str(raw).context("parsing model JSON")?;
        model.validate().context("validating model shape")?;
        Ok(model)
    }

    /// Load the trained model artifact from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading model artifact {}", path.display()))?;
        let model = Self::from_json(&raw)
            .with_context(|| format!("loading model artifact {}", path.display()))?;
        info!(
            "Loaded logistic model with {} classes: {:?}",
            model.classes.len(),
            model.classes
        );
        Ok(model)
    }

    fn validate(&self) -> Result<(), PredictError> {
        if self.coefficients.len() != self.classes.len()
            || self.intercepts.len() != self.classes.len()
        {
            return Err(PredictError::Classifier {
                reason: format!(
                    "{} classes but {} coefficient rows and {} intercepts",
                    self.classes.len(),
                    self.coefficients.len(),
                    self.intercepts.len()
                ),
            });
        }
        for (class, row) in self.classes.iter().zip(&self.coefficients) {
            if row.len() != FeatureVector::WIDTH {
                return Err(PredictError::Classifier {
                    reason: format!(
                        "class {:?} has {} coefficients, feature schema has {} columns",
                        class,
                        row.len(),
                        FeatureVector::WIDTH
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Classifier for LogisticModel {
    fn class_labels(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, PredictError> {
        // Deserialized models may never have been validated.
        self.validate()?;

        let x = features.as_array();
        let scores: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter().zip(x.iter()).map(|(w, xi)| w * xi).sum::<f64>() + intercept
            })
            .collect();

        // Softmax, shifted by the max score for numeric stability.
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() {
            return Err(PredictError::Classifier {
                reason: "non-finite class score".into(),
            });
        }
        let exp: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exp.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(PredictError::Classifier {
                reason: "degenerate softmax normalizer".into(),
            });
        }
        Ok(exp.iter().map(|e| e / total).collect())
    }
}
