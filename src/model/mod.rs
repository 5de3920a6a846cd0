//! The trained-model capability the pipeline runs against.

use crate::error::PredictError;
use crate::predictor::features::FeatureVector;

pub mod logreg;
pub use logreg::LogisticModel;

/// What the pipeline requires of a trained outcome model.
///
/// The model is opaque here: any implementation that can score the
/// four-column feature schema and name its classes can be substituted
/// without touching the pipeline.
pub trait Classifier: Send + Sync {
    /// Class labels in the model's own output order (e.g. `["A", "D", "H"]`).
    fn class_labels(&self) -> &[String];

    /// One probability per class, same order as [`class_labels`](Self::class_labels).
    /// Structural problems (wrong feature width, bad internal shape) are
    /// errors, never defaulted.
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, PredictError>;
}
