//! Coarse confidence banding over the favorite outcome's probability.

use serde::Serialize;
use std::fmt;

/// Inclusive lower bound of the High band.
const HIGH_THRESHOLD: f64 = 0.65;
/// Inclusive lower bound of the Medium band.
const MEDIUM_THRESHOLD: f64 = 0.45;

/// How lopsided the predicted outcome is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// Human-readable reading of the band.
    pub fn interpretation(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "Clear superiority based on hierarchy and form.",
            ConfidenceLevel::Medium => "Marked tendency, but the match will be contested.",
            ConfidenceLevel::Low => "Very balanced match or high chance of an upset.",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::Low => write!(f, "Low"),
            ConfidenceLevel::Medium => write!(f, "Medium"),
            ConfidenceLevel::High => write!(f, "High"),
        }
    }
}

/// Band for the highest of the three outcome probabilities.
/// Total on [0,1]: the bands are contiguous with inclusive lower bounds.
pub fn classify_confidence(max_probability: f64) -> ConfidenceLevel {
    if max_probability >= HIGH_THRESHOLD {
        ConfidenceLevel::High
    } else if max_probability >= MEDIUM_THRESHOLD {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}
