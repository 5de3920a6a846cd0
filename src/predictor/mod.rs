pub mod confidence;
pub mod engine;
pub mod features;
pub mod form;
pub mod pipeline;

pub use pipeline::{MatchPrediction, Predictor};
