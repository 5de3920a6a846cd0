use thiserror::Error;

/// Failure modes of the prediction pipeline.
///
/// Each variant is a distinct outcome the caller can react to; none is
/// recoverable by retrying the same request with the same inputs.
#[derive(Debug, Error)]
pub enum PredictError {
    /// A fixture needs two distinct teams. Rejected before any feature
    /// or form computation happens.
    #[error("home and away team are both {team:?}")]
    SameTeam { team: String },

    /// Listed teams have zero qualifying historical matches, so no form
    /// statistics exist; prediction is not attempted.
    #[error("insufficient match history for: {}", .teams.join(", "))]
    InsufficientData { teams: Vec<String> },

    /// The classifier failed structurally (wrong feature width, label and
    /// probability counts out of sync, non-finite output). Fatal for the
    /// request; a silent fallback would produce meaningless probabilities.
    #[error("classifier failure: {reason}")]
    Classifier { reason: String },
}
