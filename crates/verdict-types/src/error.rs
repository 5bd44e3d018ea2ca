// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Verdict Kernel failures.
///
/// Every variant is a deterministic caller-input problem — the core does
/// no I/O and has no transient failure modes. Each validation variant
/// carries the offending value so the surrounding request layer can emit
/// an actionable message without re-deriving context.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// The topic label was empty.
    #[error("topic must be a non-empty label")]
    EmptyTopic,

    /// A weight parameter outside its documented range.
    #[error("invalid weight: {field} must be in [-1, 1], got {value}")]
    InvalidWeight { field: &'static str, value: f64 },

    /// Phase angle at or beyond the tangent singularity boundary.
    #[error("singular phase: |phi| must be strictly less than pi/2, got {value}")]
    SingularPhase { value: f64 },

    /// Non-positive (or non-finite) tangent clamp supplied.
    #[error("invalid clamp: tanClamp must be a positive finite number, got {value}")]
    InvalidClamp { value: f64 },

    /// Abstain threshold outside [0, 1].
    #[error("invalid threshold: abstainThreshold must be in [0, 1], got {value}")]
    InvalidThreshold { value: f64 },

    /// Non-finite abstention score supplied.
    #[error("invalid abstention score: abstentionScore must be finite, got {value}")]
    InvalidAbstentionScore { value: f64 },

    /// Configuration defaults failed validation at load time.
    #[error("config error: {0}")]
    Config(String),

    /// Request body failed to decode into a scoring input.
    #[error("request error: {0}")]
    Request(String),
}

impl ScoreError {
    /// Name of the input field the error refers to, if it has one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ScoreError::EmptyTopic => Some("topic"),
            ScoreError::InvalidWeight { field, .. } => Some(field),
            ScoreError::SingularPhase { .. } => Some("phi"),
            ScoreError::InvalidClamp { .. } => Some("tanClamp"),
            ScoreError::InvalidThreshold { .. } => Some("abstainThreshold"),
            ScoreError::InvalidAbstentionScore { .. } => Some("abstentionScore"),
            ScoreError::Config(_) | ScoreError::Request(_) => None,
        }
    }
}

pub type ScoreResult<T> = Result<T, ScoreError>;
