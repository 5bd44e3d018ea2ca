// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Scoring Defaults
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::decision::ScoringRule;
use crate::error::{ScoreError, ScoreResult};

/// Resolved default values for the optional scoring parameters.
///
/// The scorer never reads configuration itself: whatever settings store
/// the host uses is resolved into this record once, validated, and
/// passed in explicitly. Per-call input fields override these defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerDefaults {
    /// Confidence floor below which the engine abstains.
    pub abstain_threshold: f64,

    /// Upper bound on |tan(phi)| before the demon weight is applied.
    pub tan_clamp: f64,

    /// Whether signals are rescaled before blending.
    pub normalize: bool,

    /// Rules evaluated when the caller does not name any.
    pub scoring_rules: Vec<ScoringRule>,

    /// Score recorded for every requested rule when abstaining.
    pub abstention_score: f64,
}

impl Default for ScorerDefaults {
    fn default() -> Self {
        Self {
            abstain_threshold: 0.70,
            tan_clamp: 3.0,
            normalize: true,
            scoring_rules: vec![ScoringRule::Brier, ScoringRule::Log],
            abstention_score: 0.0,
        }
    }
}

impl ScorerDefaults {
    /// Validate default parameters. NaN fails every range check.
    pub fn validate(&self) -> ScoreResult<()> {
        if self.tan_clamp <= 0.0 || !self.tan_clamp.is_finite() {
            return Err(ScoreError::InvalidClamp {
                value: self.tan_clamp,
            });
        }
        if !(0.0..=1.0).contains(&self.abstain_threshold) {
            return Err(ScoreError::InvalidThreshold {
                value: self.abstain_threshold,
            });
        }
        if !self.abstention_score.is_finite() {
            return Err(ScoreError::InvalidAbstentionScore {
                value: self.abstention_score,
            });
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> ScoreResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ScoreError::Config(format!("JSON parse error: {e}")))
    }
}
