// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Decision Records
// ─────────────────────────────────────────────────────────────────────
//! Input and output records for one scoring call.
//!
//! Both records are plain data: `DecisionInput` is constructed per call
//! and never mutated; `DecisionOutput` is a pure function of the input
//! plus the resolved defaults. Field names follow the external JSON
//! contract (`tanClamp`, `abstainThreshold`, ...) via camelCase renames.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Combination policy selecting how the two signals become one verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Follow the cosine-derived (conservative) signal alone.
    Angel,
    /// Follow the tangent-derived (volatile) signal alone.
    Demon,
    /// Deterministic contrastive average of both signals.
    Blend,
    /// Logistic calibration of the contrast into a probability.
    Probabilistic,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Angel => "angel",
            Mode::Demon => "demon",
            Mode::Blend => "blend",
            Mode::Probabilistic => "probabilistic",
        }
    }
}

/// Outcome of one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Positive,
    Negative,
    /// Insufficient confidence to commit either way.
    Abstain,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Positive => "positive",
            Decision::Negative => "negative",
            Decision::Abstain => "abstain",
        }
    }
}

/// Proper scoring rules the caller may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringRule {
    Brier,
    Log,
    Quadratic,
    Spherical,
}

impl ScoringRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringRule::Brier => "brier",
            ScoringRule::Log => "log",
            ScoringRule::Quadratic => "quadratic",
            ScoringRule::Spherical => "spherical",
        }
    }
}

/// One scoring request, immutable for the duration of the call.
///
/// `None` in an optional field means "use the resolved default" from
/// [`crate::ScorerDefaults`]; an explicitly supplied value always wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionInput {
    /// Free-form label, carried through unchanged for traceability.
    pub topic: String,
    /// Free-form labels echoed into the rationale; may be empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Angle in radians driving the angel signal, domain [-pi, pi].
    pub theta: f64,
    /// Angle in radians driving the demon signal, open domain (-pi/2, pi/2).
    pub phi: f64,
    /// Weight in [-1, 1] multiplying the angel signal.
    pub cosine: f64,
    /// Weight multiplying the clamped demon signal; unbounded.
    pub tangent: f64,
    /// Combination policy.
    pub mode: Mode,
    /// Upper bound on |tan(phi)| before weighting; default 3.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tan_clamp: Option<f64>,
    /// Whether to rescale the signals before blending; default true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalize: Option<bool>,
    /// Scoring rules to evaluate; default {brier, log}. An explicit
    /// empty list suppresses scoring entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_rules: Option<Vec<ScoringRule>>,
    /// Confidence floor below which the engine abstains; default 0.70.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstain_threshold: Option<f64>,
    /// Score recorded for every requested rule on abstention; default 0.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstention_score: Option<f64>,
}

/// Echo of the effective (post-default-resolution) parameters, included
/// in every output for reproducibility and audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveParams {
    pub mode: Mode,
    pub tan_clamp: f64,
    pub normalize: bool,
    pub abstain_threshold: f64,
    pub abstention_score: f64,
}

/// Result of one scoring call, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOutput {
    /// Cosine-derived signal: cos(theta) * cosine.
    pub angel_signal: f64,
    /// Tangent-derived signal after magnitude clamping.
    pub demon_signal: f64,
    /// Mode-combined scalar fed to the logistic calibration.
    pub score: f64,
    /// Calibrated probability of the positive decision.
    pub p_positive: f64,
    /// 1 - pPositive, within floating-point tolerance.
    pub p_negative: f64,
    pub decision: Decision,
    /// max(pPositive, pNegative), in [0.5, 1].
    pub confidence: f64,
    /// Requested rule evaluations, keyed by rule name. Present iff the
    /// resolved rule set was non-empty. BTreeMap keeps serialized output
    /// deterministic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<BTreeMap<String, f64>>,
    /// Deterministic human-readable explanation; byte-identical across
    /// runs with identical input.
    pub rationale: String,
    pub metadata: EffectiveParams,
}
