// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Decision Scoring Types
// License: MIT OR Apache-2.0
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Verdict Kernel — a pure, stateless decision-scoring engine that
//! weighs two trigonometric advisor signals into a calibrated verdict.

pub mod config;
pub mod decision;
pub mod error;

pub use config::ScorerDefaults;
pub use decision::{
    Decision, DecisionInput, DecisionOutput, EffectiveParams, Mode, ScoringRule,
};
pub use error::{ScoreError, ScoreResult};
