// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Core Scoring Engine
// License: MIT OR Apache-2.0
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Signal computation, probability calibration, abstention, and
//! rationale generation for the Verdict Kernel.
//!
//! # Invariants
//!
//! 1. **Purity**: `DecisionScorer::score` is a pure function of its
//!    input plus the resolved defaults. No I/O, no logging, no shared
//!    mutable state; identical input produces bitwise-identical numeric
//!    output and byte-identical rationale text.
//!
//! 2. **Validation before computation**: every precondition is checked
//!    before any numeric work begins; the first violation is reported
//!    and the output is never partially constructed.
//!
//! 3. **Bounded demon signal**: |tan(phi)| is magnitude-clamped (sign
//!    preserved) before weighting, so the demon signal stays finite for
//!    every phi in the open validity interval.
//!
//! 4. **One normalization convention**: the contrastive z-blend is the
//!    only rescale applied, uniformly across all four modes. The
//!    historical unit-vector variant is deliberately not supported.

pub mod rationale;
pub mod rules;
pub mod scorer;
pub mod signal;

pub use scorer::DecisionScorer;
