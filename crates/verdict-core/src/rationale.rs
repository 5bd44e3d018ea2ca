// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Rationale Generation
// ─────────────────────────────────────────────────────────────────────
//! Deterministic explanation text for one scoring call.
//!
//! Assembled from the computed fields only: no randomness, no external
//! lookups, fixed 4-decimal formatting. Identical input must produce
//! byte-identical text.

use verdict_types::{Decision, Mode};

/// Qualitative bucket for a signal magnitude. Cutoffs are strict
/// greater-than comparisons, not rounded.
pub fn bucket(magnitude: f64) -> &'static str {
    if magnitude > 0.7 {
        "strong"
    } else if magnitude > 0.4 {
        "moderate"
    } else if magnitude > 0.1 {
        "mild"
    } else {
        "neutral"
    }
}

/// Direction label for a signal value.
pub fn direction(signal: f64) -> &'static str {
    if signal > 0.0 {
        "positive"
    } else {
        "negative"
    }
}

/// Build the rationale string.
///
/// Layout: topic restatement; qualitative description of each signal;
/// mode-specific numeric sentence; the decision; the tag list if any;
/// a fixed closing restatement of the model.
#[allow(clippy::too_many_arguments)]
pub fn build(
    topic: &str,
    tags: &[String],
    mode: Mode,
    angel_signal: f64,
    demon_signal: f64,
    score: f64,
    p_positive: f64,
    confidence: f64,
    abstain_threshold: f64,
    decision: Decision,
) -> String {
    let mut text = format!(
        "Weighing \"{topic}\". The angel signal is {} and {} ({angel_signal:+.4}); \
         the demon signal is {} and {} ({demon_signal:+.4}).",
        bucket(angel_signal.abs()),
        direction(angel_signal),
        bucket(demon_signal.abs()),
        direction(demon_signal),
    );

    match mode {
        Mode::Angel => {
            text.push_str(&format!(
                " Angel mode follows the conservative advisor alone: score {score:+.4}."
            ));
        }
        Mode::Demon => {
            text.push_str(&format!(
                " Demon mode follows the volatile advisor alone: score {score:+.4}."
            ));
        }
        Mode::Blend => {
            text.push_str(&format!(
                " Blend mode takes the contrastive average of the two advisors: \
                 score {score:+.4}."
            ));
        }
        Mode::Probabilistic => {
            text.push_str(&format!(
                " Probabilistic mode calibrates the contrast into P(positive) = \
                 {p_positive:.4}, confidence {confidence:.4} against an abstain \
                 threshold of {abstain_threshold:.4}."
            ));
        }
    }

    text.push_str(&format!(" Decision: {}.", decision.as_str()));

    if !tags.is_empty() {
        text.push_str(&format!(" Tags: {}.", tags.join(", ")));
    }

    text.push_str(
        " Two advisors, one verdict: the steady cosine counsels patience \
         while the restless tangent presses for action.",
    );
    text
}
