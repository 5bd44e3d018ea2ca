// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Proper Scoring Rule Evaluation
// ─────────────────────────────────────────────────────────────────────
//! Rule evaluation against the realized decision.
//!
//! No ground-truth label ever reaches this system, so committed-decision
//! scores are self-referential diagnostics: the realized decision is
//! treated as if it were the outcome, and every rule collapses to a
//! function of the forecast alone. They measure sharpness, not
//! calibration. The contractual part is the abstain path: abstention
//! records the configured `abstention_score` for every requested rule,
//! keeping the cost of abstaining fixed and comparable across rules.

use std::collections::BTreeMap;

use verdict_types::{Decision, ScoringRule};

/// Evaluate each requested rule, in deterministic (sorted) key order.
///
/// Duplicate rule requests collapse to one entry per rule name.
pub fn evaluate(
    rules: &[ScoringRule],
    decision: Decision,
    p_positive: f64,
    p_negative: f64,
    abstention_score: f64,
) -> BTreeMap<String, f64> {
    let mut scores = BTreeMap::new();
    for rule in rules {
        let value = if decision == Decision::Abstain {
            abstention_score
        } else {
            committed(*rule, p_positive, p_negative)
        };
        scores.insert(rule.as_str().to_string(), value);
    }
    scores
}

/// Self-referential rule value for a committed decision.
///
/// With the realized decision as the outcome, the probability assigned
/// to it is `confidence = max(p, q)`, so:
///   brier     = (1 - confidence)^2
///   log       = -ln(confidence)
///   quadratic = 2 * confidence - (p^2 + q^2)
///   spherical = confidence / sqrt(p^2 + q^2)
fn committed(rule: ScoringRule, p_positive: f64, p_negative: f64) -> f64 {
    let confidence = p_positive.max(p_negative);
    match rule {
        ScoringRule::Brier => (1.0 - confidence).powi(2),
        ScoringRule::Log => -confidence.ln(),
        ScoringRule::Quadratic => {
            2.0 * confidence - (p_positive * p_positive + p_negative * p_negative)
        }
        ScoringRule::Spherical => {
            confidence / (p_positive * p_positive + p_negative * p_negative).sqrt()
        }
    }
}
