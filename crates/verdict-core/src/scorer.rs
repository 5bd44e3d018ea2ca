// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Decision Scorer
// ─────────────────────────────────────────────────────────────────────
//! The scoring engine: validation, signal combination, logistic
//! calibration, abstention, rule evaluation, and rationale assembly.

use std::f64::consts::FRAC_PI_2;

use verdict_types::{
    Decision, DecisionInput, DecisionOutput, EffectiveParams, Mode, ScoreError,
    ScoreResult, ScorerDefaults, ScoringRule,
};

use crate::{rationale, rules, signal};

/// Stateless decision scorer.
///
/// Holds only the resolved defaults for optional input fields; every
/// call to [`score`](DecisionScorer::score) is an independent pure
/// computation, safe to run concurrently without locking.
#[derive(Debug, Clone)]
pub struct DecisionScorer {
    defaults: ScorerDefaults,
}

impl DecisionScorer {
    /// Build a scorer around validated defaults.
    pub fn new(defaults: ScorerDefaults) -> ScoreResult<Self> {
        defaults.validate()?;
        Ok(Self { defaults })
    }

    /// Read-only access to the resolved defaults.
    pub fn defaults(&self) -> &ScorerDefaults {
        &self.defaults
    }

    /// Score one input.
    ///
    /// Validation is all-or-nothing: every precondition is checked
    /// before any numeric work, and the first violation is reported, in
    /// the order topic, cosine, phi, tanClamp, abstainThreshold,
    /// abstentionScore.
    ///
    /// Normalization uses the contrastive z-blend convention uniformly:
    /// every mode's score is divided by `2 * max(mean(|angel|, |demon|),
    /// 1e-9)` when `normalize` is on. The unit-vector rescale variant is
    /// intentionally not implemented.
    pub fn score(&self, input: &DecisionInput) -> ScoreResult<DecisionOutput> {
        validate(input)?;
        let params = self.resolve(input);

        let angel_signal = signal::angel_signal(input.theta, input.cosine);
        let demon_signal = signal::demon_signal(input.phi, input.tangent, params.tan_clamp);

        let scale = if params.normalize {
            signal::contrastive_scale(angel_signal, demon_signal)
        } else {
            1.0
        };
        let score = match params.mode {
            Mode::Angel => angel_signal / scale,
            Mode::Demon => demon_signal / scale,
            Mode::Blend | Mode::Probabilistic => (angel_signal - demon_signal) / scale,
        };

        // Calibration is computed for every mode so the abstention gate
        // is uniform; only probabilistic callers typically read it.
        let p_positive = signal::logistic(score);
        let p_negative = 1.0 - p_positive;
        let confidence = p_positive.max(p_negative);

        let decision = if confidence < params.abstain_threshold {
            Decision::Abstain
        } else if p_positive >= 0.5 {
            Decision::Positive
        } else {
            Decision::Negative
        };

        let requested: &[ScoringRule] = input
            .scoring_rules
            .as_deref()
            .unwrap_or(&self.defaults.scoring_rules);
        let scores = if requested.is_empty() {
            None
        } else {
            Some(rules::evaluate(
                requested,
                decision,
                p_positive,
                p_negative,
                params.abstention_score,
            ))
        };

        let rationale = rationale::build(
            &input.topic,
            &input.tags,
            params.mode,
            angel_signal,
            demon_signal,
            score,
            p_positive,
            confidence,
            params.abstain_threshold,
            decision,
        );

        Ok(DecisionOutput {
            angel_signal,
            demon_signal,
            score,
            p_positive,
            p_negative,
            decision,
            confidence,
            scores,
            rationale,
            metadata: params,
        })
    }

    /// Resolve optional input fields against the defaults.
    fn resolve(&self, input: &DecisionInput) -> EffectiveParams {
        EffectiveParams {
            mode: input.mode,
            tan_clamp: input.tan_clamp.unwrap_or(self.defaults.tan_clamp),
            normalize: input.normalize.unwrap_or(self.defaults.normalize),
            abstain_threshold: input
                .abstain_threshold
                .unwrap_or(self.defaults.abstain_threshold),
            abstention_score: input
                .abstention_score
                .unwrap_or(self.defaults.abstention_score),
        }
    }
}

/// Check every precondition before computation. NaN fails the weight
/// and phase checks rather than slipping through into the trig calls.
fn validate(input: &DecisionInput) -> ScoreResult<()> {
    if input.topic.is_empty() {
        return Err(ScoreError::EmptyTopic);
    }
    if input.cosine.is_nan() || input.cosine.abs() > 1.0 {
        return Err(ScoreError::InvalidWeight {
            field: "cosine",
            value: input.cosine,
        });
    }
    if input.phi.is_nan() || input.phi.abs() >= FRAC_PI_2 {
        return Err(ScoreError::SingularPhase { value: input.phi });
    }
    if let Some(tan_clamp) = input.tan_clamp {
        if tan_clamp <= 0.0 || !tan_clamp.is_finite() {
            return Err(ScoreError::InvalidClamp { value: tan_clamp });
        }
    }
    if let Some(threshold) = input.abstain_threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ScoreError::InvalidThreshold { value: threshold });
        }
    }
    if let Some(abstention_score) = input.abstention_score {
        if !abstention_score.is_finite() {
            return Err(ScoreError::InvalidAbstentionScore {
                value: abstention_score,
            });
        }
    }
    Ok(())
}
