// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Scoring Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the scoring hot path. One call is a handful
//! of trigonometric evaluations plus string assembly; the whole path
//! should sit comfortably in the microsecond range.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_6};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use verdict_core::DecisionScorer;
use verdict_types::{DecisionInput, Mode, ScorerDefaults};

fn make_input(mode: Mode) -> DecisionInput {
    DecisionInput {
        topic: "take the leap".to_string(),
        tags: vec!["urgent".to_string(), "career".to_string()],
        theta: FRAC_PI_4,
        phi: FRAC_PI_6,
        cosine: 0.7,
        tangent: 0.4,
        mode,
        tan_clamp: None,
        normalize: None,
        scoring_rules: None,
        abstain_threshold: None,
        abstention_score: None,
    }
}

// ── DecisionScorer.score() ──────────────────────────────────────────

fn bench_score_probabilistic(c: &mut Criterion) {
    let scorer = DecisionScorer::new(ScorerDefaults::default()).unwrap();
    let input = make_input(Mode::Probabilistic);
    c.bench_function("score_probabilistic", |b| {
        b.iter(|| scorer.score(black_box(&input)))
    });
}

fn bench_score_blend(c: &mut Criterion) {
    let scorer = DecisionScorer::new(ScorerDefaults::default()).unwrap();
    let input = make_input(Mode::Blend);
    c.bench_function("score_blend", |b| {
        b.iter(|| scorer.score(black_box(&input)))
    });
}

fn bench_score_all_rules(c: &mut Criterion) {
    use verdict_types::ScoringRule;
    let scorer = DecisionScorer::new(ScorerDefaults::default()).unwrap();
    let mut input = make_input(Mode::Probabilistic);
    input.scoring_rules = Some(vec![
        ScoringRule::Brier,
        ScoringRule::Log,
        ScoringRule::Quadratic,
        ScoringRule::Spherical,
    ]);
    c.bench_function("score_all_rules", |b| {
        b.iter(|| scorer.score(black_box(&input)))
    });
}

criterion_group!(
    benches,
    bench_score_probabilistic,
    bench_score_blend,
    bench_score_all_rules
);
criterion_main!(benches);
