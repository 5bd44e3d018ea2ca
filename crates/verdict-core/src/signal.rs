// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Advisor Signal Math
// ─────────────────────────────────────────────────────────────────────
//! The two advisor signals and the numeric primitives that combine them:
//!   angel  = cos(theta) * cosine        (stable, conservative)
//!   demon  = clamp(tan(phi)) * tangent  (volatile, urgent)
//!
//! The contrastive scale makes the blend invariant under a common
//! rescaling of both signals when normalization is on.

/// Floor for the contrastive scale, so the blend of two exactly-zero
/// signals divides by a tiny constant instead of zero.
pub const EPSILON: f64 = 1e-9;

/// Bound a value's magnitude to `limit`, preserving sign.
///
/// Zero stays zero; a value already within the bound passes unchanged.
#[inline]
pub fn clamp_magnitude(value: f64, limit: f64) -> f64 {
    if value.abs() <= limit {
        value
    } else {
        limit.copysign(value)
    }
}

/// Cosine-derived advisor signal.
#[inline]
pub fn angel_signal(theta: f64, cosine: f64) -> f64 {
    theta.cos() * cosine
}

/// Tangent-derived advisor signal, magnitude-clamped before weighting.
///
/// The clamp is the safety mechanism against near-singularity blowups
/// as phi approaches ±pi/2; the angle itself is never altered.
#[inline]
pub fn demon_signal(phi: f64, tangent: f64, tan_clamp: f64) -> f64 {
    clamp_magnitude(phi.tan(), tan_clamp) * tangent
}

/// Contrastive z-blend scale: `2 * max(mean(|angel|, |demon|), EPSILON)`.
///
/// Dividing any signal combination by this factor makes it invariant
/// under a common rescaling of both signal magnitudes.
#[inline]
pub fn contrastive_scale(angel: f64, demon: f64) -> f64 {
    2.0 * ((angel.abs() + demon.abs()) / 2.0).max(EPSILON)
}

/// Standard logistic: `1 / (1 + e^-x)`.
#[inline]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
