// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — Request Decoding
// ─────────────────────────────────────────────────────────────────────
//! Field-level decoding of a JSON request body into a `DecisionInput`.
//!
//! The serde derive on `DecisionInput` enforces the wire contract:
//! required fields `topic, theta, phi, cosine, tangent, mode`; optional
//! fields `tags, tanClamp, normalize, scoringRules, abstainThreshold,
//! abstentionScore`. Decode failures surface as `ScoreError::Request`
//! with serde's field-precise message.

use serde_json::Value;

use verdict_types::{DecisionInput, ScoreError, ScoreResult};

/// Decode a request body.
///
/// Rejects non-object bodies up front so the caller gets "expected an
/// object" instead of a field-by-field cascade.
pub fn decode_input(body: &Value) -> ScoreResult<DecisionInput> {
    if !body.is_object() {
        return Err(ScoreError::Request(
            "request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(body.clone()).map_err(|e| ScoreError::Request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use verdict_types::Mode;

    #[test]
    fn test_decode_minimal_request() {
        let body = json!({
            "topic": "merge the branch",
            "theta": 0.4,
            "phi": 0.2,
            "cosine": 0.9,
            "tangent": 0.1,
            "mode": "probabilistic"
        });
        let input = decode_input(&body).unwrap();
        assert_eq!(input.mode, Mode::Probabilistic);
        assert!(input.tan_clamp.is_none());
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let err = decode_input(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ScoreError::Request(_)));
    }

    #[test]
    fn test_decode_rejects_missing_required_field() {
        let body = json!({
            "topic": "t",
            "theta": 0.4,
            "phi": 0.2,
            "cosine": 0.9,
            "mode": "angel"
        });
        let err = decode_input(&body).unwrap_err();
        match err {
            ScoreError::Request(msg) => assert!(msg.contains("tangent")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_wrong_type() {
        let body = json!({
            "topic": "t",
            "theta": "not a number",
            "phi": 0.2,
            "cosine": 0.9,
            "tangent": 0.1,
            "mode": "angel"
        });
        assert!(matches!(
            decode_input(&body),
            Err(ScoreError::Request(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_mode() {
        let body = json!({
            "topic": "t",
            "theta": 0.4,
            "phi": 0.2,
            "cosine": 0.9,
            "tangent": 0.1,
            "mode": "oracle"
        });
        assert!(matches!(
            decode_input(&body),
            Err(ScoreError::Request(_))
        ));
    }
}
