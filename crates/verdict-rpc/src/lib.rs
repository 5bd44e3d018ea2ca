// ─────────────────────────────────────────────────────────────────────
// Verdict Kernel — JSON Request/Response Surface
// License: MIT OR Apache-2.0
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! JSON surface for the scoring engine.
//!
//! The hosting transport hands this crate a decoded request body as a
//! `serde_json::Value` and receives either `{"result": DecisionOutput}`
//! or `{"error": {"code", "message", "data"}}` back. Malformed requests
//! never panic; every failure maps to a structured error object. This
//! crate owns all logging — the core stays silent by contract.
//!
//! Error codes follow the JSON-RPC convention: decode failures are
//! `-32602` (invalid params), core validation errors get distinct codes
//! in the `-32000` server-error range so callers can branch on the
//! violated precondition without parsing the message.

pub mod request;

use serde_json::{json, Value};

use verdict_core::DecisionScorer;
use verdict_types::{ScoreError, ScoreResult, ScorerDefaults};

/// Decode failure: request body does not match the wire contract.
pub const CODE_INVALID_PARAMS: i64 = -32602;
/// Output record failed to serialize; should be unreachable.
pub const CODE_INTERNAL: i64 = -32603;

/// Scoring service: a validated scorer plus the error-code mapping.
pub struct ScoreService {
    scorer: DecisionScorer,
}

impl ScoreService {
    /// Build the service around resolved configuration defaults.
    pub fn new(defaults: ScorerDefaults) -> ScoreResult<Self> {
        Ok(Self {
            scorer: DecisionScorer::new(defaults)?,
        })
    }

    /// Read-only access to the underlying scorer.
    pub fn scorer(&self) -> &DecisionScorer {
        &self.scorer
    }

    /// Handle one scoring request end to end.
    pub fn handle_score(&self, body: &Value) -> Value {
        let input = match request::decode_input(body) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("score request rejected at decode: {e}");
                return error_value(&e);
            }
        };
        match self.scorer.score(&input) {
            Ok(output) => match serde_json::to_value(&output) {
                Ok(result) => json!({ "result": result }),
                Err(e) => {
                    log::error!("output serialization failed: {e}");
                    json!({
                        "error": {
                            "code": CODE_INTERNAL,
                            "message": "internal error: output serialization failed",
                        }
                    })
                }
            },
            Err(e) => {
                log::warn!("score request rejected at validation: {e}");
                error_value(&e)
            }
        }
    }
}

impl Default for ScoreService {
    fn default() -> Self {
        // Default ScorerDefaults always pass validation.
        Self::new(ScorerDefaults::default()).unwrap()
    }
}

/// Stable error code for each failure class.
pub fn error_code(err: &ScoreError) -> i64 {
    match err {
        ScoreError::Request(_) => CODE_INVALID_PARAMS,
        ScoreError::EmptyTopic => -32001,
        ScoreError::InvalidWeight { .. } => -32002,
        ScoreError::SingularPhase { .. } => -32003,
        ScoreError::InvalidClamp { .. } => -32004,
        ScoreError::InvalidThreshold { .. } => -32005,
        ScoreError::InvalidAbstentionScore { .. } => -32006,
        ScoreError::Config(_) => -32007,
    }
}

fn error_value(err: &ScoreError) -> Value {
    let data = match err.field() {
        Some(field) => json!({ "field": field }),
        None => Value::Null,
    };
    json!({
        "error": {
            "code": error_code(err),
            "message": err.to_string(),
            "data": data,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_service() -> ScoreService {
        ScoreService::default()
    }

    #[test]
    fn test_handle_score_success() {
        let response = make_service().handle_score(&json!({
            "topic": "take the leap",
            "theta": std::f64::consts::FRAC_PI_4,
            "phi": std::f64::consts::FRAC_PI_6,
            "cosine": 0.7,
            "tangent": 0.4,
            "mode": "blend"
        }));
        let result = response.get("result").expect("expected a result");
        assert!(response.get("error").is_none());
        let angel = result["angelSignal"].as_f64().unwrap();
        assert!((angel - 0.4950).abs() < 1e-4);
        assert!(result["rationale"].as_str().unwrap().contains("take the leap"));
        // Defaults are injected and echoed for audit.
        assert_eq!(result["metadata"]["tanClamp"].as_f64().unwrap(), 3.0);
        assert_eq!(result["metadata"]["abstainThreshold"].as_f64().unwrap(), 0.70);
    }

    #[test]
    fn test_handle_score_abstain_scenario() {
        let response = make_service().handle_score(&json!({
            "topic": "t",
            "theta": 0.1,
            "phi": 0.1,
            "cosine": 0.1,
            "tangent": 0.1,
            "mode": "probabilistic",
            "abstainThreshold": 0.8
        }));
        let result = &response["result"];
        assert_eq!(result["decision"], "abstain");
        // Default rules {brier, log} both record the abstention score.
        assert_eq!(result["scores"]["brier"].as_f64().unwrap(), 0.0);
        assert_eq!(result["scores"]["log"].as_f64().unwrap(), 0.0);
    }

    #[test]
    fn test_decode_failure_maps_to_invalid_params() {
        let response = make_service().handle_score(&json!({"topic": "t"}));
        assert_eq!(
            response["error"]["code"].as_i64().unwrap(),
            CODE_INVALID_PARAMS
        );
    }

    #[test]
    fn test_validation_failure_maps_to_distinct_code() {
        let response = make_service().handle_score(&json!({
            "topic": "t",
            "theta": 0.0,
            "phi": 0.0,
            "cosine": 1.5,
            "tangent": 0.0,
            "mode": "angel"
        }));
        let error = &response["error"];
        assert_eq!(error["code"].as_i64().unwrap(), -32002);
        assert_eq!(error["data"]["field"], "cosine");
        assert!(error["message"].as_str().unwrap().contains("1.5"));
    }

    #[test]
    fn test_singular_phase_code() {
        let response = make_service().handle_score(&json!({
            "topic": "t",
            "theta": 0.0,
            "phi": std::f64::consts::FRAC_PI_2,
            "cosine": 0.5,
            "tangent": 0.5,
            "mode": "demon"
        }));
        assert_eq!(response["error"]["code"].as_i64().unwrap(), -32003);
        assert_eq!(response["error"]["data"]["field"], "phi");
    }

    #[test]
    fn test_custom_defaults_are_injected() {
        let service = ScoreService::new(ScorerDefaults {
            abstain_threshold: 0.9,
            ..Default::default()
        })
        .unwrap();
        let response = service.handle_score(&json!({
            "topic": "t",
            "theta": std::f64::consts::FRAC_PI_4,
            "phi": std::f64::consts::FRAC_PI_6,
            "cosine": 0.7,
            "tangent": 0.4,
            "mode": "probabilistic"
        }));
        let result = &response["result"];
        assert_eq!(result["metadata"]["abstainThreshold"].as_f64().unwrap(), 0.9);
        assert_eq!(result["decision"], "abstain");
    }

    #[test]
    fn test_non_object_body_never_panics() {
        for body in [json!(null), json!(42), json!("x"), json!([])] {
            let response = make_service().handle_score(&body);
            assert!(response.get("error").is_some());
        }
    }
}
