//! HuggingFace generation wire-format tests.

use gharkhoj::generation::huggingface::{build_request, parse_response};
use gharkhoj::generation::{GenerationError, GenerationParams};
use serde_json::json;

#[test]
fn build_request_carries_prompt_and_parameters() {
    let params = GenerationParams {
        max_new_tokens: 128,
        temperature: 0.3,
        repetition_penalty: 1.2,
    };
    let request = build_request("hello prompt", &params);
    assert_eq!(request.inputs, "hello prompt");
    assert_eq!(request.parameters.max_new_tokens, 128);
    assert!(!request.parameters.return_full_text);

    let wire = serde_json::to_value(&request).expect("serializes");
    assert_eq!(wire["inputs"], "hello prompt");
    assert_eq!(wire["parameters"]["repetition_penalty"], json!(1.2f32));
}

#[test]
fn default_params_are_bounded_and_near_deterministic() {
    let params = GenerationParams::default();
    assert_eq!(params.max_new_tokens, 300);
    assert!(params.temperature <= 0.3);
    assert!(params.repetition_penalty > 1.0);
}

#[test]
fn parse_response_takes_first_generated_text() {
    let body = json!([
        {"generated_text": "Here are your homes."},
        {"generated_text": "ignored"}
    ]);
    let text = parse_response(&body.to_string()).expect("parses");
    assert_eq!(text, "Here are your homes.");
}

#[test]
fn parse_response_rejects_empty_array() {
    let err = parse_response("[]").expect_err("empty array is an error");
    assert!(matches!(err, GenerationError::Parse(_)));
}

#[test]
fn parse_response_rejects_schema_mismatch() {
    let err = parse_response(r#"{"error": "model loading"}"#).expect_err("wrong shape");
    assert!(matches!(err, GenerationError::Parse(_)));
}
