//! Model serialization tests
//!
//! Verify the wire shapes of requests, responses and raw outcomes

use routerchat::models::chat::{ChatMessage, CompletionRequest, ConnectionTest, Role};
use routerchat::models::openrouter::{ChatResponse, ErrorEnvelope, ModelsResponse, RawOutcome};
use serde_json::json;

#[test]
fn test_completion_request_wire_shape() {
    let request = CompletionRequest {
        model: "m".to_string(),
        messages: vec![
            ChatMessage::system("be brief"),
            ChatMessage::user("hi"),
        ],
        temperature: 0.7,
        max_tokens: 50,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 4);
    assert_eq!(value["model"], "m");
    assert_eq!(
        value["messages"],
        json!([
            {"role": "system", "content": "be brief"},
            {"role": "user", "content": "hi"}
        ])
    );
    // f32 widening makes exact float equality unreliable
    assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(value["max_tokens"], 50);
}

#[test]
fn test_response_with_extra_fields_still_parses() {
    // OpenRouter responses carry fields this layer does not consume
    let body = json!({
        "id": "gen-1",
        "object": "chat.completion",
        "created": 1736000000,
        "model": "openai/gpt-4o",
        "provider": "OpenAI",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "ok"},
            "finish_reason": "stop",
            "native_finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2}
    });

    let response: ChatResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.choices[0].message.role, Role::Assistant);
    assert_eq!(response.choices[0].message.content, "ok");
}

#[test]
fn test_error_envelope_shapes() {
    let object: ErrorEnvelope =
        serde_json::from_value(json!({"error": {"message": "quota exceeded", "code": 402}})).unwrap();
    assert_eq!(object.message(), "quota exceeded");

    let bare: ErrorEnvelope = serde_json::from_value(json!({"error": "model not found"})).unwrap();
    assert_eq!(bare.message(), "model not found");
}

#[test]
fn test_models_response_preserves_order() {
    let body = json!({"data": [
        {"id": "b/model"},
        {"id": "a/model"},
        {"id": "c/model", "context_length": 128000}
    ]});

    let response: ModelsResponse = serde_json::from_value(body).unwrap();
    let ids: Vec<&str> = response.data.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["b/model", "a/model", "c/model"]);
    assert_eq!(response.data[2].context_length, Some(128000));
}

#[test]
fn test_raw_outcome_serialization_omits_empty_sides() {
    let success = RawOutcome {
        success: true,
        status_code: 200,
        response: Some(json!({"choices": []})),
        error: None,
    };
    let value = serde_json::to_value(&success).unwrap();
    assert!(value.get("response").is_some());
    assert!(value.get("error").is_none());

    let failure = RawOutcome {
        success: false,
        status_code: 500,
        response: None,
        error: Some("boom".to_string()),
    };
    let value = serde_json::to_value(&failure).unwrap();
    assert!(value.get("response").is_none());
    assert_eq!(value["error"], "boom");
}

#[test]
fn test_connection_test_serialization() {
    let failed = ConnectionTest {
        success: false,
        message: "Invalid API key. Please check your OpenRouter API key.".to_string(),
        response: None,
        usage: None,
        estimated_cost: None,
    };

    let value = serde_json::to_value(&failed).unwrap();
    assert_eq!(value["success"], false);
    assert!(value.get("usage").is_none());
    assert!(value.get("estimated_cost").is_none());
}
