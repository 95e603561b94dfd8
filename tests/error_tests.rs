//! Error taxonomy tests
//!
//! Verify retryability, messages and the success/failure exclusivity the
//! completion layer guarantees

use routerchat::{ApiError, ApiResult, Completion, Usage};

#[test]
fn test_only_transient_kinds_are_retryable() {
    let retryable = [ApiError::RateLimited, ApiError::Connection("refused".into())];
    for err in retryable {
        assert!(err.is_retryable(), "{:?} should be retryable", err);
    }

    let terminal = [
        ApiError::InvalidApiKey,
        ApiError::InvalidModel("m".into()),
        ApiError::UnexpectedFormat("{}".into()),
        ApiError::Api("boom".into()),
        ApiError::Unknown("?".into()),
    ];
    for err in terminal {
        assert!(!err.is_retryable(), "{:?} should be terminal", err);
    }
}

#[test]
fn test_messages_match_user_facing_wording() {
    assert_eq!(
        ApiError::RateLimited.to_string(),
        "Rate limited. Please try again later."
    );
    assert_eq!(
        ApiError::InvalidApiKey.to_string(),
        "Invalid API key. Please check your OpenRouter API key."
    );
    assert!(ApiError::Connection("timed out".into())
        .to_string()
        .contains("Could not connect"));
}

#[test]
fn test_result_is_mutually_exclusive() {
    // A call yields either content or an error, never both
    let ok: ApiResult<Completion> = Ok(Completion {
        content: "hi".to_string(),
        usage: Usage { prompt_tokens: 1, completion_tokens: 1, total_tokens: 2 },
        estimated_cost: 0.0,
    });
    assert!(ok.is_ok());

    let err: ApiResult<Completion> = Err(ApiError::RateLimited);
    assert!(err.is_err());
}

#[test]
fn test_kind_strings_are_stable() {
    // Raw outcomes and logs carry these strings; keep them stable
    assert_eq!(ApiError::RateLimited.kind(), "rate_limited");
    assert_eq!(ApiError::InvalidApiKey.kind(), "invalid_api_key");
    assert_eq!(ApiError::InvalidModel("m".into()).kind(), "invalid_model");
    assert_eq!(ApiError::UnexpectedFormat("{}".into()).kind(), "unexpected_format");
    assert_eq!(ApiError::Api("x".into()).kind(), "api_error");
    assert_eq!(ApiError::Connection("x".into()).kind(), "connection_error");
    assert_eq!(ApiError::Unknown("x".into()).kind(), "unknown");
}
