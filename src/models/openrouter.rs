//! OpenRouter API data models
//!
//! Defines the wire-level request and response envelopes

use crate::models::chat::Role;
use serde::{Deserialize, Serialize};

/// Chat completion response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Response ID (optional, some models omit it)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Model that produced the reply (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Choice list, non-empty on success
    pub choices: Vec<Choice>,
    /// Usage statistics
    pub usage: Usage,
}

/// One completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Choice index (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Generated message
    pub message: ResponseMessage,
    /// Finish reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Message inside a completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Role, `assistant` for generated replies
    pub role: Role,
    /// Reply text
    pub content: String,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Prompt token count
    pub prompt_tokens: u32,
    /// Completion token count
    pub completion_tokens: u32,
    /// Total token count
    pub total_tokens: u32,
}

/// Error envelope
///
/// OpenRouter normally wraps errors as `{"error": {"message": ...}}`, but a
/// few models return a bare string instead: `{"error": "model not found"}`.
/// The untagged enum lets the parser accept either shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Error payload
    pub error: ErrorBody,
}

/// Error payload, object or bare string depending on the model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    /// Standard error object
    Object(ErrorDetail),
    /// Bare string emitted by some models
    Message(String),
}

/// Standard error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Error message
    pub message: String,
    /// Error code (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Extract the human-readable message regardless of shape
    pub fn message(&self) -> &str {
        match &self.error {
            ErrorBody::Object(detail) => &detail.message,
            ErrorBody::Message(msg) => msg,
        }
    }
}

/// Model listing envelope: `{"data": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    /// Model descriptor list
    pub data: Vec<ModelInfo>,
}

/// One model descriptor from the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier
    pub id: String,
    /// Display name (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Context window size (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u32>,
}

/// Raw outcome of the non-retried fallback path
///
/// Carries the upstream status and body verbatim; the caller extracts
/// content and usage itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOutcome {
    /// Whether the HTTP status was 2xx
    pub success: bool,
    /// Upstream HTTP status code, 0 when the request never got a response
    pub status_code: u16,
    /// Response body as parsed JSON (success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    /// Error description (failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
