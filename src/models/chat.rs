//! Chat data models
//!
//! Caller-facing types: messages, completion requests and results

use crate::models::openrouter::Usage;
use serde::{Deserialize, Serialize};

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction
    System,
    /// End-user message
    User,
    /// Model reply
    Assistant,
}

/// One message in a conversation
///
/// A conversation is an ordered sequence of these, oldest first, with the
/// system message (if any) in front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    pub role: Role,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Chat completion request body
///
/// Serializes to exactly the four fields the OpenRouter endpoint expects.
/// Built fresh for every call and immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier, e.g. `deepseek/deepseek-chat`
    pub model: String,
    /// Conversation so far, oldest first
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature in `[0, 2]`
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

/// Successful completion result
///
/// Mutually exclusive with [`ApiError`](crate::utils::error::ApiError):
/// the layer never returns content alongside an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Generated reply text
    pub content: String,
    /// Token usage reported by the service
    pub usage: Usage,
    /// Estimated cost in USD
    pub estimated_cost: f64,
}

/// Outcome of a connection test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTest {
    /// Whether the test exchange succeeded
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// Sample reply (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Token usage (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Estimated cost in USD (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
}
