//! OpenRouter chat-completion client library
//!
//! Forwards conversation turns from a character chat application to the
//! OpenRouter API: request building, retry with exponential backoff,
//! failure classification, a raw fallback path for nonstandard models,
//! and usage/cost estimation.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{Character, ChatMessage, Completion, ConnectionTest, ModelInfo, Persona, RawOutcome, Role, Usage};
pub use services::{build_messages, create_system_prompt, estimate_cost, OpenRouterClient};
pub use utils::error::{ApiError, ApiResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
