//! Data models module
//!
//! Defines chat, character and OpenRouter wire data structures

pub mod character;
pub mod chat;
pub mod openrouter;

pub use character::{Character, Persona};
pub use chat::{ChatMessage, Completion, CompletionRequest, ConnectionTest, Role};
pub use openrouter::{ModelInfo, RawOutcome, Usage};
