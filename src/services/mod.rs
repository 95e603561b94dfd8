//! Service layer module
//!
//! Contains the OpenRouter client, cost estimation and prompt assembly

pub mod client;
pub mod pricing;
pub mod prompt;

pub use client::OpenRouterClient;
pub use pricing::{estimate_cost, price_per_million};
pub use prompt::{build_messages, create_system_prompt};
