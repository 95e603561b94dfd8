//! Usage cost estimation
//!
//! Static per-model price table and a pure cost estimator. Rates are
//! approximate; actual billing may vary.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// USD per 1M total tokens for models not in the table
pub const DEFAULT_PRICE_PER_MILLION: f64 = 1.00;

/// USD per 1M total tokens, by model identifier
static PRICE_PER_MILLION: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("deepseek/deepseek-chat", 0.50),
        ("openai/gpt-4o", 5.00),
        ("openai/gpt-4o-mini", 0.80),
        ("anthropic/claude-3.5-sonnet", 3.00),
        ("mistralai/mistral-7b-instruct", 0.20),
        ("meta-llama/llama-3.1-8b-instruct", 0.20),
    ])
});

/// Price in USD per 1M total tokens for a model
pub fn price_per_million(model: &str) -> f64 {
    PRICE_PER_MILLION
        .get(model)
        .copied()
        .unwrap_or(DEFAULT_PRICE_PER_MILLION)
}

/// Estimated cost in USD for a completion
///
/// Deterministic: identical `(model, total_tokens)` pairs always produce
/// the same estimate.
pub fn estimate_cost(model: &str, total_tokens: u32) -> f64 {
    (total_tokens as f64 / 1_000_000.0) * price_per_million(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_rates() {
        assert_eq!(price_per_million("deepseek/deepseek-chat"), 0.50);
        assert_eq!(price_per_million("openai/gpt-4o"), 5.00);
        assert_eq!(price_per_million("meta-llama/llama-3.1-8b-instruct"), 0.20);
    }

    #[test]
    fn test_unknown_model_uses_default_rate() {
        assert_eq!(price_per_million("unknown/model-x"), DEFAULT_PRICE_PER_MILLION);
    }

    #[test]
    fn test_deepseek_cost_estimate() {
        // 2000 tokens at $0.50 / 1M
        assert!((estimate_cost("deepseek/deepseek-chat", 2000) - 0.0010).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_model_cost_estimate() {
        // 1M tokens at the default rate
        assert!((estimate_cost("unknown/model-x", 1_000_000) - 1.00).abs() < 1e-12);
    }

    #[test]
    fn test_zero_tokens_cost_nothing() {
        assert_eq!(estimate_cost("openai/gpt-4o", 0), 0.0);
    }
}
