//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Attribution referer sent with every request
pub const DEFAULT_REFERER: &str = "http://localhost:8501";

/// Attribution title sent with every request
pub const DEFAULT_TITLE: &str = "AI Character Chat";

/// Main application configuration
///
/// Holds endpoint and transport configuration only. The API key is a
/// per-call credential owned by the caller and is never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// OpenRouter API configuration
    pub api: OpenRouterConfig,
    /// Retry policy configuration
    pub retry: RetryConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// OpenRouter API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// `HTTP-Referer` attribution header value
    pub referer: String,
    /// `X-Title` attribution header value
    pub title: String,
    /// Models routed through the raw request path by `test_connection`
    #[serde(default)]
    pub raw_response_models: Vec<String>,
}

/// Retry policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum attempts per call, including the first
    pub max_attempts: u32,
    /// Delay before the first retry in milliseconds, doubled each retry
    pub base_delay_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            timeout: 30,
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            raw_response_models: Vec::new(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: OpenRouterConfig::default(),
            retry: RetryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Create a new configuration instance from the environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            api: OpenRouterConfig {
                base_url: get_env_or_default("OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1"),
                timeout: get_env_or_default("REQUEST_TIMEOUT", "30")
                    .parse()
                    .context("Invalid request timeout")?,
                referer: get_env_or_default("ATTRIBUTION_REFERER", DEFAULT_REFERER),
                title: get_env_or_default("ATTRIBUTION_TITLE", DEFAULT_TITLE),
                raw_response_models: parse_model_list(&get_env_or_default("RAW_RESPONSE_MODELS", "")),
            },
            retry: RetryConfig {
                max_attempts: get_env_or_default("MAX_RETRY_ATTEMPTS", "3")
                    .parse()
                    .context("Invalid maximum retry attempts")?,
                base_delay_ms: get_env_or_default("RETRY_BASE_DELAY_MS", "1000")
                    .parse()
                    .context("Invalid retry base delay")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        // Validate URL format
        if !self.api.base_url.starts_with("http") {
            anyhow::bail!("Invalid OpenRouter base URL format, should start with 'http'");
        }

        // Validate timeout values
        if self.api.timeout == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        // Validate retry policy
        if self.retry.max_attempts == 0 {
            anyhow::bail!("Maximum retry attempts cannot be 0");
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Whether `test_connection` should route this model through the raw path
    pub fn is_raw_response_model(&self, model: &str) -> bool {
        self.api.raw_response_models.iter().any(|m| m == model)
    }
}

/// Get environment variable or use default value
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a comma-separated model list, dropping empty entries
fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(settings.api.timeout, 30);
        assert_eq!(settings.api.referer, DEFAULT_REFERER);
        assert_eq!(settings.api.title, DEFAULT_TITLE);
        assert_eq!(settings.retry.max_attempts, 3);
        assert_eq!(settings.retry.base_delay_ms, 1000);
        assert!(settings.api.raw_response_models.is_empty());
    }

    #[test]
    fn test_parse_model_list() {
        let models = parse_model_list("foo/bar , baz/qux,,");
        assert_eq!(models, vec!["foo/bar".to_string(), "baz/qux".to_string()]);
        assert!(parse_model_list("").is_empty());
    }

    #[test]
    fn test_raw_model_lookup() {
        let mut settings = Settings::default();
        settings.api.raw_response_models = vec!["odd/model".to_string()];
        assert!(settings.is_raw_response_model("odd/model"));
        assert!(!settings.is_raw_response_model("deepseek/deepseek-chat"));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "ftp://example.com".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut settings = Settings::default();
        settings.retry.max_attempts = 0;
        assert!(settings.validate().is_err());
    }
}
