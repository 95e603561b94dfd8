//! Logging utilities
//!
//! Tracing initialization and log-redaction helpers

use tracing::info;

/// Initialize the logging system
///
/// Reads `RUST_LOG` for the filter (default `info`) and `LOG_FORMAT` to
/// choose between human-readable text and JSON output.
pub fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if log_format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Logging system initialized");
}

/// Mask an API key for logging
///
/// Keys must never appear in logs in cleartext. Keeps the last four
/// characters so operators can tell keys apart.
pub fn mask_api_key(key: &str) -> String {
    let chars = key.chars().count();
    if chars <= 4 {
        "****".to_string()
    } else {
        let tail: String = key.chars().skip(chars - 4).collect();
        format!("****{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("sk-or-v1-abcdef1234"), "****1234");
        assert_eq!(mask_api_key("key"), "****");
        assert_eq!(mask_api_key(""), "****");
    }

    #[test]
    fn test_mask_never_leaks_prefix() {
        let masked = mask_api_key("sk-or-v1-secret-secret");
        assert!(!masked.contains("secret"));
        assert!(!masked.contains("sk-or"));
    }
}
