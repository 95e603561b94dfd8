//! HTTP client service
//!
//! Encapsulates HTTP communication with the OpenRouter API: request
//! building, retry with exponential backoff, failure classification and
//! the raw non-retried fallback path.

use crate::config::Settings;
use crate::models::chat::{ChatMessage, Completion, CompletionRequest, ConnectionTest};
use crate::models::openrouter::{ChatResponse, ErrorEnvelope, ModelsResponse, ModelInfo, RawOutcome, Usage};
use crate::services::pricing::estimate_cost;
use crate::utils::error::{ApiError, ApiResult};
use crate::utils::logging::mask_api_key;
use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fixed user message sent by [`OpenRouterClient::test_connection`]
const TEST_MESSAGE: &str = "Hello, this is a test message to verify the API connection.";

/// Maximum body length quoted in error messages and logs
const MAX_QUOTED_BODY: usize = 200;

/// OpenRouter API client
///
/// Holds endpoint and transport configuration only; the API key is passed
/// per call and never stored. The client keeps no state across calls, so a
/// single instance is safe to share between concurrent callers.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    settings: Settings,
}

impl OpenRouterClient {
    /// Create a new client instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout))
            .user_agent("routerchat/0.1.0")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    /// Create a client with default settings
    pub fn with_defaults() -> Result<Self> {
        Self::new(Settings::default())
    }

    /// Get a chat completion, retrying transient failures
    ///
    /// Rate limiting and connection faults are retried up to
    /// `retry.max_attempts` total attempts with exponentially growing
    /// delays; every other failure surfaces immediately.
    pub async fn get_response(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
        model: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> ApiResult<Completion> {
        let request = CompletionRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            temperature,
            max_tokens,
        };

        let max_attempts = self.settings.retry.max_attempts;
        let mut delay = Duration::from_millis(self.settings.retry.base_delay_ms);

        for attempt in 1..=max_attempts {
            debug!(
                "Sending chat completion request: model={}, key={}, attempt {}/{}",
                model,
                mask_api_key(api_key),
                attempt,
                max_attempts
            );

            match self.send_completion(api_key, &request).await {
                Ok(completion) => return Ok(completion),
                Err(err) if err.is_retryable() && attempt < max_attempts => {
                    warn!(
                        "Request failed ({}), retrying in {}ms (attempt {}/{})",
                        err.kind(),
                        delay.as_millis(),
                        attempt,
                        max_attempts
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(err) => return Err(err),
            }
        }

        Err(ApiError::Unknown(
            "Failed to get response after multiple attempts.".to_string(),
        ))
    }

    /// Get the list of models the account may use
    ///
    /// Never retried: a malformed listing response is a terminal
    /// `UnexpectedFormat` failure.
    pub async fn get_available_models(&self, api_key: &str) -> ApiResult<Vec<ModelInfo>> {
        debug!("Fetching available models, key={}", mask_api_key(api_key));

        let url = format!("{}/models", self.settings.api.base_url);
        let response = self.authorized(self.client.get(&url), api_key).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(classify_http_error(status, &body));
        }

        match serde_json::from_str::<ModelsResponse>(&body) {
            Ok(models) => {
                debug!("Retrieved {} models", models.data.len());
                Ok(models.data)
            }
            Err(_) => Err(ApiError::UnexpectedFormat(format!(
                "model listing is missing the 'data' key: {}",
                truncate(&body, MAX_QUOTED_BODY)
            ))),
        }
    }

    /// Validate an API key
    ///
    /// "Can list models" is used as a proxy for "key is valid".
    pub async fn validate_api_key(&self, api_key: &str) -> bool {
        self.get_available_models(api_key).await.is_ok()
    }

    /// Test the connection with a fixed two-message exchange
    ///
    /// Models configured as raw-response models are routed through
    /// [`direct_api_request`](Self::direct_api_request); everything else goes
    /// through the standard retried path.
    pub async fn test_connection(&self, api_key: &str, model: &str) -> ConnectionTest {
        let messages = vec![
            ChatMessage::system("You are a helpful assistant."),
            ChatMessage::user(TEST_MESSAGE),
        ];

        if self.settings.is_raw_response_model(model) {
            let raw = self.direct_api_request(api_key, model, &messages).await;
            return connection_test_from_raw(model, raw);
        }

        match self.get_response(api_key, &messages, model, 0.7, 50).await {
            Ok(completion) => {
                info!("Connection test succeeded for model {}", model);
                ConnectionTest {
                    success: true,
                    message: "Connection successful".to_string(),
                    response: Some(completion.content),
                    usage: Some(completion.usage),
                    estimated_cost: Some(completion.estimated_cost),
                }
            }
            Err(err) => {
                warn!("Connection test failed for model {}: {}", model, err);
                ConnectionTest {
                    success: false,
                    message: err.to_string(),
                    response: None,
                    usage: None,
                    estimated_cost: None,
                }
            }
        }
    }

    /// Issue a single, non-retried request and return the raw outcome
    ///
    /// Fallback path for models whose error envelopes the standard
    /// classification cannot parse. Skips retry and rate-limit handling by
    /// design; the caller extracts content and usage from the raw shape.
    pub async fn direct_api_request(
        &self,
        api_key: &str,
        model: &str,
        messages: &[ChatMessage],
    ) -> RawOutcome {
        let request = CompletionRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            temperature: 0.7,
            max_tokens: 1000,
        };

        debug!(
            "Sending raw chat completion request: model={}, key={}",
            model,
            mask_api_key(api_key)
        );

        let url = format!("{}/chat/completions", self.settings.api.base_url);
        let response = match self
            .authorized(self.client.post(&url), api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!("Raw request transport failure: {}", err);
                return RawOutcome {
                    success: false,
                    status_code: 0,
                    response: None,
                    error: Some(err.to_string()),
                };
            }
        };

        let status_code = response.status().as_u16();
        let success = response.status().is_success();

        match response.json::<serde_json::Value>().await {
            Ok(value) if success => RawOutcome {
                success: true,
                status_code,
                response: Some(value),
                error: None,
            },
            Ok(value) => RawOutcome {
                success: false,
                status_code,
                response: None,
                error: Some(value.to_string()),
            },
            Err(err) => RawOutcome {
                success: false,
                status_code,
                response: None,
                error: Some(format!("Response body was not valid JSON: {}", err)),
            },
        }
    }

    /// Send one completion attempt and classify the outcome
    async fn send_completion(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> ApiResult<Completion> {
        let url = format!("{}/chat/completions", self.settings.api.base_url);

        let response = self
            .authorized(self.client.post(&url), api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            parse_completion_body(&request.model, &body)
        } else {
            Err(classify_http_error(status, &body))
        }
    }

    /// Attach authentication and attribution headers
    fn authorized(&self, builder: RequestBuilder, api_key: &str) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.settings.api.referer)
            .header("X-Title", &self.settings.api.title)
    }
}

/// Parse a 2xx completion body
///
/// Tries the standard envelope first. When that fails, falls back to the
/// alternate error-envelope shapes some models emit inside 2xx responses
/// before giving up with `UnexpectedFormat` — the parse strategy is decided
/// by response shape, never by model name.
fn parse_completion_body(model: &str, body: &str) -> ApiResult<Completion> {
    if let Ok(response) = serde_json::from_str::<ChatResponse>(body) {
        if let Some(choice) = response.choices.first() {
            let usage = response.usage;
            return Ok(Completion {
                content: choice.message.content.clone(),
                usage,
                estimated_cost: estimate_cost(model, usage.total_tokens),
            });
        }
    }

    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Err(classify_error_message(envelope.message()));
    }

    Err(ApiError::UnexpectedFormat(truncate(body, MAX_QUOTED_BODY)))
}

/// Classify a non-2xx HTTP response
fn classify_http_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.message().to_string())
        .ok();

    match status.as_u16() {
        429 => ApiError::RateLimited,
        401 => ApiError::InvalidApiKey,
        400 | 404
            if message.as_deref().is_some_and(|m| m.to_lowercase().contains("model")) =>
        {
            ApiError::InvalidModel(message.unwrap_or_default())
        }
        code => ApiError::Api(message.unwrap_or_else(|| {
            format!("HTTP {}: {}", code, truncate(body, MAX_QUOTED_BODY))
        })),
    }
}

/// Classify an error message found inside a 2xx body
fn classify_error_message(message: &str) -> ApiError {
    let lowered = message.to_lowercase();
    if lowered.contains("rate limit") {
        ApiError::RateLimited
    } else if lowered.contains("model") {
        ApiError::InvalidModel(message.to_string())
    } else {
        ApiError::Api(message.to_string())
    }
}

/// Build a connection-test summary from a raw outcome
fn connection_test_from_raw(model: &str, raw: RawOutcome) -> ConnectionTest {
    if !raw.success {
        return ConnectionTest {
            success: false,
            message: raw.error.unwrap_or_else(|| "Unknown error".to_string()),
            response: None,
            usage: None,
            estimated_cost: None,
        };
    }

    let body = raw.response.unwrap_or_default();
    let content = body["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string());
    let usage: Option<Usage> = serde_json::from_value(body["usage"].clone()).ok();

    match content {
        Some(content) => {
            let estimated_cost = usage.map(|u| estimate_cost(model, u.total_tokens));
            ConnectionTest {
                success: true,
                message: "Connection successful".to_string(),
                response: Some(content),
                usage,
                estimated_cost,
            }
        }
        None => ConnectionTest {
            success: false,
            message: "Response did not contain a completion choice".to_string(),
            response: None,
            usage: None,
            estimated_cost: None,
        },
    }
}

/// Truncate a string with a note about the omitted length
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() > max_len {
        let cut = s
            .char_indices()
            .take_while(|(i, _)| *i < max_len)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}... ({} chars truncated)", &s[..cut], s.len() - cut)
    } else {
        s.to_string()
    }
}
