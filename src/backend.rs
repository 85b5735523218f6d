//! Remote AI backend abstraction and the OpenAI chat implementation.
//!
//! The assistant only needs one capability from a remote model: turn a
//! system message and a prompt into text. [`AiBackend`] captures that, and
//! [`OpenAiBackend`] implements it against the OpenAI chat completions API.
//!
//! # Availability
//!
//! A backend is only built when the configured key looks real (see
//! [`is_usable_api_key`]). Otherwise [`create_backend`] returns `None` and
//! the caller stays on the offline engine.
//!
//! # Retry Strategy
//!
//! - HTTP 429 (rate limited) and 5xx (server error) → retry
//! - HTTP 4xx (client error, not 429) → fail immediately
//! - Network errors → retry
//! - Backoff doubles from the base delay, capped at 2^5 × base

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::config::AiConfig;

/// A remote text-generation service.
#[async_trait]
pub trait AiBackend: Send + Sync {
    /// Short identifier used in logs (e.g. `"openai:gpt-4o"`).
    fn name(&self) -> &str;

    /// Generate a completion for `prompt` under the given system message.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;
}

/// Returns `true` if `key` has the shape of an OpenAI secret key.
///
/// Placeholder values such as `sk-...` or `changeme` are rejected so that
/// an unconfigured checkout never attempts a network call.
pub fn is_usable_api_key(key: &str) -> bool {
    key.starts_with("sk-") && key.len() > 20
}

/// Build the configured backend, or `None` when requests should stay local.
///
/// # Errors
///
/// Fails only if the HTTP client cannot be constructed. A disabled provider
/// or a missing/invalid key yields `Ok(None)`.
pub fn create_backend(config: &AiConfig) -> Result<Option<Box<dyn AiBackend>>> {
    match config.provider.as_str() {
        "disabled" => Ok(None),
        "openai" => {
            let key = std::env::var(&config.api_key_env).unwrap_or_default();
            if !is_usable_api_key(&key) {
                tracing::warn!(
                    env = %config.api_key_env,
                    "API key missing or invalid; using offline engine"
                );
                return Ok(None);
            }
            Ok(Some(Box::new(OpenAiBackend::new(config, key)?)))
        }
        other => bail!("Unknown ai provider: {}", other),
    }
}

/// Backend using the OpenAI `POST /chat/completions` endpoint.
pub struct OpenAiBackend {
    client: reqwest::Client,
    name: String,
    model: String,
    endpoint: String,
    api_key: String,
    max_retries: u32,
    backoff: Duration,
}

impl OpenAiBackend {
    pub fn new(config: &AiConfig, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            name: format!("openai:{}", config.model),
            model: config.model.clone(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
            max_retries: config.max_retries,
            backoff: Duration::from_secs(1),
        })
    }

    /// Override the base retry delay.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }
}

#[async_trait]
impl AiBackend for OpenAiBackend {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt },
            ],
        });

        let mut last_err = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.backoff * (1 << (attempt - 1).min(5));
                tokio::time::sleep(delay).await;
            }

            let resp = self
                .client
                .post(&self.endpoint)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Content-Type", "application/json")
                .json(&body)
                .send()
                .await;

            match resp {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        let json: serde_json::Value = response.json().await?;
                        return parse_chat_response(&json);
                    }

                    if status.as_u16() == 429 || status.is_server_error() {
                        let body_text = response.text().await.unwrap_or_default();
                        tracing::debug!(%status, attempt, "retryable chat completion error");
                        last_err = Some(anyhow::anyhow!(
                            "OpenAI API error {}: {}",
                            status,
                            body_text
                        ));
                        continue;
                    }

                    let body_text = response.text().await.unwrap_or_default();
                    bail!("OpenAI API error {}: {}", status, body_text);
                }
                Err(e) => {
                    last_err = Some(e.into());
                    continue;
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("Chat completion failed after retries")))
    }
}

/// Extract `choices[0].message.content` from a chat completion response.
fn parse_chat_response(json: &serde_json::Value) -> Result<String> {
    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Invalid OpenAI response: missing choices[0].message.content"))
}
