//! Groq provider implementation for MarketMind
//!
//! This module implements the Provider trait against Groq's OpenAI-compatible
//! chat completions endpoint. Any other endpoint speaking the same protocol
//! works when `api_base` points at it.

use crate::config::GroqConfig;
use crate::error::{MarketMindError, Result};
use crate::providers::{prompt_messages, Message, Provider};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Groq API provider
///
/// The API key is looked up in the environment variable named by
/// `api_key_env` on every request, so a session can start before the key is
/// exported and report the missing key as an ordinary provider failure.
///
/// # Examples
///
/// ```no_run
/// use marketmind::config::GroqConfig;
/// use marketmind::providers::{GroqProvider, Provider};
///
/// # async fn example() -> marketmind::error::Result<()> {
/// let provider = GroqProvider::new(GroqConfig::default())?;
/// let text = provider.complete("Business research on solar leasing").await?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
pub struct GroqProvider {
    client: Client,
    config: GroqConfig,
    api_key: Option<String>,
}

/// Request body for `/chat/completions`
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

impl GroqProvider {
    /// Create a new Groq provider instance
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint, model, sampling and timeout settings
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use marketmind::config::GroqConfig;
    /// use marketmind::providers::GroqProvider;
    ///
    /// let provider = GroqProvider::new(GroqConfig::default());
    /// assert!(provider.is_ok());
    /// ```
    pub fn new(config: GroqConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("marketmind/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                MarketMindError::Provider(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::info!(
            "Initialized Groq provider: api_base={}, model={}",
            config.api_base,
            config.model
        );

        Ok(Self {
            client,
            config,
            api_key: None,
        })
    }

    /// Use a fixed API key instead of reading the environment
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }

    fn resolve_api_key(&self) -> Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        match std::env::var(&self.config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => {
                tracing::warn!("{} is not set", self.config.api_key_env);
                Err(MarketMindError::MissingCredentials(format!(
                    "groq ({} is not set)",
                    self.config.api_key_env
                ))
                .into())
            }
        }
    }
}

/// Interpret a chat-completions response body
///
/// The body is inspected regardless of HTTP status: a `choices` array yields
/// the first message, an `error` object yields its message, and anything else
/// is reported verbatim.
fn parse_completion_body(body: &str) -> Result<String> {
    if let Ok(completion) = serde_json::from_str::<ChatCompletionResponse>(body) {
        if let Some(choice) = completion.choices.into_iter().next() {
            return Ok(choice.message.content);
        }
    }

    if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(body) {
        return Err(MarketMindError::Provider(format!(
            "Groq API Error: {}",
            api_error.error.message
        ))
        .into());
    }

    Err(MarketMindError::Provider(format!("Unexpected response: {}", body)).into())
}

#[async_trait]
impl Provider for GroqProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self.resolve_api_key()?;

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: prompt_messages(prompt),
            temperature: self.config.temperature,
        };

        tracing::debug!(
            "Sending Groq request: model={}, prompt_chars={}",
            request.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Groq request failed: {}", e);
                MarketMindError::Provider(format!("Groq request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            MarketMindError::Provider(format!("Failed to read Groq response: {}", e))
        })?;

        if !status.is_success() {
            tracing::warn!("Groq returned status {}", status);
        }

        parse_completion_body(&body)
    }

    fn name(&self) -> &str {
        "groq"
    }

    fn model(&self) -> String {
        self.config.model.clone()
    }
}
