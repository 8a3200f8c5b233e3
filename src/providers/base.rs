//! Base provider trait and wire message type
//!
//! This module defines the Provider trait that every completion backend
//! implements, along with the chat message shape both HTTP backends send.

use crate::error::Result;
use crate::prompts::SYSTEM_PROMPT;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message structure sent to chat-completion endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Content of the message
    #[serde(default)]
    pub content: String,
}

impl Message {
    /// Creates a new system message
    ///
    /// # Examples
    ///
    /// ```
    /// use marketmind::providers::Message;
    ///
    /// let msg = Message::system("Be brief");
    /// assert_eq!(msg.role, "system");
    /// ```
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// The message list sent for a single prompt
///
/// Every request carries the business-intelligence system message followed by
/// the prompt as one user message. Chat transcripts arrive here already
/// flattened into the prompt text.
pub fn prompt_messages(prompt: &str) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)]
}

/// Completion backend
///
/// Implementations turn one prompt into one piece of generated text.
/// Failures are returned as errors; converting them into display text is the
/// job of [`crate::services::safe_complete`].
///
/// # Examples
///
/// ```
/// use marketmind::providers::Provider;
/// use marketmind::error::Result;
/// use async_trait::async_trait;
///
/// struct EchoProvider;
///
/// #[async_trait]
/// impl Provider for EchoProvider {
///     async fn complete(&self, prompt: &str) -> Result<String> {
///         Ok(prompt.to_string())
///     }
///
///     fn name(&self) -> &str {
///         "echo"
///     }
///
///     fn model(&self) -> String {
///         "echo-1".to_string()
///     }
/// }
/// ```
#[async_trait]
pub trait Provider: Send + Sync {
    /// Generates text for a prompt
    ///
    /// # Arguments
    ///
    /// * `prompt` - The full prompt text
    ///
    /// # Returns
    ///
    /// Returns the generated text
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the service reports an error, or
    /// the response has an unexpected shape
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Short provider name used in logs and the status line
    fn name(&self) -> &str;

    /// Model the provider sends requests to
    fn model(&self) -> String;
}
