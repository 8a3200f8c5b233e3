//! Provider module for MarketMind
//!
//! This module contains the completion provider abstraction and the Groq and
//! Ollama implementations.

pub mod base;
pub mod groq;
pub mod ollama;

pub use base::{prompt_messages, Message, Provider};
pub use groq::GroqProvider;
pub use ollama::OllamaProvider;

use crate::config::ProviderConfig;
use crate::error::{MarketMindError, Result};

/// Create a provider instance based on configuration
///
/// # Arguments
///
/// * `config` - Provider configuration; `provider_type` selects the backend
///
/// # Errors
///
/// Returns error if the provider type is unknown or initialization fails
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn Provider>> {
    match config.provider_type.as_str() {
        "groq" => Ok(Box::new(GroqProvider::new(config.groq.clone())?)),
        "ollama" => Ok(Box::new(OllamaProvider::new(config.ollama.clone())?)),
        other => Err(
            MarketMindError::Provider(format!("Unknown provider type: {}", other)).into(),
        ),
    }
}
