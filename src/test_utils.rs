//! Test utilities for MarketMind
//!
//! This module provides a scripted provider, temporary directory management
//! and assertion helpers shared by the unit tests.

use crate::config::Config;
use crate::error::{MarketMindError, Result};
use crate::providers::Provider;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tempfile::TempDir;

/// Provider that replays canned replies and records every prompt
///
/// Each `Err` entry becomes a [`MarketMindError::Provider`] failure. Once
/// the script is exhausted every call fails.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(MarketMindError::Provider(message).into()),
            None => Err(MarketMindError::Provider("no scripted reply".to_string()).into()),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> String {
        "scripted-1".to_string()
    }
}

/// Create a temporary directory for testing
///
/// # Panics
///
/// Panics if the directory cannot be created
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Assert that an error contains the expected message
///
/// # Panics
///
/// Panics if the result is Ok or the message does not match
pub fn assert_error_contains<T: std::fmt::Debug>(result: Result<T>, expected: &str) {
    match result {
        Ok(value) => panic!("Expected error containing '{}', got Ok({:?})", expected, value),
        Err(e) => {
            let message = e.to_string();
            assert!(
                message.contains(expected),
                "Expected error containing '{}', got '{}'",
                expected,
                message
            );
        }
    }
}

/// Configuration whose exports land in `dir`
pub fn test_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.export.output_dir = dir.path().join("exports");
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_provider_replays_in_order() {
        let provider = ScriptedProvider::new(vec![Ok("one".to_string()), Err("two".to_string())]);

        assert_eq!(provider.complete("a").await.unwrap(), "one");
        assert_error_contains(provider.complete("b").await, "two");
        assert_error_contains(provider.complete("c").await, "no scripted reply");
        assert_eq!(provider.prompts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_config_points_exports_into_temp_dir() {
        let dir = temp_dir();
        let config = test_config(&dir);
        assert!(config.export.output_dir.starts_with(dir.path()));
        assert!(config.validate().is_ok());
    }
}
