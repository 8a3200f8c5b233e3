use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

use marketmind::error::{MarketMindError, Result};
use marketmind::providers::Provider;

/// Provider replaying canned replies; `Err` entries fail the call
#[allow(dead_code)]
pub struct MockProvider {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockProvider {
    pub fn new(replies: Vec<std::result::Result<&str, &str>>) -> Self {
        let replies = replies
            .into_iter()
            .map(|reply| reply.map(str::to_string).map_err(str::to_string))
            .collect();
        Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(MarketMindError::Provider(message).into()),
            None => Err(MarketMindError::Provider("no reply queued".to_string()).into()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> String {
        "mock-1".to_string()
    }
}

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}
