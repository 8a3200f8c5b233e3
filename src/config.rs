//! Configuration management for MarketMind
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{MarketMindError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for MarketMind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Completion provider configuration (Groq, Ollama)
    pub provider: ProviderConfig,
    /// Session behaviour
    #[serde(default)]
    pub session: SessionConfig,
    /// Report export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Provider configuration
///
/// Specifies which completion provider to use and its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Type of provider to use
    #[serde(rename = "type")]
    pub provider_type: String,

    /// Groq (OpenAI-compatible) configuration
    #[serde(default)]
    pub groq: GroqConfig,

    /// Ollama configuration
    #[serde(default)]
    pub ollama: OllamaConfig,
}

/// Groq provider configuration
///
/// Any OpenAI-compatible `/chat/completions` endpoint works when `api_base`
/// points at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// API base URL, without the `/chat/completions` suffix
    #[serde(default = "default_groq_api_base")]
    pub api_base: String,

    /// Model to use
    #[serde(default = "default_groq_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u64,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_groq_api_base() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_groq_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_request_timeout() -> u64 {
    30
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_base: default_groq_api_base(),
            model: default_groq_model(),
            temperature: default_temperature(),
            timeout_seconds: default_request_timeout(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Ollama provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Ollama server host
    #[serde(default = "default_ollama_host")]
    pub host: String,

    /// Model to use for Ollama
    #[serde(default = "default_ollama_model")]
    pub model: String,
}

fn default_ollama_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:latest".to_string()
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_ollama_host(),
            model: default_ollama_model(),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// View opened when a session starts
    ///
    /// Kept as free text: an unknown name falls back to the dashboard when
    /// the session is created rather than failing validation.
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_view() -> String {
    "Dashboard".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_view: default_view(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory that receives text and report exports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default_config()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn default_config() -> Self {
        Self {
            provider: ProviderConfig {
                provider_type: "groq".to_string(),
                groq: GroqConfig::default(),
                ollama: OllamaConfig::default(),
            },
            session: SessionConfig::default(),
            export: ExportConfig::default(),
        }
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MarketMindError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| MarketMindError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(provider_type) = std::env::var("MARKETMIND_PROVIDER") {
            self.provider.provider_type = provider_type;
        }

        if let Ok(api_base) = std::env::var("MARKETMIND_GROQ_API_BASE") {
            self.provider.groq.api_base = api_base;
        }

        if let Ok(model) = std::env::var("MARKETMIND_GROQ_MODEL") {
            self.provider.groq.model = model;
        }

        if let Ok(timeout) = std::env::var("MARKETMIND_GROQ_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.provider.groq.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid MARKETMIND_GROQ_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(host) = std::env::var("MARKETMIND_OLLAMA_HOST") {
            self.provider.ollama.host = host;
        }

        if let Ok(model) = std::env::var("MARKETMIND_OLLAMA_MODEL") {
            self.provider.ollama.model = model;
        }

        if let Ok(view) = std::env::var("MARKETMIND_DEFAULT_VIEW") {
            tracing::debug!(view = %view, "Env override: MARKETMIND_DEFAULT_VIEW");
            self.session.default_view = view;
        }

        if let Ok(dir) = std::env::var("MARKETMIND_EXPORT_DIR") {
            tracing::debug!(dir = %dir, "Env override: MARKETMIND_EXPORT_DIR");
            self.export.output_dir = PathBuf::from(dir);
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        match &cli.command {
            crate::cli::Commands::Session {
                provider: Some(provider),
                ..
            }
            | crate::cli::Commands::Run {
                provider: Some(provider),
                ..
            }
            | crate::cli::Commands::Score {
                provider: Some(provider),
                ..
            } => {
                tracing::debug!("Using provider override: {}", provider);
                self.provider.provider_type = provider.clone();
            }
            _ => {}
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.provider.provider_type.is_empty() {
            return Err(MarketMindError::Config("Provider type cannot be empty".to_string()).into());
        }

        let valid_providers = ["groq", "ollama"];
        if !valid_providers.contains(&self.provider.provider_type.as_str()) {
            return Err(MarketMindError::Config(format!(
                "Invalid provider type: {}. Must be one of: {}",
                self.provider.provider_type,
                valid_providers.join(", ")
            ))
            .into());
        }

        if self.provider.groq.api_base.is_empty() {
            return Err(
                MarketMindError::Config("groq.api_base cannot be empty".to_string()).into(),
            );
        }

        if !(0.0..=2.0).contains(&self.provider.groq.temperature) {
            return Err(MarketMindError::Config(
                "groq.temperature must be between 0.0 and 2.0".to_string(),
            )
            .into());
        }

        if self.provider.groq.timeout_seconds == 0 {
            return Err(MarketMindError::Config(
                "groq.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.export.output_dir.as_os_str().is_empty() {
            return Err(
                MarketMindError::Config("export.output_dir cannot be empty".to_string()).into(),
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider.provider_type, "groq");
        assert_eq!(config.provider.groq.model, "llama-3.1-8b-instant");
        assert_eq!(config.provider.groq.timeout_seconds, 30);
        assert_eq!(config.session.default_view, "Dashboard");
        assert_eq!(config.export.output_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_config_validation_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_provider() {
        let mut config = Config::default();
        config.provider.provider_type = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_provider() {
        let mut config = Config::default();
        config.provider.provider_type = "copilot".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid provider type"));
    }

    #[test]
    fn test_config_validation_temperature_out_of_range() {
        let mut config = Config::default();
        config.provider.groq.temperature = 2.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let mut config = Config::default();
        config.provider.groq.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_default_view_still_validates() {
        let mut config = Config::default();
        config.session.default_view = "Settings".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
provider:
  type: ollama
  groq:
    model: llama-3.3-70b-versatile
    temperature: 0.2
  ollama:
    host: http://localhost:11434
    model: mistral:latest
session:
  default_view: Chat
export:
  output_dir: /tmp/marketmind
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.provider.provider_type, "ollama");
        assert_eq!(config.provider.groq.model, "llama-3.3-70b-versatile");
        assert_eq!(config.provider.groq.api_base, default_groq_api_base());
        assert_eq!(config.provider.ollama.model, "mistral:latest");
        assert_eq!(config.session.default_view, "Chat");
        assert_eq!(config.export.output_dir, PathBuf::from("/tmp/marketmind"));
    }

    #[test]
    fn test_config_from_minimal_yaml_uses_defaults() {
        let yaml = "provider:\n  type: groq\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.provider.groq.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.session.default_view, "Dashboard");
    }

    #[test]
    #[serial]
    fn test_load_nonexistent_file_uses_defaults() {
        let cli = crate::cli::Cli::default();
        let config = Config::load("nonexistent.yaml", &cli).unwrap();
        assert_eq!(config.provider.groq.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "provider: [not, a, map").unwrap();
        let cli = crate::cli::Cli::default();
        let err = Config::load(path.to_str().unwrap(), &cli).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_cli_provider_override() {
        let cli = crate::cli::Cli {
            config: None,
            verbose: false,
            command: crate::cli::Commands::Score {
                description: "lead".to_string(),
                provider: Some("ollama".to_string()),
            },
        };
        let mut config = Config::default();
        config.apply_cli_overrides(&cli);
        assert_eq!(config.provider.provider_type, "ollama");
    }

    #[test]
    #[serial]
    fn test_apply_env_vars_overrides_fields() {
        std::env::set_var("MARKETMIND_GROQ_MODEL", "mixtral-8x7b");
        std::env::set_var("MARKETMIND_DEFAULT_VIEW", "Research");
        std::env::set_var("MARKETMIND_GROQ_TIMEOUT_SECONDS", "not-a-number");

        let mut config = Config::default();
        config.apply_env_vars();

        assert_eq!(config.provider.groq.model, "mixtral-8x7b");
        assert_eq!(config.session.default_view, "Research");
        assert_eq!(config.provider.groq.timeout_seconds, 30);

        std::env::remove_var("MARKETMIND_GROQ_MODEL");
        std::env::remove_var("MARKETMIND_DEFAULT_VIEW");
        std::env::remove_var("MARKETMIND_GROQ_TIMEOUT_SECONDS");
    }
}
