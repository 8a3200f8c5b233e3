//! MarketMind - AI-powered sales and marketing intelligence library
//!
//! This library provides the core of the MarketMind assistant: the
//! session-scoped navigation and history state machine, the completion
//! providers, and the tools built on top of them.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: Views, navigation, tool/chat history and the session reducer
//! - `providers`: Completion provider abstraction and implementations (Groq, Ollama)
//! - `services`: Failure-safe completion, lead scoring, tools and dashboard figures
//! - `prompts`: Prompt templates
//! - `export`: Text and Markdown export
//! - `commands`: Interactive session and one-shot command handlers
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```
//! use marketmind::session::{SessionAction, SessionEffect, SessionState, View};
//!
//! let mut state = SessionState::new("Dashboard");
//! let effects = state.dispatch(SessionAction::Navigate {
//!     view: View::Chat,
//!     keep_selection: false,
//! });
//! assert_eq!(effects, vec![SessionEffect::Render]);
//!
//! let effects = state.dispatch(SessionAction::SendChatMessage("hello".to_string()));
//! assert!(matches!(effects.last(), Some(SessionEffect::CompleteChat { .. })));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod prompts;
pub mod providers;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use error::{MarketMindError, Result};
pub use session::{SessionAction, SessionEffect, SessionState, View};

#[cfg(test)]
pub mod test_utils;
