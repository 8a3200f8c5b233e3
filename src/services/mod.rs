//! Completion-backed services
//!
//! Everything here sits on top of a [`Provider`] and never fails: provider
//! errors become display text at [`safe_complete`], or an error label in the
//! intent classifier.

pub mod analytics;
pub mod intent;
pub mod tools;

pub use analytics::DashboardSnapshot;
pub use intent::{classify_lead, classify_response, LeadScore};
pub use tools::{run_tool, ToolOutcome, ToolRequest};

use crate::providers::Provider;

/// Prefix carried by every completion that failed
pub const ERROR_MARKER: &str = "⚠️";

/// Render a provider failure as display text
pub fn error_text(error: &anyhow::Error) -> String {
    format!("{} API Error:\n{}", ERROR_MARKER, error)
}

/// Whether a completion result is failure text from [`safe_complete`]
pub fn is_error_text(text: &str) -> bool {
    text.starts_with(ERROR_MARKER)
}

/// Run a completion, converting any failure into displayable text
///
/// The returned string either is the generated text or starts with
/// [`ERROR_MARKER`] followed by the failure description. Callers record and
/// display both the same way.
pub async fn safe_complete(provider: &dyn Provider, prompt: &str) -> String {
    match provider.complete(prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(provider = provider.name(), "Completion failed: {:#}", e);
            error_text(&e)
        }
    }
}
