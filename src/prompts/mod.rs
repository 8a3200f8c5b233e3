//! Prompt templates sent to the completion service
//!
//! Tool prompts are single-line instructions built from form input. The
//! dashboard prompts embed usage figures from
//! [`crate::services::analytics::DashboardSnapshot`].

pub mod dashboard_prompts;
pub mod tool_prompts;

/// System message sent ahead of every prompt by chat-style providers
pub const SYSTEM_PROMPT: &str = "You are a business intelligence AI assistant.";

pub use dashboard_prompts::{investor_pitch_prompt, usage_insight_prompt};
pub use tool_prompts::{
    campaign_prompt, lead_scoring_prompt, research_prompt, sales_prompt, summary_prompt,
};
