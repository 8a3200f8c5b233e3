//! Lead intent classification

use super::safe_complete;
use crate::prompts::lead_scoring_prompt;
use crate::providers::Provider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score and label assigned to a lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadScore {
    pub score: u8,
    pub intent: String,
}

impl LeadScore {
    fn new(score: u8, intent: impl Into<String>) -> Self {
        Self {
            score,
            intent: intent.into(),
        }
    }
}

impl fmt::Display for LeadScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {} | Intent: {}", self.score, self.intent)
    }
}

/// Map raw model output to a score
///
/// Looks for the case-sensitive substrings "High", then "Medium"; anything
/// else, including empty output, is low intent.
///
/// # Examples
///
/// ```
/// use marketmind::services::classify_response;
///
/// assert_eq!(classify_response("High Intent").score, 90);
/// assert_eq!(classify_response("I am not sure").score, 30);
/// ```
pub fn classify_response(response: &str) -> LeadScore {
    if response.contains("High") {
        LeadScore::new(90, "High Intent")
    } else if response.contains("Medium") {
        LeadScore::new(65, "Medium Intent")
    } else {
        LeadScore::new(30, "Low Intent")
    }
}

/// Classify the buying intent of a lead description
///
/// A failed completion is classified like any other reply, so it scores as
/// low intent.
pub async fn classify_lead(provider: &dyn Provider, description: &str) -> LeadScore {
    let response = safe_complete(provider, &lead_scoring_prompt(description)).await;
    let score = classify_response(&response);
    tracing::debug!(score = score.score, intent = %score.intent, "Classified lead");
    score
}
