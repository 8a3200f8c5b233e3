//! The five single-shot tools
//!
//! A [`ToolRequest`] carries the form input for one tool. Running it produces
//! a [`ToolOutcome`] holding exactly what gets recorded in history: the input
//! text (the full prompt for Campaign and Sales, the raw field for the others)
//! and the output text, which may be failure text.

use super::intent::{classify_lead, LeadScore};
use super::safe_complete;
use crate::prompts::{campaign_prompt, research_prompt, sales_prompt, summary_prompt};
use crate::providers::Provider;
use crate::session::Feature;

/// Form input for one tool run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    Campaign { product: String, audience: String },
    Sales { product: String, persona: String },
    Lead { description: String },
    Summary { content: String },
    Research { topic: String },
}

impl ToolRequest {
    /// Build a request from a primary input and an optional target
    ///
    /// `target` is the audience for Campaign and the persona for Sales; the
    /// other tools ignore it.
    ///
    /// # Errors
    ///
    /// Returns an error message when Campaign or Sales is missing its target
    ///
    /// # Examples
    ///
    /// ```
    /// use marketmind::services::ToolRequest;
    /// use marketmind::session::Feature;
    ///
    /// let request = ToolRequest::from_input(Feature::Research, "solar leasing", None).unwrap();
    /// assert_eq!(request.prompt(), "Business research on solar leasing");
    /// assert!(ToolRequest::from_input(Feature::Sales, "CRM", None).is_err());
    /// ```
    pub fn from_input(feature: Feature, input: &str, target: Option<&str>) -> Result<Self, String> {
        let input = input.to_string();
        match feature {
            Feature::Campaign => Ok(Self::Campaign {
                product: input,
                audience: target
                    .ok_or_else(|| "Campaign needs a target audience".to_string())?
                    .to_string(),
            }),
            Feature::Sales => Ok(Self::Sales {
                product: input,
                persona: target
                    .ok_or_else(|| "Sales needs a target persona".to_string())?
                    .to_string(),
            }),
            Feature::Lead => Ok(Self::Lead { description: input }),
            Feature::Summary => Ok(Self::Summary { content: input }),
            Feature::Research => Ok(Self::Research { topic: input }),
        }
    }

    pub fn feature(&self) -> Feature {
        match self {
            Self::Campaign { .. } => Feature::Campaign,
            Self::Sales { .. } => Feature::Sales,
            Self::Lead { .. } => Feature::Lead,
            Self::Summary { .. } => Feature::Summary,
            Self::Research { .. } => Feature::Research,
        }
    }

    /// Prompt sent to the completion service
    ///
    /// Lead requests go through the intent classifier, which wraps the
    /// description in its own template; this returns the bare description.
    pub fn prompt(&self) -> String {
        match self {
            Self::Campaign { product, audience } => campaign_prompt(product, audience),
            Self::Sales { product, persona } => sales_prompt(product, persona),
            Self::Lead { description } => description.clone(),
            Self::Summary { content } => summary_prompt(content),
            Self::Research { topic } => research_prompt(topic),
        }
    }

    /// Text stored as the record's input
    pub fn recorded_input(&self) -> String {
        match self {
            Self::Campaign { .. } | Self::Sales { .. } => self.prompt(),
            Self::Lead { description } => description.clone(),
            Self::Summary { content } => content.clone(),
            Self::Research { topic } => topic.clone(),
        }
    }

    /// Whether the primary field is empty
    pub fn is_blank(&self) -> bool {
        let primary = match self {
            Self::Campaign { product, .. } | Self::Sales { product, .. } => product,
            Self::Lead { description } => description,
            Self::Summary { content } => content,
            Self::Research { topic } => topic,
        };
        primary.trim().is_empty()
    }
}

/// Result of one tool run
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutcome {
    pub feature: Feature,
    pub input: String,
    pub output: String,
    /// Set for Lead runs
    pub lead_score: Option<LeadScore>,
}

/// Run a tool against the provider
///
/// Never fails: provider errors end up in `output`.
pub async fn run_tool(provider: &dyn Provider, request: &ToolRequest) -> ToolOutcome {
    let feature = request.feature();
    tracing::info!(feature = %feature, provider = provider.name(), "Running tool");

    let (output, lead_score) = match request {
        ToolRequest::Lead { description } => {
            let score = classify_lead(provider, description).await;
            (score.to_string(), Some(score))
        }
        _ => (safe_complete(provider, &request.prompt()).await, None),
    };

    ToolOutcome {
        feature,
        input: request.recorded_input(),
        output,
        lead_score,
    }
}
