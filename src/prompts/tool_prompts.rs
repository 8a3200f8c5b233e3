//! Prompts for the single-shot tools

/// Builds the campaign generator prompt
///
/// # Examples
///
/// ```
/// use marketmind::prompts::campaign_prompt;
///
/// assert_eq!(
///     campaign_prompt("Solar panels", "homeowners"),
///     "Create marketing campaign for Solar panels targeting homeowners"
/// );
/// ```
pub fn campaign_prompt(product: &str, audience: &str) -> String {
    format!(
        "Create marketing campaign for {} targeting {}",
        product, audience
    )
}

pub fn sales_prompt(product: &str, persona: &str) -> String {
    format!("Create sales pitch for {} targeting {}", product, persona)
}

pub fn summary_prompt(content: &str) -> String {
    format!("Summarize: {}", content)
}

pub fn research_prompt(topic: &str) -> String {
    format!("Business research on {}", topic)
}

/// Builds the intent classification prompt for a lead description
///
/// The model is asked to answer with exactly one of the three intent labels;
/// [`crate::services::intent::classify_response`] tolerates anything else.
pub fn lead_scoring_prompt(description: &str) -> String {
    format!(
        r#"Analyze this business lead and classify the buying intent.

Lead:
{}

Classify as one of:
- High Intent
- Medium Intent
- Low Intent

Respond with only one label."#,
        description
    )
}
