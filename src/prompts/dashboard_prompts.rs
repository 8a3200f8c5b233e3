//! Prompts built from dashboard usage figures

use crate::services::analytics::DashboardSnapshot;

/// Builds the usage-insight prompt shown under the dashboard metrics
pub fn usage_insight_prompt(snapshot: &DashboardSnapshot) -> String {
    format!(
        "Analyze usage:\nTotal Searches: {}\nTotal Chats: {}\nMonthly Activity: {}\nSuggest improvements.",
        snapshot.total_tools, snapshot.total_chats, snapshot.monthly_activity
    )
}

/// Builds the mock investor pitch prompt
///
/// # Arguments
///
/// * `snapshot` - Usage figures quoted as traction
///
/// # Returns
///
/// A prompt asking for an eight-part pitch script
pub fn investor_pitch_prompt(snapshot: &DashboardSnapshot) -> String {
    let most_used = snapshot
        .most_used
        .map(|feature| feature.label().to_string())
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        r#"Create a startup investor pitch for MarketMind,
an AI-powered Sales & Marketing Intelligence Platform.

Traction:
- Total Usage: {}
- Monthly Activity: {}
- Most Used Feature: {}
- Productivity Score: {}

Structure:
1. Problem
2. Solution
3. Market Opportunity
4. Traction
5. Competitive Advantage
6. Revenue Model
7. Growth Plan
8. Funding Ask

Sound confident and investor-ready."#,
        snapshot.total_usage(),
        snapshot.monthly_activity,
        most_used,
        snapshot.productivity_score()
    )
}
