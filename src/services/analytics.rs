//! Dashboard usage figures

use super::safe_complete;
use crate::prompts::{investor_pitch_prompt, usage_insight_prompt};
use crate::providers::Provider;
use crate::session::history::current_month;
use crate::session::{Feature, HistoryStore};

/// Usage figures derived from the session history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub total_tools: usize,
    pub total_chats: usize,
    /// Records in the queried month
    pub monthly_activity: usize,
    /// Tool runs per feature, in first-recorded order
    pub feature_counts: Vec<(Feature, usize)>,
    pub most_used: Option<Feature>,
}

impl DashboardSnapshot {
    /// Compute the figures for `month` (`YYYY-MM`)
    pub fn for_month(history: &HistoryStore, month: &str) -> Self {
        Self {
            total_tools: history.total_tools(),
            total_chats: history.total_chats(),
            monthly_activity: history.monthly_activity(month).count(),
            feature_counts: history.feature_frequency(),
            most_used: history.most_used_feature(),
        }
    }

    /// Compute the figures for the current month
    pub fn current(history: &HistoryStore) -> Self {
        Self::for_month(history, &current_month())
    }

    pub fn total_usage(&self) -> usize {
        self.total_tools + self.total_chats
    }

    /// Five points per recorded item, capped at 100
    pub fn productivity_score(&self) -> usize {
        (self.total_usage() * 5).min(100)
    }

    /// Insight and pitch generation are offered only once something is recorded
    pub fn has_activity(&self) -> bool {
        self.total_usage() > 0
    }
}

/// Ask the model for improvement suggestions based on usage
pub async fn usage_insights(provider: &dyn Provider, snapshot: &DashboardSnapshot) -> String {
    safe_complete(provider, &usage_insight_prompt(snapshot)).await
}

/// Ask the model for a mock investor pitch quoting usage as traction
pub async fn investor_pitch(provider: &dyn Provider, snapshot: &DashboardSnapshot) -> String {
    safe_complete(provider, &investor_pitch_prompt(snapshot)).await
}
