//! The closed set of views a session can display.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::history::Feature;

/// A named screen of the session
///
/// The set is closed: every value of this enum is reachable and nothing else
/// is. Names coming from user input or configuration go through
/// [`View::parse_str`], which rejects anything outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Dashboard,
    Campaign,
    Sales,
    Lead,
    Summary,
    Research,
    Chat,
    /// Detail view for a selected tool record
    History,
    /// Detail view for a selected chat record
    ChatHistory,
}

impl View {
    /// Every valid view, in sidebar order
    pub const ALL: [View; 9] = [
        View::Dashboard,
        View::Campaign,
        View::Sales,
        View::Lead,
        View::Summary,
        View::Research,
        View::Chat,
        View::History,
        View::ChatHistory,
    ];

    /// Parse a view name, case-insensitively
    ///
    /// Returns `None` for names outside the closed set. Callers treat that as
    /// "ignore the request", never as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketmind::session::View;
    ///
    /// assert_eq!(View::parse_str("chat"), Some(View::Chat));
    /// assert_eq!(View::parse_str("chat-history"), Some(View::ChatHistory));
    /// assert_eq!(View::parse_str("Settings"), None);
    /// ```
    pub fn parse_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|view| view.label().to_lowercase() == normalized)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Campaign => "Campaign",
            Self::Sales => "Sales",
            Self::Lead => "Lead",
            Self::Summary => "Summary",
            Self::Research => "Research",
            Self::Chat => "Chat",
            Self::History => "History",
            Self::ChatHistory => "ChatHistory",
        }
    }

    /// Sidebar title shown for navigable views
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Campaign => "Campaign Generator",
            Self::Sales => "Sales Pitch",
            Self::Lead => "Lead Scoring",
            Self::Summary => "Executive Summary",
            Self::Research => "Business Research",
            Self::Chat => "AI Chat",
            Self::History => "History",
            Self::ChatHistory => "Chat History",
        }
    }

    /// The tool a view runs, if it is a tool form
    pub fn feature(self) -> Option<Feature> {
        match self {
            Self::Campaign => Some(Feature::Campaign),
            Self::Sales => Some(Feature::Sales),
            Self::Lead => Some(Feature::Lead),
            Self::Summary => Some(Feature::Summary),
            Self::Research => Some(Feature::Research),
            _ => None,
        }
    }

    /// Whether the view renders a selected history item
    pub fn is_detail(self) -> bool {
        matches!(self, Self::History | Self::ChatHistory)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::Dashboard
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<Feature> for View {
    fn from(feature: Feature) -> Self {
        match feature {
            Feature::Campaign => Self::Campaign,
            Feature::Sales => Self::Sales,
            Feature::Lead => Self::Lead,
            Feature::Summary => Self::Summary,
            Feature::Research => Self::Research,
        }
    }
}
