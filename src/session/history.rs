//! Append-only logs of tool runs and saved chat transcripts
//!
//! Records are stored in the order they were produced and are never edited or
//! removed while the session lives. Display code iterates them newest first
//! through [`HistoryStore::tools_newest_first`] and
//! [`HistoryStore::chats_newest_first`].

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Single-shot tools offered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Campaign,
    Sales,
    Lead,
    Summary,
    Research,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Campaign,
        Feature::Sales,
        Feature::Lead,
        Feature::Summary,
        Feature::Research,
    ];

    /// Parse a feature from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use marketmind::session::Feature;
    ///
    /// assert_eq!(Feature::parse_str("lead").unwrap(), Feature::Lead);
    /// assert!(Feature::parse_str("chat").is_err());
    /// ```
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "campaign" => Ok(Self::Campaign),
            "sales" | "pitch" => Ok(Self::Sales),
            "lead" | "score" => Ok(Self::Lead),
            "summary" => Ok(Self::Summary),
            "research" => Ok(Self::Research),
            other => Err(format!("Unknown tool: {}", other)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Campaign => "Campaign",
            Self::Sales => "Sales",
            Self::Lead => "Lead",
            Self::Summary => "Summary",
            Self::Research => "Research",
        }
    }

    /// Title used for the file name when a result is downloaded
    pub fn export_title(self) -> &'static str {
        match self {
            Self::Sales => "Sales_Pitch",
            Self::Lead => "Lead_Score",
            other => other.label(),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Role name as used in the flattened completion context
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// Speaker label shown to the user
    pub fn speaker(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "AI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// One completed tool run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: Uuid,
    pub feature: Feature,
    pub input: String,
    pub output: String,
    pub timestamp: NaiveDateTime,
}

/// One saved chat transcript; `messages` is never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub timestamp: NaiveDateTime,
}

/// Reference to a record held by a [`HistoryStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryItem {
    Tool(Uuid),
    Chat(Uuid),
}

/// Borrowed view of either kind of record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryEntry<'a> {
    Tool(&'a ToolRecord),
    Chat(&'a ChatRecord),
}

impl HistoryEntry<'_> {
    pub fn timestamp(&self) -> NaiveDateTime {
        match self {
            Self::Tool(record) => record.timestamp,
            Self::Chat(record) => record.timestamp,
        }
    }

    pub fn item(&self) -> HistoryItem {
        match self {
            Self::Tool(record) => HistoryItem::Tool(record.id),
            Self::Chat(record) => HistoryItem::Chat(record.id),
        }
    }
}

/// Format a timestamp's month the way months are queried (`YYYY-MM`)
pub fn month_key(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m").to_string()
}

/// Month key for the current local time
pub fn current_month() -> String {
    month_key(&Local::now().naive_local())
}

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    tools: Vec<ToolRecord>,
    chats: Vec<ChatRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tool run stamped with the current local time
    ///
    /// Called once per run that produced output. Provider failures arrive
    /// here as ordinary output text so they stay visible in history.
    pub fn record_tool(
        &mut self,
        feature: Feature,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Uuid {
        self.record_tool_at(feature, input, output, Local::now().naive_local())
    }

    /// Append a tool run with an explicit timestamp
    pub fn record_tool_at(
        &mut self,
        feature: Feature,
        input: impl Into<String>,
        output: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.tools.push(ToolRecord {
            id,
            feature,
            input: input.into(),
            output: output.into(),
            timestamp,
        });
        tracing::debug!(%id, feature = %feature, total = self.tools.len(), "Recorded tool run");
        id
    }

    /// Save a transcript stamped with the current local time
    ///
    /// Returns `None` and records nothing when `messages` is empty. On
    /// success returns the empty transcript the caller adopts as its new
    /// in-progress chat.
    pub fn record_chat(&mut self, messages: &[ChatMessage]) -> Option<Vec<ChatMessage>> {
        self.record_chat_at(messages, Local::now().naive_local())
    }

    /// Save a transcript with an explicit timestamp
    pub fn record_chat_at(
        &mut self,
        messages: &[ChatMessage],
        timestamp: NaiveDateTime,
    ) -> Option<Vec<ChatMessage>> {
        if messages.is_empty() {
            return None;
        }

        let id = Uuid::new_v4();
        self.chats.push(ChatRecord {
            id,
            messages: messages.to_vec(),
            timestamp,
        });
        tracing::debug!(%id, messages = messages.len(), "Recorded chat transcript");
        Some(Vec::new())
    }

    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    pub fn chats(&self) -> &[ChatRecord] {
        &self.chats
    }

    pub fn tools_newest_first(&self) -> impl Iterator<Item = &ToolRecord> + '_ {
        self.tools.iter().rev()
    }

    pub fn chats_newest_first(&self) -> impl Iterator<Item = &ChatRecord> + '_ {
        self.chats.iter().rev()
    }

    pub fn total_tools(&self) -> usize {
        self.tools.len()
    }

    pub fn total_chats(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.chats.is_empty()
    }

    pub fn tool(&self, id: Uuid) -> Option<&ToolRecord> {
        self.tools.iter().find(|record| record.id == id)
    }

    pub fn chat(&self, id: Uuid) -> Option<&ChatRecord> {
        self.chats.iter().find(|record| record.id == id)
    }

    /// Resolve a reference to the record it points at
    pub fn get(&self, item: HistoryItem) -> Option<HistoryEntry<'_>> {
        match item {
            HistoryItem::Tool(id) => self.tool(id).map(HistoryEntry::Tool),
            HistoryItem::Chat(id) => self.chat(id).map(HistoryEntry::Chat),
        }
    }

    pub fn contains(&self, item: HistoryItem) -> bool {
        self.get(item).is_some()
    }

    /// All tool and chat records whose timestamp falls in `month` (`YYYY-MM`)
    ///
    /// Tool records come first, then chats, each in recording order. The
    /// iterator is recomputed on every call.
    pub fn monthly_activity<'a>(
        &'a self,
        month: &'a str,
    ) -> impl Iterator<Item = HistoryEntry<'a>> + 'a {
        let month = month.trim();
        self.tools
            .iter()
            .filter(move |record| month_key(&record.timestamp) == month)
            .map(HistoryEntry::Tool)
            .chain(
                self.chats
                    .iter()
                    .filter(move |record| month_key(&record.timestamp) == month)
                    .map(HistoryEntry::Chat),
            )
    }

    /// Count of tool runs per feature, in first-recorded order
    pub fn feature_frequency(&self) -> Vec<(Feature, usize)> {
        let mut counts: Vec<(Feature, usize)> = Vec::new();
        for record in &self.tools {
            match counts.iter_mut().find(|(feature, _)| *feature == record.feature) {
                Some((_, count)) => *count += 1,
                None => counts.push((record.feature, 1)),
            }
        }
        counts
    }

    /// Feature with the highest run count
    ///
    /// On equal counts the feature that was recorded first wins.
    pub fn most_used_feature(&self) -> Option<Feature> {
        let mut best: Option<(Feature, usize)> = None;
        for (feature, count) in self.feature_frequency() {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((feature, count));
            }
        }
        best.map(|(feature, _)| feature)
    }
}
