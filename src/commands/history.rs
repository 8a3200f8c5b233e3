//! History index shown in the interactive session
//!
//! Records are listed newest first. Tool records are referenced as `t1`,
//! `t2`, ... and chat records as `c1`, `c2`, ..., counting from the newest.

use crate::session::{ChatRecord, HistoryItem, HistoryStore, ToolRecord, View};
use colored::Colorize;
use prettytable::{format, Table};

/// Position of a record in the newest-first listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRef {
    Tool(usize),
    Chat(usize),
}

impl HistoryRef {
    /// Parse `t<n>` or `c<n>` with `n` starting at 1
    ///
    /// # Examples
    ///
    /// ```
    /// use marketmind::commands::history::HistoryRef;
    ///
    /// assert_eq!(HistoryRef::parse_str("t2").unwrap(), HistoryRef::Tool(2));
    /// assert!(HistoryRef::parse_str("c0").is_err());
    /// ```
    pub fn parse_str(s: &str) -> Result<Self, String> {
        let s = s.trim().to_lowercase();
        let mut chars = s.chars();
        let kind = chars.next();
        let index: usize = chars
            .as_str()
            .parse()
            .map_err(|_| format!("Invalid history reference: {}", s))?;
        match (kind, index) {
            (_, 0) => Err(format!("Invalid history reference: {}", s)),
            (Some('t'), n) => Ok(Self::Tool(n)),
            (Some('c'), n) => Ok(Self::Chat(n)),
            _ => Err(format!("Invalid history reference: {}", s)),
        }
    }

    /// Resolve to a record reference and the detail view that shows it
    pub fn resolve(self, history: &HistoryStore) -> Option<(HistoryItem, View)> {
        match self {
            Self::Tool(n) => history
                .tools_newest_first()
                .nth(n - 1)
                .map(|record| (HistoryItem::Tool(record.id), View::History)),
            Self::Chat(n) => history
                .chats_newest_first()
                .nth(n - 1)
                .map(|record| (HistoryItem::Chat(record.id), View::ChatHistory)),
        }
    }
}

/// Sidebar label for a tool record, e.g. `Campaign (14:05:09)`
pub fn tool_label(record: &ToolRecord) -> String {
    format!("{} ({})", record.feature, record.timestamp.format("%H:%M:%S"))
}

/// Sidebar label for a chat record, e.g. `💬 Chat (14:05:09)`
pub fn chat_label(record: &ChatRecord) -> String {
    format!("💬 Chat ({})", record.timestamp.format("%H:%M:%S"))
}

/// Reference and label for every record, tools first, each newest first
pub fn index_entries(history: &HistoryStore) -> Vec<(String, String, String)> {
    let tools = history.tools_newest_first().enumerate().map(|(i, record)| {
        (
            format!("t{}", i + 1),
            tool_label(record),
            record.timestamp.format("%Y-%m-%d").to_string(),
        )
    });
    let chats = history.chats_newest_first().enumerate().map(|(i, record)| {
        (
            format!("c{}", i + 1),
            chat_label(record),
            record.timestamp.format("%Y-%m-%d").to_string(),
        )
    });
    tools.chain(chats).collect()
}

/// Print the history index
pub fn print_history(history: &HistoryStore) {
    if history.is_empty() {
        println!("{}", "No history yet.".yellow());
        return;
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.add_row(prettytable::row!["Ref".bold(), "Item".bold(), "Date".bold()]);

    for (reference, label, date) in index_entries(history) {
        table.add_row(prettytable::row![reference.cyan(), label, date]);
    }

    println!("\nHistory:");
    table.printstd();
    println!();
    println!("Use {} to reopen an item.", "/open <ref>".cyan());
    println!();
}
