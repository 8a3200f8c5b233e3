//! Text rendering of session views
//!
//! Each function returns plain text so the output can be checked in tests;
//! headings are coloured when printed by [`print_view`].

use super::history::{chat_label, tool_label};
use crate::services::DashboardSnapshot;
use crate::session::{ChatMessage, HistoryEntry, SessionState, View};
use colored::Colorize;

const UNLOCK_HINT: &str = "Start using the platform to unlock analytics & investor pitch mode.";

/// Heading for a view
pub fn heading(view: View) -> String {
    match view {
        View::Dashboard => "📊 MarketMind Intelligence Dashboard".to_string(),
        View::Chat => "💬 AI Chat".to_string(),
        View::ChatHistory => "💬 Chat History".to_string(),
        other => other.title().to_string(),
    }
}

/// Dashboard body: metrics, feature distribution and score
pub fn render_dashboard(snapshot: &DashboardSnapshot) -> String {
    let mut lines = vec![
        format!("Total Searches: {}", snapshot.total_tools),
        format!("Total Chats: {}", snapshot.total_chats),
        format!("This Month Activity: {}", snapshot.monthly_activity),
    ];

    if !snapshot.feature_counts.is_empty() {
        lines.push(String::new());
        lines.push("📈 Feature Usage Distribution".to_string());
        let width = snapshot
            .feature_counts
            .iter()
            .map(|(feature, _)| feature.label().len())
            .max()
            .unwrap_or(0);
        for (feature, count) in &snapshot.feature_counts {
            lines.push(format!(
                "  {:<width$} {} {}",
                feature.label(),
                "█".repeat(*count),
                count,
                width = width
            ));
        }
    }

    if let Some(most_used) = snapshot.most_used {
        lines.push(String::new());
        lines.push(format!("🔥 Most Used Feature: {}", most_used));
    }

    lines.push(String::new());
    if snapshot.has_activity() {
        lines.push(format!(
            "⚡ Productivity Score: {}/100",
            snapshot.productivity_score()
        ));
        lines.push("Type /insights for AI usage insights or /pitch for an investor pitch.".to_string());
    } else {
        lines.push(UNLOCK_HINT.to_string());
    }

    lines.join("\n")
}

/// Transcript lines prefixed with `You:` or `AI:`
pub fn render_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|message| format!("{}: {}", message.role.speaker(), message.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Input hint shown on a tool form
pub fn form_hint(view: View) -> &'static str {
    match view {
        View::Campaign => "Enter a product; you will then be asked for the audience.",
        View::Sales => "Enter a product; you will then be asked for the persona.",
        View::Lead => "Enter a lead description to score it.",
        View::Summary => "Paste the content to summarize.",
        View::Research => "Enter a research topic.",
        View::Chat => "Type a message. /save stores the conversation in history.",
        _ => "",
    }
}

/// Body of the active view
pub fn render_body(state: &SessionState) -> String {
    let view = state.active_view();
    match view {
        View::Dashboard => render_dashboard(&DashboardSnapshot::current(&state.history)),
        View::Chat => {
            let transcript = render_transcript(state.chat.messages());
            if transcript.is_empty() {
                form_hint(view).to_string()
            } else {
                transcript
            }
        }
        View::History => match state.selected_entry() {
            Some(HistoryEntry::Tool(record)) => format!(
                "Input\n{}\n\nOutput\n{}\n\n/export to download, /back to return",
                record.input, record.output
            ),
            _ => String::new(),
        },
        View::ChatHistory => match state.selected_entry() {
            Some(HistoryEntry::Chat(record)) => format!(
                "{}\n\n/back to return to chat",
                render_transcript(&record.messages)
            ),
            _ => String::new(),
        },
        _ => form_hint(view).to_string(),
    }
}

/// Sidebar listing: navigable views, then history newest first
pub fn render_sidebar(state: &SessionState) -> String {
    let mut lines = vec!["🚀 MarketMind".to_string()];
    for view in View::ALL.into_iter().filter(|view| !view.is_detail()) {
        let marker = if view == state.active_view() { ">" } else { " " };
        lines.push(format!("{} {}", marker, view.title()));
    }

    if !state.history.is_empty() {
        lines.push("---".to_string());
        lines.push("History".to_string());
        for (i, record) in state.history.tools_newest_first().enumerate() {
            lines.push(format!("  t{} {}", i + 1, tool_label(record)));
        }
        for (i, record) in state.history.chats_newest_first().enumerate() {
            lines.push(format!("  c{} {}", i + 1, chat_label(record)));
        }
    }

    lines.join("\n")
}

/// Print the active view
pub fn print_view(state: &SessionState) {
    let view = state.active_view();
    let title = match (view, state.selected_entry()) {
        (View::History, Some(HistoryEntry::Tool(record))) => format!("📜 {}", record.feature),
        _ => heading(view),
    };
    println!("\n{}", title.bold().yellow());
    println!("{}\n", render_body(state));
}
