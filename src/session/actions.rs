//! Inputs to and outputs from the session reducer

use super::history::{Feature, HistoryItem};
use super::view::View;
use crate::services::ToolRequest;

/// Everything that can change a session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Navigate {
        view: View,
        keep_selection: bool,
    },
    /// Navigation by name; unknown names are ignored
    NavigateNamed {
        name: String,
        keep_selection: bool,
    },
    SelectHistoryItem {
        item: HistoryItem,
        view: View,
    },
    SubmitTool(ToolRequest),
    ToolCompleted {
        feature: Feature,
        input: String,
        output: String,
    },
    SendChatMessage(String),
    /// Reply (or failure text) for the outstanding chat message
    ChatResponse(String),
    SaveChat,
    Back,
}

/// Work the reducer asks the caller to carry out
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEffect {
    /// The visible state changed
    Render,
    /// Run the tool and report back with [`SessionAction::ToolCompleted`]
    RunTool(ToolRequest),
    /// Request a reply for `context` and report back with
    /// [`SessionAction::ChatResponse`]
    CompleteChat { context: String },
}
