//! In-progress chat transcript

use super::history::{ChatMessage, HistoryStore};

/// Where a chat stands in its request/response cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    /// A user message has been sent and no reply has arrived yet
    AwaitingResponse,
}

/// Accumulates one conversation until it is saved into history
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    phase: ChatPhase,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user turn and wait for the reply
    ///
    /// Returns `false` without changing anything when `content` is blank or a
    /// reply is still outstanding.
    pub fn append_user_message(&mut self, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        if self.phase == ChatPhase::AwaitingResponse {
            tracing::debug!("Rejecting user message while awaiting a response");
            return false;
        }

        self.messages.push(ChatMessage::user(content));
        self.phase = ChatPhase::AwaitingResponse;
        true
    }

    /// Append the reply to the outstanding user turn
    ///
    /// Called after every completion attempt, so `content` may be error text.
    pub fn append_assistant_message(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
        self.phase = ChatPhase::Idle;
    }

    /// Move the transcript into `history` and start over
    ///
    /// Returns `false` when there is nothing to save.
    pub fn save(&mut self, history: &mut HistoryStore) -> bool {
        match history.record_chat(&self.messages) {
            Some(reset) => {
                self.messages = reset;
                self.phase = ChatPhase::Idle;
                true
            }
            None => false,
        }
    }

    /// The transcript flattened to `role: content` lines
    ///
    /// This is the prompt sent for the next reply. It grows with the
    /// conversation and is not truncated.
    pub fn context(&self) -> String {
        self.messages
            .iter()
            .map(|message| format!("{}: {}", message.role.as_str(), message.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
