//! Session-scoped navigation and history state
//!
//! A [`SessionState`] is created when an interactive session starts and
//! dropped when it ends. It bundles the active view and selection, the tool
//! and chat history, and the chat in progress. Changes go through
//! [`reduce`], which returns the effects the caller must carry out.

pub mod actions;
pub mod chat;
pub mod history;
pub mod navigation;
pub mod reducer;
pub mod view;

pub use actions::{SessionAction, SessionEffect};
pub use chat::{ChatPhase, ChatSession};
pub use history::{
    ChatMessage, ChatRecord, ChatRole, Feature, HistoryEntry, HistoryItem, HistoryStore,
    ToolRecord,
};
pub use navigation::NavigationController;
pub use reducer::reduce;
pub use view::View;

/// Everything one interactive session remembers
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub navigation: NavigationController,
    pub history: HistoryStore,
    pub chat: ChatSession,
}

impl SessionState {
    /// Start a session on the named view with empty history
    ///
    /// Unknown or detail-only view names start on the dashboard.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketmind::session::{SessionState, View};
    ///
    /// assert_eq!(SessionState::new("Lead").active_view(), View::Lead);
    /// assert_eq!(SessionState::new("History").active_view(), View::Dashboard);
    /// ```
    pub fn new(initial_view: &str) -> Self {
        let mut state = Self {
            navigation: NavigationController::new(initial_view),
            history: HistoryStore::new(),
            chat: ChatSession::new(),
        };
        reducer::reconcile_selection(&mut state);
        state
    }

    pub fn active_view(&self) -> View {
        self.navigation.active_view()
    }

    /// The record the current detail view shows, if any
    pub fn selected_entry(&self) -> Option<HistoryEntry<'_>> {
        self.navigation
            .selected_item()
            .and_then(|item| self.history.get(item))
    }

    /// Apply an action; shorthand for [`reduce`]
    pub fn dispatch(&mut self, action: SessionAction) -> Vec<SessionEffect> {
        reduce(self, action)
    }
}
