use pretty_assertions::assert_eq;

pub(super) use super::reconcile_selection;
pub(super) use super::reduce;
pub(super) use crate::services::ToolRequest;
pub(super) use crate::session::actions::{SessionAction, SessionEffect};
pub(super) use crate::session::chat::ChatPhase;
pub(super) use crate::session::history::{Feature, HistoryItem};
pub(super) use crate::session::view::View;
pub(super) use crate::session::SessionState;

mod navigation;

pub(super) fn state() -> SessionState {
    SessionState::new("Dashboard")
}

pub(super) fn navigate(state: &mut SessionState, view: View) -> Vec<SessionEffect> {
    reduce(
        state,
        SessionAction::Navigate {
            view,
            keep_selection: false,
        },
    )
}

pub(super) fn record_tool(state: &mut SessionState, feature: Feature) -> HistoryItem {
    HistoryItem::Tool(state.history.record_tool(feature, "input", "output"))
}

pub(super) fn record_chat(state: &mut SessionState) -> HistoryItem {
    reduce(
        state,
        SessionAction::Navigate {
            view: View::Chat,
            keep_selection: false,
        },
    );
    reduce(state, SessionAction::SendChatMessage("hello".to_string()));
    reduce(state, SessionAction::ChatResponse("hi".to_string()));
    reduce(state, SessionAction::SaveChat);
    let id = state
        .history
        .chats_newest_first()
        .next()
        .map(|record| record.id)
        .unwrap();
    HistoryItem::Chat(id)
}

#[test]
fn new_state_starts_empty_on_configured_view() {
    let state = SessionState::new("research");
    assert_eq!(state.active_view(), View::Research);
    assert!(state.history.is_empty());
    assert!(state.chat.is_empty());
    assert_eq!(state.navigation.selected_item(), None);
}
