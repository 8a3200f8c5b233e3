//! Session state transitions
//!
//! [`reduce`] is the only place a [`SessionState`] changes in response to
//! user input or completion results. It never performs I/O; anything slow is
//! handed back to the caller as a [`SessionEffect`].

use super::actions::{SessionAction, SessionEffect};
use super::chat::ChatPhase;
use super::history::HistoryItem;
use super::view::View;
use super::SessionState;

pub fn reduce(state: &mut SessionState, action: SessionAction) -> Vec<SessionEffect> {
    match action {
        SessionAction::Navigate {
            view,
            keep_selection,
        } => {
            state.navigation.navigate(view, keep_selection);
            reconcile_selection(state);
            vec![SessionEffect::Render]
        }
        SessionAction::NavigateNamed {
            name,
            keep_selection,
        } => {
            if !state.navigation.navigate_named(&name, keep_selection) {
                return Vec::new();
            }
            reconcile_selection(state);
            vec![SessionEffect::Render]
        }
        SessionAction::SelectHistoryItem { item, view } => {
            if !state.history.contains(item) {
                tracing::debug!(?item, "Ignoring selection of unknown history item");
                return Vec::new();
            }
            state.navigation.select_history_item(item, view);
            reconcile_selection(state);
            vec![SessionEffect::Render]
        }
        SessionAction::SubmitTool(request) => {
            if request.is_blank() {
                return Vec::new();
            }
            let view = View::from(request.feature());
            if state.navigation.active_view() != view {
                state.navigation.navigate(view, false);
            }
            vec![SessionEffect::RunTool(request)]
        }
        SessionAction::ToolCompleted {
            feature,
            input,
            output,
        } => {
            state.history.record_tool(feature, input, output);
            vec![SessionEffect::Render]
        }
        SessionAction::SendChatMessage(content) => {
            if state.navigation.active_view() != View::Chat {
                tracing::debug!("Ignoring chat message outside the chat view");
                return Vec::new();
            }
            if !state.chat.append_user_message(&content) {
                return Vec::new();
            }
            vec![
                SessionEffect::Render,
                SessionEffect::CompleteChat {
                    context: state.chat.context(),
                },
            ]
        }
        SessionAction::ChatResponse(content) => {
            if state.chat.phase() != ChatPhase::AwaitingResponse {
                tracing::debug!("Dropping chat response with no outstanding message");
                return Vec::new();
            }
            state.chat.append_assistant_message(content);
            vec![SessionEffect::Render]
        }
        SessionAction::SaveChat => {
            if state.chat.save(&mut state.history) {
                vec![SessionEffect::Render]
            } else {
                Vec::new()
            }
        }
        SessionAction::Back => {
            let target = match state.navigation.active_view() {
                View::History => View::Dashboard,
                View::ChatHistory => View::Chat,
                _ => return Vec::new(),
            };
            state.navigation.navigate(target, false);
            vec![SessionEffect::Render]
        }
    }
}

/// Send detail views without a matching selection back to the dashboard
///
/// History needs a selected tool record and ChatHistory a selected chat
/// record; anything else (nothing selected, wrong kind, or a dangling id)
/// redirects.
pub fn reconcile_selection(state: &mut SessionState) {
    let selected = state
        .navigation
        .selected_item()
        .filter(|item| state.history.contains(*item));

    let valid = match (state.navigation.active_view(), selected) {
        (View::History, Some(HistoryItem::Tool(_))) => true,
        (View::ChatHistory, Some(HistoryItem::Chat(_))) => true,
        (View::History | View::ChatHistory, _) => false,
        _ => true,
    };

    if !valid {
        tracing::debug!(
            view = %state.navigation.active_view(),
            "Detail view has no matching selection, redirecting to {}",
            View::Dashboard
        );
        state.navigation.navigate(View::Dashboard, false);
    }
}

#[cfg(test)]
mod tests;
