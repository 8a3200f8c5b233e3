//! End-to-end session scenarios driven through the reducer and a mock provider.

use marketmind::commands::dispatch::dispatch;
use marketmind::commands::history::HistoryRef;
use marketmind::services::{DashboardSnapshot, ToolRequest};
use marketmind::session::{
    Feature, HistoryEntry, HistoryItem, SessionAction, SessionState, View,
};
mod common;

use common::MockProvider;

fn navigate(view: View) -> SessionAction {
    SessionAction::Navigate {
        view,
        keep_selection: false,
    }
}

#[tokio::test]
async fn test_chat_failure_is_saved_as_reply() {
    let provider = MockProvider::new(vec![Err("timeout")]);
    let mut state = SessionState::new("Dashboard");

    dispatch(&mut state, &provider, navigate(View::Chat)).await;
    let result = dispatch(
        &mut state,
        &provider,
        SessionAction::SendChatMessage("hello".to_string()),
    )
    .await;

    let reply = result.chat_reply.unwrap();
    assert!(reply.starts_with("⚠️"));
    assert!(reply.contains("timeout"));
    assert_eq!(state.chat.messages().len(), 2);

    dispatch(&mut state, &provider, SessionAction::SaveChat).await;

    assert!(state.chat.is_empty());
    assert_eq!(state.history.total_chats(), 1);
    assert_eq!(state.history.chats()[0].messages.len(), 2);
}

#[tokio::test]
async fn test_tool_runs_then_reopen_from_history() {
    let provider = MockProvider::new(vec![Ok("Campaign plan"), Ok("High Intent")]);
    let mut state = SessionState::new("Dashboard");

    let campaign =
        ToolRequest::from_input(Feature::Campaign, "Solar panels", Some("homeowners")).unwrap();
    dispatch(&mut state, &provider, SessionAction::SubmitTool(campaign)).await;

    let lead = ToolRequest::from_input(Feature::Lead, "Asked for pricing twice", None).unwrap();
    let result = dispatch(&mut state, &provider, SessionAction::SubmitTool(lead)).await;
    assert_eq!(
        result.tool_outcome.unwrap().output,
        "Score: 90 | Intent: High Intent"
    );

    assert_eq!(state.history.total_tools(), 2);
    assert_eq!(
        state.history.tools()[0].input,
        "Create marketing campaign for Solar panels targeting homeowners"
    );

    // t2 is the older campaign run
    let (item, view) = HistoryRef::Tool(2).resolve(&state.history).unwrap();
    dispatch(
        &mut state,
        &provider,
        SessionAction::SelectHistoryItem { item, view },
    )
    .await;

    assert_eq!(state.active_view(), View::History);
    match state.selected_entry() {
        Some(HistoryEntry::Tool(record)) => assert_eq!(record.output, "Campaign plan"),
        other => panic!("expected tool record, got {:?}", other),
    }

    dispatch(&mut state, &provider, SessionAction::Back).await;
    assert_eq!(state.active_view(), View::Dashboard);
    assert_eq!(state.navigation.selected_item(), None);
}

#[tokio::test]
async fn test_failed_tool_is_still_recorded() {
    let provider = MockProvider::new(vec![Err("Groq API Error: rate limited")]);
    let mut state = SessionState::new("Research");

    let request = ToolRequest::from_input(Feature::Research, "EV charging", None).unwrap();
    dispatch(&mut state, &provider, SessionAction::SubmitTool(request)).await;

    assert_eq!(state.history.total_tools(), 1);
    let record = &state.history.tools()[0];
    assert!(record.output.starts_with("⚠️"));
    assert!(record.output.contains("rate limited"));
}

#[tokio::test]
async fn test_unknown_view_name_leaves_state_unchanged() {
    let provider = MockProvider::new(vec![]);
    let mut state = SessionState::new("Summary");

    let result = dispatch(
        &mut state,
        &provider,
        SessionAction::NavigateNamed {
            name: "Settings".to_string(),
            keep_selection: false,
        },
    )
    .await;

    assert!(!result.changed());
    assert_eq!(state.active_view(), View::Summary);
}

#[tokio::test]
async fn test_selecting_chat_and_back_to_chat() {
    let provider = MockProvider::new(vec![Ok("Hi there")]);
    let mut state = SessionState::new("Chat");

    dispatch(
        &mut state,
        &provider,
        SessionAction::SendChatMessage("hello".to_string()),
    )
    .await;
    dispatch(&mut state, &provider, SessionAction::SaveChat).await;

    let (item, view) = HistoryRef::Chat(1).resolve(&state.history).unwrap();
    assert!(matches!(item, HistoryItem::Chat(_)));
    dispatch(
        &mut state,
        &provider,
        SessionAction::SelectHistoryItem { item, view },
    )
    .await;
    assert_eq!(state.active_view(), View::ChatHistory);

    dispatch(&mut state, &provider, SessionAction::Back).await;
    assert_eq!(state.active_view(), View::Chat);
    assert!(state.chat.is_empty());
}

#[tokio::test]
async fn test_dashboard_figures_follow_history() {
    let provider = MockProvider::new(vec![Ok("a"), Ok("b"), Ok("c"), Ok("Hi")]);
    let mut state = SessionState::new("Dashboard");

    for (feature, input) in [
        (Feature::Summary, "notes"),
        (Feature::Research, "topic"),
        (Feature::Summary, "more notes"),
    ] {
        let request = ToolRequest::from_input(feature, input, None).unwrap();
        dispatch(&mut state, &provider, SessionAction::SubmitTool(request)).await;
    }
    dispatch(&mut state, &provider, navigate(View::Chat)).await;
    dispatch(
        &mut state,
        &provider,
        SessionAction::SendChatMessage("hello".to_string()),
    )
    .await;
    dispatch(&mut state, &provider, SessionAction::SaveChat).await;

    let snapshot = DashboardSnapshot::current(&state.history);
    assert_eq!(snapshot.total_tools, 3);
    assert_eq!(snapshot.total_chats, 1);
    assert_eq!(snapshot.monthly_activity, 4);
    assert_eq!(snapshot.most_used, Some(Feature::Summary));
    assert_eq!(snapshot.productivity_score(), 20);
}
