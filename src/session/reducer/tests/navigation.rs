use super::*;
use pretty_assertions::assert_eq;

#[test]
fn navigate_switches_view_and_renders() {
    let mut state = state();
    let effects = navigate(&mut state, View::Summary);

    assert_eq!(effects, vec![SessionEffect::Render]);
    assert_eq!(state.active_view(), View::Summary);
}

#[test]
fn navigate_named_unknown_view_changes_nothing() {
    let mut state = state();
    let item = record_tool(&mut state, Feature::Lead);
    reduce(
        &mut state,
        SessionAction::SelectHistoryItem {
            item,
            view: View::History,
        },
    );

    let effects = reduce(
        &mut state,
        SessionAction::NavigateNamed {
            name: "Settings".to_string(),
            keep_selection: false,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.active_view(), View::History);
    assert_eq!(state.navigation.selected_item(), Some(item));
}

#[test]
fn navigate_named_is_case_insensitive() {
    let mut state = state();
    let effects = reduce(
        &mut state,
        SessionAction::NavigateNamed {
            name: "chat".to_string(),
            keep_selection: false,
        },
    );

    assert_eq!(effects, vec![SessionEffect::Render]);
    assert_eq!(state.active_view(), View::Chat);
}

#[test]
fn navigate_without_keep_clears_selection() {
    let mut state = state();
    let item = record_tool(&mut state, Feature::Campaign);
    reduce(
        &mut state,
        SessionAction::SelectHistoryItem {
            item,
            view: View::History,
        },
    );

    navigate(&mut state, View::Campaign);

    assert_eq!(state.navigation.selected_item(), None);
}

#[test]
fn back_from_history_goes_to_dashboard() {
    let mut state = state();
    let item = record_tool(&mut state, Feature::Summary);
    reduce(
        &mut state,
        SessionAction::SelectHistoryItem {
            item,
            view: View::History,
        },
    );

    reduce(&mut state, SessionAction::Back);

    assert_eq!(state.active_view(), View::Dashboard);
    assert_eq!(state.navigation.selected_item(), None);
}

#[test]
fn back_from_chat_history_goes_to_chat() {
    let mut state = state();
    let item = record_chat(&mut state);
    reduce(
        &mut state,
        SessionAction::SelectHistoryItem {
            item,
            view: View::ChatHistory,
        },
    );

    reduce(&mut state, SessionAction::Back);

    assert_eq!(state.active_view(), View::Chat);
}

#[test]
fn back_elsewhere_is_ignored() {
    let mut state = state();
    navigate(&mut state, View::Lead);

    assert!(reduce(&mut state, SessionAction::Back).is_empty());
    assert_eq!(state.active_view(), View::Lead);
}
