//! Active view tracking and history-item selection

use super::history::HistoryItem;
use super::view::View;

/// Tracks which view is shown and which history record a detail view shows
///
/// Only values of [`View`] can become active, so the closed-set invariant is
/// carried by the type. Named navigation goes through [`View::parse_str`] and
/// silently ignores unknown names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationController {
    active_view: View,
    selected_item: Option<HistoryItem>,
}

impl NavigationController {
    /// Create a controller starting on the named view
    ///
    /// An unknown name falls back to [`View::Dashboard`].
    ///
    /// # Examples
    ///
    /// ```
    /// use marketmind::session::{NavigationController, View};
    ///
    /// assert_eq!(NavigationController::new("Chat").active_view(), View::Chat);
    /// assert_eq!(NavigationController::new("Nope").active_view(), View::Dashboard);
    /// ```
    pub fn new(initial_view: &str) -> Self {
        let active_view = View::parse_str(initial_view).unwrap_or_else(|| {
            tracing::warn!(
                view = initial_view,
                "Unknown initial view, falling back to {}",
                View::default()
            );
            View::default()
        });

        Self {
            active_view,
            selected_item: None,
        }
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn selected_item(&self) -> Option<HistoryItem> {
        self.selected_item
    }

    /// Switch to `target`, clearing the selection unless `keep_selection`
    pub fn navigate(&mut self, target: View, keep_selection: bool) {
        tracing::debug!(from = %self.active_view, to = %target, keep_selection, "Navigate");
        self.active_view = target;
        if !keep_selection {
            self.selected_item = None;
        }
    }

    /// Switch to a view by name
    ///
    /// Returns `false` and leaves the state untouched when the name is not a
    /// known view.
    pub fn navigate_named(&mut self, name: &str, keep_selection: bool) -> bool {
        match View::parse_str(name) {
            Some(view) => {
                self.navigate(view, keep_selection);
                true
            }
            None => {
                tracing::debug!(view = name, "Ignoring navigation to unknown view");
                false
            }
        }
    }

    /// Point the selection at `item` and open `target` keeping it
    ///
    /// The caller is responsible for checking that `item` exists.
    pub fn select_history_item(&mut self, item: HistoryItem, target: View) {
        self.selected_item = Some(item);
        self.navigate(target, true);
    }
}
