// SPDX-License-Identifier: MPL-2.0

//! State management for the search select widget.

use super::item::SelectOption;
use super::message::SearchSelectMessage;

/// What the option list should display for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContents<'a> {
    /// Options whose label matched the search text.
    Filtered(Vec<&'a SelectOption>),
    /// The full catalog, shown while a selection is committed so the user
    /// can re-browse every option.
    Browse(&'a [SelectOption]),
    /// Nothing matched and nothing is committed.
    NoMatches,
}

/// State for the search select widget.
///
/// This state is owned by the parent component and passed to the widget.
/// All transitions run synchronously through [`SearchSelectState::apply`];
/// the returned value, when present, is the committed selection the host
/// should act on.
#[derive(Debug, Clone, Default)]
pub struct SearchSelectState {
    /// The catalog of selectable options, fixed between host resets.
    pub options: Vec<SelectOption>,
    /// Current contents of the search input.
    pub search: String,
    /// Last committed value, if any.
    pub selected: Option<String>,
    /// Whether the option list is visible.
    pub open: bool,
}

impl SearchSelectState {
    /// Creates a new state over the given catalog, with the input empty,
    /// nothing committed, and the list closed.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            search: String::new(),
            selected: None,
            open: false,
        }
    }

    /// Replaces the catalog and resets all interaction state.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.search.clear();
        self.selected = None;
        self.open = false;
    }

    /// Applies a widget message and returns the committed value when the
    /// message was a selection. Every confirmed selection yields exactly one
    /// value; all other messages yield `None`.
    pub fn apply(&mut self, message: SearchSelectMessage) -> Option<String> {
        match message {
            SearchSelectMessage::InputPressed => {
                self.toggle_open();
                None
            }
            SearchSelectMessage::SearchChanged(text) => {
                self.search_edited(text);
                None
            }
            SearchSelectMessage::OptionSelected(option) => Some(self.select(option)),
            SearchSelectMessage::Clear => {
                self.clear();
                None
            }
            SearchSelectMessage::AreaPressed => None,
            SearchSelectMessage::Dismiss => {
                self.dismiss();
                None
            }
        }
    }

    /// Toggles the option list's visibility.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Closes the option list. A no-op when it is already closed.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Records an edit of the search text.
    ///
    /// Replacement text shorter than the current search text means the user
    /// deleted something; that performs the same full reset as the clear
    /// button rather than keeping the remainder. Any other edit only updates
    /// the search text; it never opens or closes the list and never touches
    /// a committed selection.
    pub fn search_edited(&mut self, text: String) {
        if text.len() < self.search.len() {
            self.clear();
        } else {
            self.search = text;
        }
    }

    /// Commits an option: the search text and selection take its value, the
    /// list closes, and the value is returned for the host.
    pub fn select(&mut self, option: SelectOption) -> String {
        self.search = option.value.clone();
        self.selected = Some(option.value.clone());
        self.open = false;
        option.value
    }

    /// Empties the search text and the committed selection. The list's
    /// visibility is left as it is.
    pub fn clear(&mut self) {
        self.search.clear();
        self.selected = None;
    }

    /// Returns the committed value, if any.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Options whose label contains the search text, case-insensitively.
    pub fn filtered(&self) -> Vec<&SelectOption> {
        self.options
            .iter()
            .filter(|option| option.matches(&self.search))
            .collect()
    }

    /// What the list should display right now.
    ///
    /// While a selection is committed the full catalog is listed, letting the
    /// user re-browse every option with the chosen one marked. Otherwise the
    /// filtered subset is listed, or the no-matches row when it is empty.
    pub fn visible(&self) -> ListContents<'_> {
        if self.selected.is_some() {
            return ListContents::Browse(&self.options);
        }

        let filtered = self.filtered();
        if filtered.is_empty() {
            ListContents::NoMatches
        } else {
            ListContents::Filtered(filtered)
        }
    }

    /// Returns true if `option` should be rendered as the active row:
    /// the committed value while browsing, or a literal match of the search
    /// text while filtering.
    pub fn is_marked(&self, option: &SelectOption) -> bool {
        match &self.selected {
            Some(value) => option.value == *value,
            None => !self.search.is_empty() && option.value == self.search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Vec<SelectOption> {
        vec![
            SelectOption::labeled("Red"),
            SelectOption::labeled("Blue"),
            SelectOption::labeled("Green"),
        ]
    }

    fn labels(contents: &ListContents<'_>) -> Vec<String> {
        match contents {
            ListContents::Filtered(options) => {
                options.iter().map(|o| o.label.clone()).collect()
            }
            ListContents::Browse(options) => options.iter().map(|o| o.label.clone()).collect(),
            ListContents::NoMatches => Vec::new(),
        }
    }

    #[test]
    fn test_new_state() {
        let state = SearchSelectState::new(colors());

        assert_eq!(state.options.len(), 3);
        assert!(state.search.is_empty());
        assert!(state.selected.is_none());
        assert!(!state.open);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut state = SearchSelectState::new(colors());

        state.apply(SearchSelectMessage::SearchChanged("bl".into()));
        assert_eq!(labels(&state.visible()), vec!["Blue"]);

        state.search = String::new();
        state.apply(SearchSelectMessage::SearchChanged("RE".into()));
        assert_eq!(labels(&state.visible()), vec!["Red", "Green"]);
    }

    #[test]
    fn test_empty_search_lists_everything() {
        let state = SearchSelectState::new(colors());
        assert_eq!(labels(&state.visible()), vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn test_no_matches_row() {
        let mut state = SearchSelectState::new(colors());
        state.apply(SearchSelectMessage::SearchChanged("magenta".into()));
        assert_eq!(state.visible(), ListContents::NoMatches);
    }

    #[test]
    fn test_empty_catalog_never_matches() {
        let mut state = SearchSelectState::new(Vec::new());
        assert_eq!(state.visible(), ListContents::NoMatches);

        state.apply(SearchSelectMessage::SearchChanged("anything".into()));
        assert_eq!(state.visible(), ListContents::NoMatches);
    }

    #[test]
    fn test_input_press_toggles_list() {
        let mut state = SearchSelectState::new(colors());

        assert_eq!(state.apply(SearchSelectMessage::InputPressed), None);
        assert!(state.open);

        assert_eq!(state.apply(SearchSelectMessage::InputPressed), None);
        assert!(!state.open);
    }

    #[test]
    fn test_typing_does_not_toggle_list() {
        let mut state = SearchSelectState::new(colors());
        state.apply(SearchSelectMessage::InputPressed);

        state.apply(SearchSelectMessage::SearchChanged("gr".into()));
        assert!(state.open);

        state.dismiss();
        state.apply(SearchSelectMessage::SearchChanged("gre".into()));
        assert!(!state.open);
    }

    #[test]
    fn test_select_commits_and_closes() {
        let mut state = SearchSelectState::new(colors());
        state.apply(SearchSelectMessage::InputPressed);

        let committed = state.apply(SearchSelectMessage::OptionSelected(
            SelectOption::labeled("Blue"),
        ));

        assert_eq!(committed.as_deref(), Some("Blue"));
        assert_eq!(state.selected_value(), Some("Blue"));
        assert_eq!(state.search, "Blue");
        assert!(!state.open);
    }

    #[test]
    fn test_only_selection_yields_a_value() {
        let mut state = SearchSelectState::new(colors());

        assert_eq!(state.apply(SearchSelectMessage::InputPressed), None);
        assert_eq!(
            state.apply(SearchSelectMessage::SearchChanged("re".into())),
            None
        );
        assert_eq!(state.apply(SearchSelectMessage::AreaPressed), None);
        assert_eq!(state.apply(SearchSelectMessage::Dismiss), None);
        assert_eq!(state.apply(SearchSelectMessage::Clear), None);
    }

    #[test]
    fn test_committed_selection_browses_full_catalog() {
        let mut state = SearchSelectState::new(colors());

        state.apply(SearchSelectMessage::SearchChanged("bl".into()));
        state.apply(SearchSelectMessage::OptionSelected(SelectOption::labeled(
            "Blue",
        )));
        state.apply(SearchSelectMessage::InputPressed);

        assert_eq!(labels(&state.visible()), vec!["Red", "Blue", "Green"]);
        assert!(state.is_marked(&SelectOption::labeled("Blue")));
        assert!(!state.is_marked(&SelectOption::labeled("Red")));
    }

    #[test]
    fn test_browse_mode_survives_further_typing() {
        let mut state = SearchSelectState::new(colors());

        state.apply(SearchSelectMessage::OptionSelected(SelectOption::labeled(
            "Blue",
        )));
        state.apply(SearchSelectMessage::SearchChanged("Bluex".into()));

        assert_eq!(state.selected_value(), Some("Blue"));
        assert_eq!(labels(&state.visible()), vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn test_clear_resets_search_and_selection() {
        let mut state = SearchSelectState::new(colors());
        state.apply(SearchSelectMessage::InputPressed);
        state.apply(SearchSelectMessage::OptionSelected(SelectOption::labeled(
            "Green",
        )));
        state.apply(SearchSelectMessage::InputPressed);

        assert_eq!(state.apply(SearchSelectMessage::Clear), None);

        assert!(state.search.is_empty());
        assert!(state.selected.is_none());
        // Clearing leaves the list visibility alone.
        assert!(state.open);
        assert_eq!(labels(&state.visible()), vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn test_deleting_edit_performs_full_reset() {
        let mut state = SearchSelectState::new(colors());
        state.apply(SearchSelectMessage::OptionSelected(SelectOption::labeled(
            "Green",
        )));

        // Backspace in the input reports the text minus one character.
        state.apply(SearchSelectMessage::SearchChanged("Gree".into()));

        assert!(state.search.is_empty());
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_lengthening_edit_keeps_selection() {
        let mut state = SearchSelectState::new(colors());
        state.apply(SearchSelectMessage::OptionSelected(SelectOption::labeled(
            "Red",
        )));

        state.apply(SearchSelectMessage::SearchChanged("Reds".into()));

        assert_eq!(state.search, "Reds");
        assert_eq!(state.selected_value(), Some("Red"));
    }

    #[test]
    fn test_dismiss_closes_regardless_of_state() {
        let mut state = SearchSelectState::new(colors());

        state.apply(SearchSelectMessage::Dismiss);
        assert!(!state.open);

        state.apply(SearchSelectMessage::InputPressed);
        state.apply(SearchSelectMessage::SearchChanged("gr".into()));
        state.apply(SearchSelectMessage::Dismiss);
        assert!(!state.open);
        assert_eq!(state.search, "gr");
    }

    #[test]
    fn test_area_press_changes_nothing() {
        let mut state = SearchSelectState::new(colors());
        state.apply(SearchSelectMessage::InputPressed);
        state.apply(SearchSelectMessage::SearchChanged("bl".into()));

        let before = state.clone();
        state.apply(SearchSelectMessage::AreaPressed);

        assert_eq!(state.search, before.search);
        assert_eq!(state.selected, before.selected);
        assert_eq!(state.open, before.open);
    }

    #[test]
    fn test_marked_row_follows_search_while_filtering() {
        let mut state = SearchSelectState::new(colors());

        state.apply(SearchSelectMessage::SearchChanged("Blue".into()));
        assert!(state.is_marked(&SelectOption::labeled("Blue")));

        state.search = String::new();
        assert!(!state.is_marked(&SelectOption::labeled("Blue")));
    }

    #[test]
    fn test_set_options_resets_interaction_state() {
        let mut state = SearchSelectState::new(colors());
        state.apply(SearchSelectMessage::InputPressed);
        state.apply(SearchSelectMessage::OptionSelected(SelectOption::labeled(
            "Red",
        )));

        state.set_options(vec![SelectOption::labeled("Cyan")]);

        assert!(state.search.is_empty());
        assert!(state.selected.is_none());
        assert!(!state.open);
        assert_eq!(labels(&state.visible()), vec!["Cyan"]);
    }

    #[test]
    fn test_pick_then_reopen_then_clear() {
        let mut state = SearchSelectState::new(colors());

        state.apply(SearchSelectMessage::SearchChanged("bl".into()));
        assert_eq!(labels(&state.visible()), vec!["Blue"]);

        let committed = state.apply(SearchSelectMessage::OptionSelected(
            SelectOption::labeled("Blue"),
        ));
        assert_eq!(committed.as_deref(), Some("Blue"));
        assert!(!state.open);

        state.apply(SearchSelectMessage::InputPressed);
        assert!(state.open);
        assert_eq!(labels(&state.visible()), vec!["Red", "Blue", "Green"]);
        assert!(state.is_marked(&SelectOption::labeled("Blue")));

        state.apply(SearchSelectMessage::Clear);
        assert!(state.search.is_empty());
        assert!(state.selected.is_none());
        assert_eq!(labels(&state.visible()), vec!["Red", "Blue", "Green"]);
    }
}
