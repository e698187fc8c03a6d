// SPDX-License-Identifier: MPL-2.0

//! Messages emitted by the search select widget.

use super::item::SelectOption;

/// Messages emitted by the search select widget.
///
/// These messages should be wrapped by the parent's message type and fed back
/// into [`SearchSelectState::apply`](super::SearchSelectState::apply) in the
/// parent's update function.
#[derive(Debug, Clone)]
pub enum SearchSelectMessage {
    /// The search input was pressed; toggles the option list.
    InputPressed,

    /// The search input's contents changed.
    ///
    /// Replacement text shorter than the current search text is treated as a
    /// deleting edit and performs the full shortcut-clear instead of keeping
    /// the remainder.
    SearchChanged(String),

    /// An option row was pressed, committing that option.
    OptionSelected(SelectOption),

    /// The clear button was pressed; empties the search text and the
    /// committed selection without notifying the host.
    Clear,

    /// A press landed inside the widget's region but on no interactive
    /// element. Keeps the list open.
    AreaPressed,

    /// A press landed outside the widget's region; closes the list.
    Dismiss,
}
