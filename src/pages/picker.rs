// SPDX-License-Identifier: MPL-2.0

//! Picker page hosting the search select widget.
//!
//! The page owns the widget state and a short history of committed picks.
//! Selection handling lives in the app's update function: a committed value
//! is recorded here, logged, and announced with a notification.

use crate::fl;
use crate::palette::PaletteKind;
use crate::widgets::search_select::{SearchSelect, SearchSelectState};
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

/// Picks remembered by the history card.
const HISTORY_LIMIT: usize = 10;

/// State specific to the picker page.
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    /// The search select widget state
    pub select: SearchSelectState,
    /// Committed picks, most recent first
    pub history: Vec<String>,
}

impl PickerState {
    /// Creates picker state over the given palette's catalog.
    pub fn new(palette: PaletteKind) -> Self {
        Self {
            select: SearchSelectState::new(palette.options()),
            history: Vec::new(),
        }
    }

    /// Swaps the catalog for another palette, resetting the widget.
    pub fn set_palette(&mut self, palette: PaletteKind) {
        self.select.set_options(palette.options());
    }

    /// Records a committed pick at the front of the history.
    pub fn record_pick(&mut self, value: String) {
        self.history.insert(0, value);
        self.history.truncate(HISTORY_LIMIT);
    }

    /// The most recent pick, if any.
    pub fn last_pick(&self) -> Option<&str> {
        self.history.first().map(String::as_str)
    }
}

/// Messages specific to the picker page.
#[derive(Debug, Clone)]
pub enum PickerMsg {
    /// Search select widget message
    Select(SearchSelectMessage),
    /// Copy the most recent pick to the clipboard
    CopyLastPick,
    /// Forget every recorded pick
    ClearHistory,
}

/// Renders the picker view.
pub fn view<'a, Message: Clone + 'static>(
    state: &'a PickerState,
    on_message: impl Fn(PickerMsg) -> Message + Copy + 'a,
    show_values: bool,
    space_s: u16,
    space_m: u16,
) -> Element<'a, Message> {
    let header = widget::text::title1(fl!("picker"));

    let mut select = SearchSelect::new(&state.select, move |msg| {
        on_message(PickerMsg::Select(msg))
    })
    .placeholder(fl!("search-color-placeholder"))
    .width(Length::Fixed(320.0));

    if show_values {
        select = select.option_view(|option, is_marked| {
            let row = widget::row::with_capacity(2)
                .push(widget::text::body(option.label.clone()).width(Length::Fill))
                .push(widget::text::caption(option.value.clone()))
                .align_y(Alignment::Center)
                .spacing(8);

            let container_class = if is_marked {
                cosmic::style::Container::Primary
            } else {
                cosmic::style::Container::default()
            };

            widget::container(row)
                .padding([6, 10])
                .width(Length::Fill)
                .class(container_class)
                .into()
        });
    }

    let last_pick_card = widget::container(
        widget::column::with_capacity(2)
            .push(widget::text::caption(fl!("last-pick")))
            .push(widget::text::title3(
                state
                    .last_pick()
                    .map(str::to_string)
                    .unwrap_or_else(|| "-".to_string()),
            ))
            .spacing(4),
    )
    .padding(space_s)
    .width(Length::Fixed(320.0))
    .class(cosmic::style::Container::Card);

    let content = widget::column::with_capacity(4)
        .push(header)
        .push(select)
        .push(last_pick_card)
        .push(history_section(state, on_message, space_s))
        .spacing(space_m)
        .width(Length::Fill);

    widget::container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Renders the recent picks card with its copy and clear actions.
fn history_section<'a, Message: Clone + 'static>(
    state: &'a PickerState,
    on_message: impl Fn(PickerMsg) -> Message + Copy + 'a,
    space_s: u16,
) -> Element<'a, Message> {
    let mut header = widget::row::with_capacity(3)
        .push(widget::text::title4(fl!("recent-picks")).width(Length::Fill))
        .align_y(Alignment::Center)
        .spacing(space_s);

    if !state.history.is_empty() {
        header = header
            .push(
                widget::button::icon(icon::from_name("edit-copy-symbolic"))
                    .on_press(on_message(PickerMsg::CopyLastPick))
                    .class(cosmic::theme::Button::Standard),
            )
            .push(
                widget::button::icon(icon::from_name("user-trash-symbolic"))
                    .on_press(on_message(PickerMsg::ClearHistory))
                    .class(cosmic::theme::Button::Destructive),
            );
    }

    let body: Element<'a, Message> = if state.history.is_empty() {
        widget::text::caption(fl!("no-picks-hint")).into()
    } else {
        let mut list = widget::column::with_capacity(state.history.len()).spacing(2);
        for value in &state.history {
            list = list.push(widget::text::body(value));
        }
        list.into()
    };

    widget::container(
        widget::column::with_capacity(2)
            .push(header)
            .push(body)
            .spacing(space_s),
    )
    .padding(space_s)
    .width(Length::Fixed(320.0))
    .class(cosmic::style::Container::Card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::search_select::SearchSelectMessage;

    #[test]
    fn test_history_is_bounded_and_most_recent_first() {
        let mut state = PickerState::new(PaletteKind::Basic);

        for i in 0..15 {
            state.record_pick(format!("Color {i}"));
        }

        assert_eq!(state.history.len(), HISTORY_LIMIT);
        assert_eq!(state.last_pick(), Some("Color 14"));
    }

    #[test]
    fn test_set_palette_resets_widget_state() {
        let mut state = PickerState::new(PaletteKind::Basic);
        state.select.apply(SearchSelectMessage::InputPressed);
        state
            .select
            .apply(SearchSelectMessage::SearchChanged("re".into()));

        state.set_palette(PaletteKind::Grays);

        assert!(state.select.search.is_empty());
        assert!(!state.select.open);
        assert_eq!(
            state.select.options.len(),
            PaletteKind::Grays.options().len()
        );
    }
}
