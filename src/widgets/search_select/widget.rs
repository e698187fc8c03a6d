// SPDX-License-Identifier: MPL-2.0

//! Search select widget builder and rendering.

use super::item::SelectOption;
use super::message::SearchSelectMessage;
use super::state::{ListContents, SearchSelectState};
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};
use std::rc::Rc;

/// Builder for the search select widget.
///
/// # Type Parameters
///
/// - `Message`: The parent's message type
///
/// # Example
///
/// ```ignore
/// SearchSelect::new(&self.select_state, Message::Select)
///     .placeholder(fl!("search-placeholder"))
///     .width(Length::Fixed(320.0))
///     .into()
/// ```
pub struct SearchSelect<'a, Message>
where
    Message: Clone + 'static,
{
    state: &'a SearchSelectState,
    on_message: Rc<dyn Fn(SearchSelectMessage) -> Message + 'a>,
    width: Length,
    list_height: Length,
    placeholder: String,
    spacing: u16,
    option_view: Option<Box<dyn Fn(&SelectOption, bool) -> Element<'a, Message> + 'a>>,
    empty_view: Option<Box<dyn Fn() -> Element<'a, Message> + 'a>>,
}

impl<'a, Message> SearchSelect<'a, Message>
where
    Message: Clone + 'static,
{
    /// Creates a new search select widget.
    ///
    /// # Arguments
    ///
    /// - `state`: The widget state (owned by parent)
    /// - `on_message`: Function to wrap [`SearchSelectMessage`] into the
    ///   parent's `Message` type
    pub fn new(
        state: &'a SearchSelectState,
        on_message: impl Fn(SearchSelectMessage) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            on_message: Rc::new(on_message),
            width: Length::Fixed(320.0),
            list_height: Length::Fixed(240.0),
            placeholder: String::from("Search..."),
            spacing: 4,
            option_view: None,
            empty_view: None,
        }
    }

    /// Sets the widget width strategy.
    ///
    /// Default is `Length::Fixed(320.0)`.
    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    /// Sets the height of the open option list.
    ///
    /// Default is `Length::Fixed(240.0)`; the list scrolls beyond it.
    pub fn list_height(mut self, height: Length) -> Self {
        self.list_height = height;
        self
    }

    /// Sets the placeholder text of the search input.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the spacing between the input row and the option list.
    ///
    /// Default is 4.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets a custom option row renderer.
    ///
    /// The function receives the option and whether it is the marked row,
    /// and should return an `Element` to display.
    pub fn option_view<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&SelectOption, bool) -> Element<'a, Message> + 'a,
    {
        self.option_view = Some(Box::new(renderer));
        self
    }

    /// Sets a custom view for the no-matches row.
    pub fn empty_view<F>(mut self, renderer: F) -> Self
    where
        F: Fn() -> Element<'a, Message> + 'a,
    {
        self.empty_view = Some(Box::new(renderer));
        self
    }

    /// Renders a single option row using the default renderer.
    fn default_option_view(option: &SelectOption, is_marked: bool) -> Element<'a, Message> {
        // Clone the label to own it
        let label = option.label.clone();

        let container_class = if is_marked {
            cosmic::style::Container::Primary
        } else {
            cosmic::style::Container::default()
        };

        widget::container(widget::text::body(label).width(Length::Fill))
            .padding([6, 10])
            .width(Length::Fill)
            .class(container_class)
            .into()
    }

    /// Renders the default no-matches row.
    fn default_empty_view() -> Element<'a, Message> {
        widget::container(widget::text::caption("No results found"))
            .padding([6, 10])
            .width(Length::Fill)
            .into()
    }

    /// Renders a single option row.
    fn render_option(&self, option: &SelectOption, is_marked: bool) -> Element<'a, Message> {
        if let Some(ref renderer) = self.option_view {
            renderer(option, is_marked)
        } else {
            Self::default_option_view(option, is_marked)
        }
    }

    /// Renders the no-matches row.
    fn render_empty(&self) -> Element<'a, Message> {
        if let Some(ref renderer) = self.empty_view {
            renderer()
        } else {
            Self::default_empty_view()
        }
    }

    /// Renders the search input row: the input itself, the clear button
    /// while there is text to clear, and the list toggle.
    fn render_input(&self) -> Element<'a, Message> {
        let on_message = Rc::clone(&self.on_message);
        let pressed_msg = (self.on_message)(SearchSelectMessage::InputPressed);
        let clear_msg = (self.on_message)(SearchSelectMessage::Clear);

        let input = widget::text_input(self.placeholder.clone(), &self.state.search)
            .on_input(move |text| on_message(SearchSelectMessage::SearchChanged(text)))
            .width(Length::Fill);

        let clear_button = if self.state.search.is_empty() {
            None
        } else {
            Some(
                widget::button::icon(icon::from_name("edit-clear-symbolic"))
                    .on_press(clear_msg)
                    .class(cosmic::theme::Button::Standard),
            )
        };

        widget::row::with_capacity(3)
            .push(widget::mouse_area(input).on_press(pressed_msg.clone()))
            .push_maybe(clear_button)
            .push(
                widget::button::icon(icon::from_name("pan-down-symbolic"))
                    .on_press(pressed_msg)
                    .class(cosmic::theme::Button::Standard),
            )
            .spacing(self.spacing)
            .align_y(Alignment::Center)
            .into()
    }

    /// Renders interactive rows for the given options.
    fn render_rows(&self, options: Vec<&SelectOption>) -> Element<'a, Message> {
        let on_message = &self.on_message;

        let mut column = widget::column::with_capacity(options.len()).spacing(2);

        for option in options {
            let is_marked = self.state.is_marked(option);
            let select_msg = on_message(SearchSelectMessage::OptionSelected(option.clone()));

            column = column
                .push(widget::mouse_area(self.render_option(option, is_marked)).on_press(select_msg));
        }

        widget::scrollable(column).height(self.list_height).into()
    }

    /// Renders the option list for the current state.
    fn render_list(&self) -> Element<'a, Message> {
        let rows: Element<'a, Message> = match self.state.visible() {
            ListContents::NoMatches => self.render_empty(),
            ListContents::Filtered(options) => self.render_rows(options),
            ListContents::Browse(options) => self.render_rows(options.iter().collect()),
        };

        widget::container(rows)
            .padding(4)
            .width(Length::Fill)
            .class(cosmic::style::Container::Card)
            .into()
    }

    /// Builds the widget and returns it as an Element.
    pub fn build(self) -> Element<'a, Message> {
        // Presses anywhere inside the widget's region that reach no
        // interactive element are claimed here, so only presses outside the
        // region are left for the dismiss listener.
        let area_msg = (self.on_message)(SearchSelectMessage::AreaPressed);

        let mut content = widget::column::with_capacity(2)
            .spacing(self.spacing)
            .width(self.width);

        content = content.push(self.render_input());

        if self.state.open {
            content = content.push(self.render_list());
        }

        widget::mouse_area(content).on_press(area_msg).into()
    }
}

impl<'a, Message> From<SearchSelect<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'static,
{
    fn from(select: SearchSelect<'a, Message>) -> Self {
        select.build()
    }
}
