// SPDX-License-Identifier: MPL-2.0

//! Searchable dropdown selector widget.
//!
//! A text input that filters a fixed catalog of labeled options as the user
//! types, shows a toggleable list of matches, highlights the active row, and
//! hands the chosen value back to the host. After a choice is committed the
//! reopened list shows the full catalog with the chosen entry marked, so the
//! user can re-browse without retyping; clearing the input (the clear button
//! or any deleting edit) drops the committed choice and returns to filtering.
//!
//! # Example
//!
//! ```ignore
//! use crate::widgets::search_select::{SearchSelect, SearchSelectMessage, SearchSelectState, SelectOption};
//!
//! // In your app state
//! struct AppModel {
//!     select_state: SearchSelectState,
//! }
//!
//! // In your message enum
//! enum Message {
//!     Select(SearchSelectMessage),
//! }
//!
//! // In your view function
//! fn view(&self) -> Element<'_, Message> {
//!     SearchSelect::new(&self.select_state, Message::Select)
//!         .placeholder("Search color...")
//!         .width(Length::Fixed(320.0))
//!         .into()
//! }
//!
//! // In your update function
//! fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Select(select_msg) => {
//!             if let Some(value) = self.select_state.apply(select_msg) {
//!                 // One committed selection per confirmed choice.
//!             }
//!         }
//!     }
//!     Task::none()
//! }
//! ```

mod item;
mod message;
mod state;
mod widget;

pub use item::SelectOption;
pub use message::SearchSelectMessage;
pub use state::{ListContents, SearchSelectState};
pub use widget::SearchSelect;
