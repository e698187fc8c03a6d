// SPDX-License-Identifier: MPL-2.0

//! Custom widgets for the Swatch application.

pub mod search_select;

pub use search_select::{
    ListContents, SearchSelect, SearchSelectMessage, SearchSelectState, SelectOption,
};
