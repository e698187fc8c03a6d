// SPDX-License-Identifier: MPL-2.0

//! Option types for the search select widget.

/// A single selectable entry offered by the dropdown.
///
/// The label is what the user reads and searches against; the value is what
/// the host receives when the entry is chosen. Values are expected to be
/// unique within one catalog, but the widget does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Display label for the entry.
    pub label: String,
    /// Value handed to the host on selection.
    pub value: String,
}

impl SelectOption {
    /// Creates a new option from a label and a value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Creates an option whose value doubles as its label.
    pub fn labeled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }

    /// Returns true if this option's label contains `query`,
    /// compared case-insensitively. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        self.label.to_lowercase().contains(&query.to_lowercase())
    }
}
