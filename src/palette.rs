// SPDX-License-Identifier: MPL-2.0

//! Built-in color catalogs offered to the picker.

use crate::widgets::search_select::SelectOption;
use serde::{Deserialize, Serialize};

/// A built-in palette the picker can draw its options from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaletteKind {
    /// A handful of primary and secondary colors.
    #[default]
    Basic,
    /// A broader set of common named colors.
    Extended,
    /// Achromatic shades only.
    Grays,
}

impl PaletteKind {
    /// Every palette, in the order they are offered in settings.
    pub fn all() -> &'static [PaletteKind] {
        &[PaletteKind::Basic, PaletteKind::Extended, PaletteKind::Grays]
    }

    /// Palette names in the same order as [`PaletteKind::all`], for
    /// selection widgets.
    pub fn labels() -> &'static [&'static str] {
        &["Basic", "Extended", "Grays"]
    }

    /// Human-readable palette name.
    pub fn label(&self) -> &'static str {
        match self {
            PaletteKind::Basic => "Basic",
            PaletteKind::Extended => "Extended",
            PaletteKind::Grays => "Grays",
        }
    }

    /// Color names carried by this palette.
    fn color_names(&self) -> &'static [&'static str] {
        match self {
            PaletteKind::Basic => &["Red", "Blue", "Green", "Yellow", "Purple"],
            PaletteKind::Extended => &[
                "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Brown", "Cyan",
                "Magenta", "Teal", "Lime", "Indigo", "Violet", "Maroon", "Navy", "Olive",
                "Turquoise", "Salmon", "Gold",
            ],
            PaletteKind::Grays => &[
                "Black", "Charcoal", "Slate", "Gray", "Silver", "Gainsboro", "White",
            ],
        }
    }

    /// Builds the option catalog for this palette. Each color's name doubles
    /// as its value.
    pub fn options(&self) -> Vec<SelectOption> {
        self.color_names()
            .iter()
            .map(|name| SelectOption::labeled(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_basic_palette_contents() {
        let options = PaletteKind::Basic.options();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Red", "Blue", "Green", "Yellow", "Purple"]);
    }

    #[test]
    fn test_every_palette_is_nonempty_with_unique_values() {
        for palette in PaletteKind::all() {
            let options = palette.options();
            assert!(!options.is_empty(), "{} palette is empty", palette.label());

            let values: HashSet<&str> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(
                values.len(),
                options.len(),
                "{} palette has duplicate values",
                palette.label()
            );
        }
    }

    #[test]
    fn test_labels_track_palette_order() {
        let labels: Vec<&str> = PaletteKind::all().iter().map(|p| p.label()).collect();
        assert_eq!(labels, PaletteKind::labels());
    }

    #[test]
    fn test_value_doubles_as_label() {
        for option in PaletteKind::Extended.options() {
            assert_eq!(option.label, option.value);
        }
    }
}
