// SPDX-License-Identifier: MPL-2.0

use crate::palette::PaletteKind;
use cosmic::cosmic_config::{self, cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Palette the picker draws its options from
    pub palette: PaletteKind,
    /// Whether option rows also show the value next to the label
    pub show_values: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: PaletteKind::Basic,
            show_values: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.palette, PaletteKind::Basic);
        assert!(!config.show_values);
    }
}
