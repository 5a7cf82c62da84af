// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection with optional system detection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Cycles Light -> Dark -> Light. System resolves to the opposite of
    /// the detected theme so the first toggle is always visible.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Parses a mode keyword from the CLI or config. Unknown keywords fall
    /// back to System.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_mode_is_not_dark() {
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn dark_mode_is_dark() {
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn toggled_flips_explicit_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn unknown_keyword_falls_back_to_system() {
        assert_eq!(ThemeMode::from_keyword("solarized"), ThemeMode::System);
        assert_eq!(ThemeMode::from_keyword("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_keyword("dark"), ThemeMode::Dark);
    }
}
