// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::ui::theming::ThemeMode;

/// Theme mode used when the config does not specify one.
pub const DEFAULT_THEME_MODE: ThemeMode = ThemeMode::System;

/// Whether the background worker is registered at startup by default.
pub const DEFAULT_WORKER_ENABLED: bool = true;

pub(super) fn default_theme_mode() -> ThemeMode {
    DEFAULT_THEME_MODE
}
