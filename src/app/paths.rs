// SPDX-License-Identifier: MPL-2.0
//! Resolution of the config and data directories.
//!
//! Resolution order, highest priority first:
//! 1. CLI override (`--config-dir` / `--data-dir`), registered once at boot
//! 2. Environment variable (`ICED_HERALD_CONFIG_DIR` / `ICED_HERALD_DATA_DIR`)
//! 3. Platform default from `dirs`, suffixed with the app name

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedHerald";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "ICED_HERALD_DATA_DIR";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_HERALD_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers CLI directory overrides. Call once at startup, before any
/// directory lookup; later calls are ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let _ = CLI_DATA_DIR.set(data_dir.map(PathBuf::from));
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn env_dir(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

/// Returns the data directory (worker manifest, diagnostics log).
#[must_use]
pub fn get_app_data_dir() -> Option<PathBuf> {
    if let Some(Some(path)) = CLI_DATA_DIR.get() {
        return Some(path.clone());
    }
    if let Some(path) = env_dir(ENV_DATA_DIR) {
        return Some(path);
    }
    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the config directory (`settings.toml`).
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    if let Some(Some(path)) = CLI_CONFIG_DIR.get() {
        return Some(path.clone());
    }
    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Serializes every test in this binary that reads or mutates the
/// directory override environment variables. The variables are process
/// globals, so one lock must cover all test modules.
#[cfg(test)]
pub(crate) fn env_override_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    &LOCK
}
