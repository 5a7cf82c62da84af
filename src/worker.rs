// SPDX-License-Identifier: MPL-2.0
//! Background worker registration.
//!
//! At startup the shell tries to register one background housekeeping
//! worker, described by a manifest at a fixed path under the data
//! directory. The worker periodically flushes the diagnostics buffer to
//! `diagnostics.log`. Registration is best-effort: both success and failure
//! are only recorded in diagnostics, there is no retry and no user-visible
//! effect either way.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tokio::time;

use crate::diagnostics::DiagnosticsCollector;
use crate::error::{Error, Result};

/// Fixed manifest path, relative to the data directory.
pub const WORKER_MANIFEST: &str = "workers/service-worker.toml";

/// Diagnostics log file, relative to the data directory.
pub const LOG_FILE: &str = "diagnostics.log";

/// Flush interval used when the manifest does not specify one.
pub const DEFAULT_FLUSH_INTERVAL_SECS: u64 = 60;

/// Returns whether this runtime can host background workers.
#[must_use]
pub fn supports_workers() -> bool {
    // The housekeeping loop needs a threaded async runtime.
    cfg!(not(target_arch = "wasm32"))
}

/// On-disk worker description.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WorkerManifest {
    /// Seconds between diagnostics flushes.
    #[serde(default)]
    pub flush_interval_secs: Option<u64>,
}

impl WorkerManifest {
    /// Effective flush interval.
    #[must_use]
    pub fn flush_interval(&self) -> Duration {
        Duration::from_secs(
            self.flush_interval_secs
                .unwrap_or(DEFAULT_FLUSH_INTERVAL_SECS)
                .max(1),
        )
    }
}

/// Proof of a successful registration, for logging.
#[derive(Debug, Clone)]
pub struct Registration {
    pub manifest_path: PathBuf,
    pub flush_interval: Duration,
}

fn read_manifest(path: &Path) -> Result<WorkerManifest> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| Error::Worker(format!("manifest {}: {err}", path.display())))?;
    toml::from_str(&content)
        .map_err(|err| Error::Worker(format!("manifest {}: {err}", path.display())))
}

/// Registers the background worker for the given data directory.
///
/// Reads and validates the manifest at [`WORKER_MANIFEST`], then spawns the
/// housekeeping loop. Fails if the manifest is missing or malformed; the
/// caller logs the outcome and moves on.
pub async fn register(
    data_dir: PathBuf,
    diagnostics: DiagnosticsCollector,
) -> Result<Registration> {
    let manifest_path = data_dir.join(WORKER_MANIFEST);
    let manifest = read_manifest(&manifest_path)?;
    let flush_interval = manifest.flush_interval();

    let log_path = data_dir.join(LOG_FILE);
    tokio::spawn(run_housekeeping(diagnostics, log_path, flush_interval));

    Ok(Registration {
        manifest_path,
        flush_interval,
    })
}

/// Periodically appends buffered diagnostics to the log file.
/// Write failures are swallowed; the buffer keeps collecting either way.
async fn run_housekeeping(
    diagnostics: DiagnosticsCollector,
    log_path: PathBuf,
    interval: Duration,
) {
    let mut ticker = time::interval(interval);
    // The first tick fires immediately; skip it so the loop waits a full
    // interval before the first flush.
    ticker.tick().await;
    loop {
        ticker.tick().await;
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) {
            let _ = diagnostics.flush_to(&mut file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn workers_are_supported_on_the_host() {
        assert!(supports_workers());
    }

    #[test]
    fn manifest_interval_defaults_and_clamps() {
        let manifest = WorkerManifest {
            flush_interval_secs: None,
        };
        assert_eq!(
            manifest.flush_interval(),
            Duration::from_secs(DEFAULT_FLUSH_INTERVAL_SECS)
        );

        let zero = WorkerManifest {
            flush_interval_secs: Some(0),
        };
        assert_eq!(zero.flush_interval(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn register_fails_without_a_manifest() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let result = register(dir.path().to_path_buf(), DiagnosticsCollector::new()).await;

        match result {
            Err(Error::Worker(message)) => assert!(message.contains("service-worker.toml")),
            other => panic!("expected worker error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn register_fails_on_malformed_manifest() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let manifest_path = dir.path().join(WORKER_MANIFEST);
        std::fs::create_dir_all(manifest_path.parent().unwrap()).expect("mkdir failed");
        std::fs::write(&manifest_path, "flush_interval_secs = \"soon\"").expect("write failed");

        let result = register(dir.path().to_path_buf(), DiagnosticsCollector::new()).await;
        assert!(matches!(result, Err(Error::Worker(_))));
    }

    #[tokio::test]
    async fn register_succeeds_with_a_valid_manifest() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let manifest_path = dir.path().join(WORKER_MANIFEST);
        std::fs::create_dir_all(manifest_path.parent().unwrap()).expect("mkdir failed");
        std::fs::write(&manifest_path, "flush_interval_secs = 5").expect("write failed");

        let registration = register(dir.path().to_path_buf(), DiagnosticsCollector::new())
            .await
            .expect("registration failed");
        assert_eq!(registration.flush_interval, Duration::from_secs(5));
        assert_eq!(registration.manifest_path, manifest_path);
    }
}
