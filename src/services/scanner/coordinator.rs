//! Batch scan driver with a bounded concurrency ceiling.
//!
//! Folder scans are blocking filesystem work (directory walk plus file
//! reads), so each one runs on the blocking pool while an ordered
//! buffered stream keeps at most `concurrency` folders in flight. Every
//! requested folder yields exactly one outcome, in request order; a
//! failed folder is captured in its own slot and never disturbs its
//! siblings.

use crate::services::scanner::fs_access::LocalFs;
use crate::services::scanner::{catalog, sidecar};
use crate::types::errors::{ScanError, ScanResult};
use crate::types::scan::{CatalogScanResult, ScanOutcome, SelfScanResult};
use futures_util::stream::{self, StreamExt};
use std::io;
use std::path::PathBuf;

/// How many folders are walked at once. Scans are I/O bound, so the
/// ceiling stays small and independent of batch size.
pub const DEFAULT_SCAN_CONCURRENCY: usize = 2;

/// Batch scan tunables.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Concurrency ceiling for per-folder scans. Values below 1 are
    /// treated as 1.
    pub concurrency: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_SCAN_CONCURRENCY,
        }
    }
}

/// Fingerprint-scan every folder in `paths`.
pub async fn scan_catalog(
    paths: Vec<PathBuf>,
    options: ScanOptions,
) -> Vec<ScanOutcome<CatalogScanResult>> {
    run_scans(paths, options, "catalog", |folder| {
        catalog::scan_folder(&folder, &LocalFs)
    })
    .await
}

/// Sidecar-scan every folder in `paths`. Folders without a sidecar file
/// resolve to `Ok(None)`.
pub async fn scan_self_describing(
    paths: Vec<PathBuf>,
    options: ScanOptions,
) -> Vec<ScanOutcome<Option<SelfScanResult>>> {
    run_scans(paths, options, "self-describing", |folder| {
        sidecar::scan_folder(&folder, &LocalFs)
    })
    .await
}

async fn run_scans<T, F>(
    paths: Vec<PathBuf>,
    options: ScanOptions,
    label: &str,
    scan: F,
) -> Vec<ScanOutcome<T>>
where
    T: Send + 'static,
    F: Fn(PathBuf) -> ScanResult<T> + Clone + Send + 'static,
{
    let total = paths.len();
    let concurrency = options.concurrency.max(1);

    let outcomes: Vec<ScanOutcome<T>> = stream::iter(paths.into_iter().map(|folder| {
        let scan = scan.clone();
        async move {
            let display = folder.to_string_lossy().to_string();
            let folder_for_error = folder.clone();
            let result = match tokio::task::spawn_blocking(move || scan(folder)).await {
                Ok(result) => result,
                Err(join_error) => Err(ScanError::io(
                    folder_for_error,
                    io::Error::new(
                        io::ErrorKind::Other,
                        format!("Scan worker failed: {join_error}"),
                    ),
                )),
            };
            ScanOutcome {
                path: display,
                result,
            }
        }
    }))
    .buffered(concurrency)
    .collect()
    .await;

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    log::info!("{label} scan finished: {total} folders, {failed} failed");

    outcomes
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod coordinator_tests;
