//! Scan result contracts shared with the shell boundary.
//!
//! Everything here is serialized across the process boundary, so fields
//! follow the camelCase convention and paths are carried as strings.

use crate::types::errors::ScanResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ─── Fingerprints ──────────────────────────────────────────────────

/// Identity of one content file: its folder-relative path (forward
/// slashes on every platform) and the catalog hash of its normalized
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFingerprint {
    pub relative_path: String,
    pub hash: u32,
}

/// Aggregate identity of a folder.
///
/// The catalog service has historically fingerprinted add-ons both with
/// and without localization files, so both values are produced from one
/// scan and matched remotely against whichever the catalog stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderFingerprint {
    /// Hash over all content files.
    pub fingerprint: u32,
    /// Hash over content files excluding localization-only files.
    pub no_loc_fingerprint: u32,
}

// ─── Descriptor metadata ───────────────────────────────────────────

/// Parsed add-on descriptor (`<Folder>.toc`).
///
/// Every directive is optional in the wild; an empty descriptor still
/// counts as present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocDescriptor {
    pub title: Option<String>,
    pub version: Option<String>,
    /// Game-version tokens from the `Interface` directive (may be
    /// comma-separated in a single directive).
    pub interface_versions: Vec<String>,
    pub author: Option<String>,
    pub notes: Option<String>,
    /// Directives outside the known set, e.g. `X-Website`.
    pub extra: BTreeMap<String, String>,
    /// Declared sub-file paths, backslashes normalized to `/`.
    pub declared_files: Vec<String>,
}

// ─── Scan results ──────────────────────────────────────────────────

/// Result of fingerprint-scanning one add-on folder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogScanResult {
    pub path: String,
    pub fingerprints: FolderFingerprint,
    pub toc: Option<TocDescriptor>,
    /// Per-file fingerprints used for the folder aggregate, ordered by
    /// relative path.
    pub file_fingerprints: Vec<FileFingerprint>,
    pub file_count: u64,
    pub total_size_bytes: u64,
}

/// Tool-authored sidecar metadata recorded at install time.
///
/// `schema_version` is additive: a newer writer only adds optional
/// fields, so older readers deserialize newer files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidecarMetadata {
    pub schema_version: u32,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub game_version: Option<String>,
    #[serde(default)]
    pub installed_at: Option<DateTime<Utc>>,
}

/// Result of sidecar-scanning one add-on folder that carried a sidecar
/// file. Folders without one produce no result at all.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfScanResult {
    pub path: String,
    pub metadata: SidecarMetadata,
}

/// One slot of a batch scan: the requested folder and what became of it.
/// A batch always yields exactly one outcome per requested folder, in
/// request order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutcome<T> {
    pub path: String,
    pub result: ScanResult<T>,
}
