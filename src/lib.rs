pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

/// File name of the tool-authored sidecar metadata file written into an
/// add-on folder at install time. Shared between the scanner and the
/// installer surface that creates the file.
pub const SIDECAR_FILE_NAME: &str = ".addonscope.json";

pub use services::scanner::{
    scan_catalog, scan_self_describing, ScanOptions, DEFAULT_SCAN_CONCURRENCY,
};
pub use types::errors::{ScanError, ScanResult};
pub use types::scan::{
    CatalogScanResult, FileFingerprint, FolderFingerprint, ScanOutcome, SelfScanResult,
    SidecarMetadata, TocDescriptor,
};
