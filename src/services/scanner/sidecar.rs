//! Self-describing folder scanning via the tool-authored sidecar file.
//!
//! Installations performed by this tooling leave a fixed-named JSON
//! sidecar at the folder root. Most third-party folders have none;
//! that is an expected "nothing here", not a failure.

use crate::services::scanner::fs_access::FsAccess;
use crate::types::errors::{ScanError, ScanResult};
use crate::types::scan::{SelfScanResult, SidecarMetadata};
use crate::SIDECAR_FILE_NAME;
use std::io;
use std::path::Path;

/// Read the sidecar metadata of one folder.
///
/// `Ok(None)` for a folder without a sidecar; `Parse` only when the
/// sidecar exists but does not match the schema.
pub fn scan_folder(folder: &Path, fs: &dyn FsAccess) -> ScanResult<Option<SelfScanResult>> {
    if !fs.folder_exists(folder) {
        return Err(ScanError::NotFound(folder.to_path_buf()));
    }

    let bytes = match fs.read(folder, SIDECAR_FILE_NAME) {
        Ok(bytes) => bytes,
        Err(ScanError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            return Ok(None);
        }
        Err(error) => return Err(error),
    };

    let metadata: SidecarMetadata = serde_json::from_slice(&bytes)
        .map_err(|error| ScanError::parse(folder.join(SIDECAR_FILE_NAME), error.to_string()))?;

    Ok(Some(SelfScanResult {
        path: folder.to_string_lossy().to_string(),
        metadata,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scanner::fs_access::memory::MemoryFs;

    const FOLDER: &str = "/addons/QuestTracker";

    #[test]
    fn test_missing_sidecar_is_none() {
        let mut fs = MemoryFs::new();
        fs.add_folder(FOLDER);

        let result = scan_folder(Path::new(FOLDER), &fs).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_folder_is_not_found() {
        let fs = MemoryFs::new();
        let err = scan_folder(Path::new(FOLDER), &fs).unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }

    #[test]
    fn test_valid_sidecar_parses() {
        let mut fs = MemoryFs::new();
        fs.add_file(
            FOLDER,
            SIDECAR_FILE_NAME,
            br#"{
                "schemaVersion": 1,
                "name": "Quest Tracker",
                "version": "2.4.1",
                "provider": "catalog",
                "externalId": "4711",
                "installedAt": "2025-11-03T10:15:30Z"
            }"#,
        );

        let result = scan_folder(Path::new(FOLDER), &fs)
            .unwrap()
            .expect("sidecar should produce a result");
        assert_eq!(result.metadata.schema_version, 1);
        assert_eq!(result.metadata.name, "Quest Tracker");
        assert_eq!(result.metadata.version, "2.4.1");
        assert_eq!(result.metadata.provider.as_deref(), Some("catalog"));
        assert_eq!(result.metadata.external_id.as_deref(), Some("4711"));
        assert!(result.metadata.installed_at.is_some());
        assert!(result.metadata.author.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut fs = MemoryFs::new();
        fs.add_file(
            FOLDER,
            SIDECAR_FILE_NAME,
            br#"{"schemaVersion": 3, "name": "X", "version": "1.0", "futureField": true}"#,
        );

        let result = scan_folder(Path::new(FOLDER), &fs).unwrap();
        assert!(result.is_some());
    }

    #[test]
    fn test_malformed_sidecar_is_parse_error() {
        let mut fs = MemoryFs::new();
        fs.add_file(FOLDER, SIDECAR_FILE_NAME, b"{ not json");

        let err = scan_folder(Path::new(FOLDER), &fs).unwrap_err();
        assert!(matches!(err, ScanError::Parse { .. }));
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let mut fs = MemoryFs::new();
        fs.add_file(FOLDER, SIDECAR_FILE_NAME, br#"{"schemaVersion": 1}"#);

        let err = scan_folder(Path::new(FOLDER), &fs).unwrap_err();
        assert!(matches!(err, ScanError::Parse { .. }));
    }

    #[test]
    fn test_unreadable_sidecar_is_io_error() {
        let mut fs = MemoryFs::new();
        fs.add_unreadable_file(FOLDER, SIDECAR_FILE_NAME);

        let err = scan_folder(Path::new(FOLDER), &fs).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }
}
