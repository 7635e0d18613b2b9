//! Catalog-compatible folder scanning.
//!
//! One folder in, one aggregated result out: every content file is
//! normalized and hashed, the sorted hash set becomes the folder
//! fingerprint, and the optional descriptor rides along as metadata.

use crate::services::scanner::fingerprint;
use crate::services::scanner::fs_access::FsAccess;
use crate::services::scanner::normalizer;
use crate::services::scanner::toc;
use crate::types::errors::{ScanError, ScanResult};
use crate::types::scan::{CatalogScanResult, FileFingerprint, FolderFingerprint};
use std::path::Path;

/// Extensions contributing to a folder's identity, compared against
/// lowercased file extensions. Images, fonts, and documentation never
/// do; neither does the descriptor itself.
const CONTENT_EXTENSIONS: &[&str] = &["lua", "xml"];

/// Directory names marking localization-only content.
const LOCALIZATION_DIRS: &[&str] = &["locale", "locales", "localization"];

/// Fingerprint one add-on folder.
///
/// An empty folder is a valid scan (the fingerprint of the empty set);
/// a missing folder is `NotFound`; an unreadable content file fails the
/// whole folder, because silently skipping it would fingerprint a
/// folder we did not actually see.
pub fn scan_folder(folder: &Path, fs: &dyn FsAccess) -> ScanResult<CatalogScanResult> {
    if !fs.folder_exists(folder) {
        return Err(ScanError::NotFound(folder.to_path_buf()));
    }

    let files = fs.list_files(folder)?;

    let mut file_fingerprints = Vec::new();
    let mut total_size_bytes = 0u64;

    for entry in &files {
        let Some(extension) = lowercased_extension(&entry.relative_path) else {
            continue;
        };
        if !CONTENT_EXTENSIONS.contains(&extension.as_str()) {
            continue;
        }

        let bytes = fs.read(folder, &entry.relative_path)?;
        let normalized = normalizer::normalize(&bytes, normalizer::kind_for_extension(&extension));

        file_fingerprints.push(FileFingerprint {
            relative_path: entry.relative_path.clone(),
            hash: fingerprint::hash_buffer(&normalized),
        });
        total_size_bytes += entry.size_bytes;
    }

    let fingerprints = aggregate_fingerprints(&file_fingerprints);
    let toc = toc::read_descriptor(folder, &files, fs)?;

    let file_count = file_fingerprints.len() as u64;
    file_fingerprints.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(CatalogScanResult {
        path: folder.to_string_lossy().to_string(),
        fingerprints,
        toc,
        file_fingerprints,
        file_count,
        total_size_bytes,
    })
}

/// Primary fingerprint over all content files plus the fixed alternate
/// excluding localization-only files. The catalog has historically
/// computed either, so both must be reproducible from one scan.
fn aggregate_fingerprints(file_fingerprints: &[FileFingerprint]) -> FolderFingerprint {
    let mut all: Vec<u32> = file_fingerprints.iter().map(|f| f.hash).collect();
    all.sort_unstable();

    let mut without_localization: Vec<u32> = file_fingerprints
        .iter()
        .filter(|f| !is_localization_file(&f.relative_path))
        .map(|f| f.hash)
        .collect();
    without_localization.sort_unstable();

    FolderFingerprint {
        fingerprint: fingerprint::hash_folder(&all),
        no_loc_fingerprint: fingerprint::hash_folder(&without_localization),
    }
}

fn lowercased_extension(relative_path: &str) -> Option<String> {
    Path::new(relative_path)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
}

/// Localization-only files: anything under a locale directory, or whose
/// file stem starts with `localization`. Case-insensitive.
fn is_localization_file(relative_path: &str) -> bool {
    let mut segments = relative_path.split('/').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            let stem = Path::new(segment)
                .file_stem()
                .map(|s| s.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            return stem.starts_with("localization");
        }
        if LOCALIZATION_DIRS.contains(&segment.to_lowercase().as_str()) {
            return true;
        }
    }
    false
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod catalog_tests;
