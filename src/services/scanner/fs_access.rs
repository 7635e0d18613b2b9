//! Narrow filesystem seam consumed by the folder scanners.
//!
//! The scanners need exactly three capabilities: existence checks,
//! recursive file enumeration, and whole-file reads. Keeping the seam
//! this narrow lets tests substitute a deterministic in-memory
//! filesystem.

use crate::types::errors::{ScanError, ScanResult};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// One file found under a scanned folder.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the scanned folder root, `/`-separated on every
    /// platform.
    pub relative_path: String,
    pub size_bytes: u64,
}

pub trait FsAccess: Send + Sync {
    fn folder_exists(&self, folder: &Path) -> bool;

    /// List all files under `folder` recursively. Directories are not
    /// reported. Enumeration order is unspecified; callers that need a
    /// stable order sort themselves.
    fn list_files(&self, folder: &Path) -> ScanResult<Vec<FileEntry>>;

    /// Read one file addressed relative to `folder`. A missing file
    /// surfaces as `ScanError::Io` with a `NotFound` source kind.
    fn read(&self, folder: &Path, relative_path: &str) -> ScanResult<Vec<u8>>;
}

/// Production implementation over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FsAccess for LocalFs {
    fn folder_exists(&self, folder: &Path) -> bool {
        folder.is_dir()
    }

    fn list_files(&self, folder: &Path) -> ScanResult<Vec<FileEntry>> {
        let mut files = Vec::new();

        // follow_links disabled: a symlinked tree must not leak foreign
        // content into a folder's identity.
        for entry in WalkDir::new(folder).follow_links(false) {
            let entry = entry.map_err(|e| walk_error(folder, e))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry
                .path()
                .strip_prefix(folder)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");
            let size_bytes = entry.metadata().map_err(|e| walk_error(entry.path(), e))?.len();

            files.push(FileEntry {
                relative_path,
                size_bytes,
            });
        }

        Ok(files)
    }

    fn read(&self, folder: &Path, relative_path: &str) -> ScanResult<Vec<u8>> {
        let path = folder.join(relative_path);
        fs::read(&path).map_err(|source| ScanError::io(path, source))
    }
}

fn walk_error(fallback: &Path, error: walkdir::Error) -> ScanError {
    let path = error.path().unwrap_or(fallback).to_path_buf();
    let source = error
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop"));
    ScanError::Io { path, source }
}
