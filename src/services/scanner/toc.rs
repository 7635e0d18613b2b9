//! Add-on descriptor (`.toc`) location and parsing.
//!
//! The descriptor is a line-oriented manifest: `## Key: Value`
//! directives, `#` comments, and declared sub-file paths. It is
//! optional everywhere; a folder without one simply scans degraded.

use crate::services::scanner::fs_access::{FileEntry, FsAccess};
use crate::types::errors::ScanResult;
use crate::types::scan::TocDescriptor;
use std::path::Path;

/// Descriptor extension, matched case-insensitively.
const TOC_EXTENSION: &str = "toc";

/// Game client locale tokens, in probe order. A locale-suffixed
/// descriptor is honored only when the base descriptor is missing.
const LOCALE_TOKENS: &[&str] = &[
    "enUS", "enGB", "frFR", "deDE", "esES", "esMX", "itIT", "ptBR", "ruRU", "koKR", "zhCN", "zhTW",
];

/// Find and parse the folder's descriptor. `files` is the folder's
/// recursive listing; only root-level entries are considered. `None`
/// means no descriptor exists, never an error. Errors are reserved for
/// a descriptor that exists but cannot be read.
pub fn read_descriptor(
    folder: &Path,
    files: &[FileEntry],
    fs: &dyn FsAccess,
) -> ScanResult<Option<TocDescriptor>> {
    let Some(folder_name) = folder.file_name().map(|n| n.to_string_lossy().to_string()) else {
        return Ok(None);
    };

    let root_files: Vec<&str> = files
        .iter()
        .map(|f| f.relative_path.as_str())
        .filter(|p| !p.contains('/'))
        .collect();

    let Some(descriptor_name) = find_descriptor_file(&folder_name, &root_files) else {
        return Ok(None);
    };

    let bytes = fs.read(folder, descriptor_name)?;
    // Lossy decoding with BOM handling: descriptors in the wild carry
    // BOMs and the occasional mis-encoded byte.
    let (text, _, _) = encoding_rs::UTF_8.decode(&bytes);
    Ok(Some(parse_descriptor(&text)))
}

/// Pick the descriptor among the folder's root files. The base
/// `<Folder>.toc` wins; otherwise locale variants with `-` and `_`
/// separators are probed in `LOCALE_TOKENS` order. All name comparisons
/// are case-insensitive.
fn find_descriptor_file<'a>(folder_name: &str, root_files: &[&'a str]) -> Option<&'a str> {
    let find_stem = |stem: &str| -> Option<&'a str> {
        root_files.iter().copied().find(|file| {
            let path = Path::new(file);
            let is_toc = path
                .extension()
                .map(|e| e.to_string_lossy().eq_ignore_ascii_case(TOC_EXTENSION))
                .unwrap_or(false);
            is_toc
                && path
                    .file_stem()
                    .map(|s| s.to_string_lossy().eq_ignore_ascii_case(stem))
                    .unwrap_or(false)
        })
    };

    if let Some(base) = find_stem(folder_name) {
        return Some(base);
    }
    for locale in LOCALE_TOKENS {
        for separator in ['-', '_'] {
            if let Some(variant) = find_stem(&format!("{folder_name}{separator}{locale}")) {
                return Some(variant);
            }
        }
    }
    None
}

/// Parse descriptor text. Lenient by design: malformed directives are
/// skipped, unknown directives are retained in `extra`.
pub fn parse_descriptor(text: &str) -> TocDescriptor {
    let mut descriptor = TocDescriptor::default();

    for line in text.lines() {
        let line = line.trim();

        if let Some(directive) = line.strip_prefix("##") {
            let Some((key, value)) = directive.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            match key {
                "Title" => descriptor.title = Some(value.to_string()),
                "Version" => descriptor.version = Some(value.to_string()),
                "Interface" => {
                    descriptor.interface_versions = value
                        .split(',')
                        .map(|token| token.trim().to_string())
                        .filter(|token| !token.is_empty())
                        .collect();
                }
                "Author" => descriptor.author = Some(value.to_string()),
                "Notes" => descriptor.notes = Some(value.to_string()),
                _ => {
                    descriptor.extra.insert(key.to_string(), value.to_string());
                }
            }
        } else if line.starts_with('#') {
            // comment line
        } else if !line.is_empty() {
            descriptor.declared_files.push(line.replace('\\', "/"));
        }
    }

    descriptor
}
