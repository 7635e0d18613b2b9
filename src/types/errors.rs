use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Per-folder failure kinds surfaced by the scanners.
///
/// Absence of an optional file (descriptor, sidecar) is never an error;
/// it is modeled as `Option::None` so callers can tell "nothing here"
/// apart from a real failure.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Folder not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {}: {}", .path.display(), .message)]
    Parse { path: PathBuf, message: String },
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScanError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl Serialize for ScanError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type ScanResult<T> = Result<T, ScanError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod errors_tests;
