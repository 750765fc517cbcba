//! Error types for traversal, configuration, and report I/O.
//!
//! Rule evaluation itself cannot fail; everything that can goes through
//! [`ScanError`] and is handled once at the top level.

use std::path::PathBuf;

/// Errors that can occur while resolving configuration, walking the tree,
/// or writing the report file.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The root path does not exist or is not a directory.
    #[error("root path does not exist or is not a directory: {}", _0.display())]
    InvalidRoot(PathBuf),

    /// Failed to read a directory entry or file metadata.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The internally-built walk pattern did not compile.
    #[error("invalid walk pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Directory traversal failed mid-walk.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] glob::GlobError),

    /// The report file could not be created or written.
    #[error("failed to write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Report {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
