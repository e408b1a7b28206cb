// linesieve - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every I/O failure carries the path and the operation that produced it.

use std::io;
use std::path::PathBuf;

/// Top-level error type for all linesieve operations.
#[derive(Debug, thiserror::Error)]
pub enum LineSieveError {
    /// The input file does not exist. This is the only failure the CLI
    /// reports as a plain diagnostic rather than an error chain.
    #[error("File '{}' not found.", .path.display())]
    InputNotFound { path: PathBuf },

    /// I/O error with path context (permission denied, disk full, ...).
    #[error("I/O error during {operation} on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// Writing a run report to the console failed.
    #[error("Failed to write run report: {source}")]
    Report {
        #[source]
        source: io::Error,
    },
}

impl LineSieveError {
    /// Classify an I/O error raised while reading the input file.
    ///
    /// `NotFound` maps to [`LineSieveError::InputNotFound`]; everything else
    /// is kept as a generic I/O error on the same path.
    pub fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::Io {
                path,
                operation: "read",
                source,
            }
        }
    }

    /// True when this error is the missing-input case.
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }
}

/// Convenience type alias for linesieve results.
pub type Result<T> = std::result::Result<T, LineSieveError>;
