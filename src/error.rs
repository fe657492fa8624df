//! Error types for cover-rename.
//!
//! Every variant here is fatal: it stops the run before or during setup.
//! A single failed rename is not an error at this level, see
//! [`crate::renamer::RenameFailure`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum CoverError {
    /// Mapping file missing or unreadable.
    #[error("Cannot open mapping file {}: {source}", path.display())]
    CsvOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be read from the mapping file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Record without the old and new identifier columns.
    #[error("Row at line {line} has {fields} field(s); at least 4 are required")]
    ShortRow { line: u64, fields: usize },

    /// Source directory missing or unreadable.
    #[error("Cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for cover-rename operations.
pub type Result<T> = std::result::Result<T, CoverError>;
