//! Table Reader Port - Loading decision tables from files.
//!
//! The domain never touches the filesystem. Adapters (CSV, spreadsheet)
//! implement this trait and hand over a typed `DecisionTable`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::analysis::DecisionTable;

/// Port for loading a decision table.
///
/// # Contract
///
/// Implementations must:
/// - Use the first row as headers, identifier column first
/// - Keep the identifier cell as text, exactly as read (trimmed)
/// - Type every other cell with `CellValue::parse` semantics
/// - Reject rows whose length differs from the header row
pub trait TableReader {
    /// Reads the table stored at `path`.
    fn read(&self, path: &Path) -> Result<DecisionTable, TableReadError>;
}

/// Errors raised while loading a decision table.
#[derive(Debug, Error)]
pub enum TableReadError {
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV data in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid spreadsheet {}: {reason}", .path.display())]
    Spreadsheet { path: PathBuf, reason: String },

    #[error("{} has no header row", .0.display())]
    MissingHeader(PathBuf),
}

impl TableReadError {
    /// Maps an I/O error, singling out a missing file.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            TableReadError::NotFound(path.to_path_buf())
        } else {
            TableReadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Returns true if the input file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableReadError::NotFound(_))
    }
}
