//! Table Writer Port - Persisting scored tables.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::analysis::ScoredTable;

/// Port for writing a scored table.
///
/// # Contract
///
/// Implementations must write rows in table order, identifier and criterion
/// columns first, then the score and the rank. NaN scores and missing ranks
/// are written, not skipped.
pub trait TableWriter {
    /// Writes `table` to `path`, replacing any existing file.
    fn write(&self, path: &Path, table: &ScoredTable) -> Result<(), TableWriteError>;
}

/// Errors raised while writing a scored table.
#[derive(Debug, Error)]
pub enum TableWriteError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode CSV for {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to encode JSON for {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
