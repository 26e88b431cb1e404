//! CSV Table Writer Adapter
//!
//! Writes the input columns followed by score and rank. Undefined scores
//! and ranks are written as `NaN`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::analysis::ScoredTable;
use crate::ports::{TableWriteError, TableWriter};

/// Default header of the appended score column.
pub const DEFAULT_SCORE_COLUMN: &str = "Score";

/// Default header of the appended rank column.
pub const DEFAULT_RANK_COLUMN: &str = "Rank";

const UNDEFINED: &str = "NaN";

/// CSV implementation of the `TableWriter` port.
#[derive(Debug, Clone)]
pub struct CsvTableWriter {
    delimiter: u8,
    score_column: String,
    rank_column: String,
}

impl CsvTableWriter {
    /// Creates a comma-separated writer with `Score` and `Rank` columns.
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            score_column: DEFAULT_SCORE_COLUMN.to_string(),
            rank_column: DEFAULT_RANK_COLUMN.to_string(),
        }
    }

    /// Uses a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Renames the appended columns.
    pub fn with_columns(mut self, score: impl Into<String>, rank: impl Into<String>) -> Self {
        self.score_column = score.into();
        self.rank_column = rank.into();
        self
    }

    /// Writes the table to any writer; `target` only labels errors.
    pub fn write_to<W: Write>(
        &self,
        writer: W,
        target: &Path,
        table: &ScoredTable,
    ) -> Result<(), TableWriteError> {
        let csv_error = |err: csv::Error| TableWriteError::Csv {
            path: target.to_path_buf(),
            source: err,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        let mut header: Vec<&str> = table.headers.iter().map(String::as_str).collect();
        header.push(&self.score_column);
        header.push(&self.rank_column);
        csv_writer.write_record(&header).map_err(csv_error)?;

        for row in &table.rows {
            let mut record = Vec::with_capacity(row.alternative.values.len() + 3);
            record.push(row.alternative.id.clone());
            record.extend(row.alternative.values.iter().map(|cell| cell.to_string()));
            record.push(format_score(row.score));
            record.push(
                row.rank
                    .map(|rank| rank.to_string())
                    .unwrap_or_else(|| UNDEFINED.to_string()),
            );
            csv_writer.write_record(&record).map_err(csv_error)?;
        }

        csv_writer.flush().map_err(|source| TableWriteError::Io {
            path: target.to_path_buf(),
            source,
        })
    }
}

impl Default for CsvTableWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableWriter for CsvTableWriter {
    fn write(&self, path: &Path, table: &ScoredTable) -> Result<(), TableWriteError> {
        let file = File::create(path).map_err(|source| TableWriteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to(file, path, table)
    }
}

/// Shortest round-trip representation; `NaN` for undefined scores.
fn format_score(score: f64) -> String {
    if score.is_nan() {
        UNDEFINED.to_string()
    } else {
        score.to_string()
    }
}
