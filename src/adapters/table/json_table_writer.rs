//! JSON Table Writer Adapter
//!
//! Writes the scored table as a pretty-printed JSON array with one object per
//! alternative, keyed by column header. Undefined scores and ranks become
//! `null`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::analysis::{ScoredAlternative, ScoredTable};
use crate::domain::foundation::CellValue;
use crate::ports::{TableWriteError, TableWriter};

use super::{DEFAULT_RANK_COLUMN, DEFAULT_SCORE_COLUMN};

/// Key used for the identifier when the table has no headers.
const FALLBACK_ID_KEY: &str = "id";

/// JSON implementation of the `TableWriter` port.
#[derive(Debug, Clone)]
pub struct JsonTableWriter {
    score_key: String,
    rank_key: String,
}

impl JsonTableWriter {
    /// Creates a JSON writer with `Score` and `Rank` keys.
    pub fn new() -> Self {
        Self {
            score_key: DEFAULT_SCORE_COLUMN.to_string(),
            rank_key: DEFAULT_RANK_COLUMN.to_string(),
        }
    }

    /// Renames the score and rank keys.
    pub fn with_columns(mut self, score: impl Into<String>, rank: impl Into<String>) -> Self {
        self.score_key = score.into();
        self.rank_key = rank.into();
        self
    }

    /// Builds one JSON object per alternative, in row order.
    pub fn to_rows(&self, table: &ScoredTable) -> Vec<Value> {
        let id_key = table
            .headers
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_ID_KEY);

        table
            .rows
            .iter()
            .map(|row| Value::Object(self.row_object(id_key, &table.headers, row)))
            .collect()
    }

    fn row_object(
        &self,
        id_key: &str,
        headers: &[String],
        row: &ScoredAlternative,
    ) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert(id_key.to_string(), Value::from(row.alternative.id.as_str()));

        for (index, cell) in row.alternative.values.iter().enumerate() {
            let key = headers
                .get(index + 1)
                .cloned()
                .unwrap_or_else(|| format!("column {}", index + 2));
            object.insert(key, cell_json(cell));
        }

        object.insert(self.score_key.clone(), Value::from(row.score));
        object.insert(
            self.rank_key.clone(),
            row.rank.map(Value::from).unwrap_or(Value::Null),
        );
        object
    }
}

impl Default for JsonTableWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableWriter for JsonTableWriter {
    fn write(&self, path: &Path, table: &ScoredTable) -> Result<(), TableWriteError> {
        let io_error = |source: std::io::Error| TableWriteError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        serde_json::to_writer_pretty(&mut writer, &self.to_rows(table)).map_err(|source| {
            TableWriteError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.flush().map_err(io_error)
    }
}

/// Numbers stay numbers; `NaN` (never produced by the readers) becomes `null`.
fn cell_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Number(value) => Value::from(*value),
        CellValue::Text(text) => Value::from(text.as_str()),
    }
}
