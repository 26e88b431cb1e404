//! Extension-dispatching reader and writer.
//!
//! Spreadsheet extensions go to calamine, `.json` output goes to the JSON
//! writer, everything else is treated as delimited text.

use std::path::Path;

use tracing::debug;

use crate::domain::analysis::{DecisionTable, ScoredTable};
use crate::ports::{TableReadError, TableReader, TableWriteError, TableWriter};

use super::{CsvTableReader, CsvTableWriter, JsonTableWriter, SpreadsheetTableReader};

/// File format inferred from a path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Spreadsheet,
    Json,
}

impl TableFormat {
    /// Infers the format from the extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => TableFormat::Spreadsheet,
            Some("json") => TableFormat::Json,
            _ => TableFormat::Csv,
        }
    }
}

/// Reads CSV or spreadsheet input depending on the file extension.
#[derive(Debug, Clone, Default)]
pub struct FileTableReader {
    csv: CsvTableReader,
    spreadsheet: SpreadsheetTableReader,
}

impl FileTableReader {
    /// Creates a reader whose CSV branch uses `delimiter`.
    pub fn new(delimiter: u8) -> Self {
        Self {
            csv: CsvTableReader::new().with_delimiter(delimiter),
            spreadsheet: SpreadsheetTableReader::new(),
        }
    }
}

impl TableReader for FileTableReader {
    fn read(&self, path: &Path) -> Result<DecisionTable, TableReadError> {
        let format = TableFormat::from_path(path);
        debug!(path = %path.display(), ?format, "Reading decision table");

        match format {
            TableFormat::Spreadsheet => self.spreadsheet.read(path),
            TableFormat::Csv | TableFormat::Json => self.csv.read(path),
        }
    }
}

/// Writes JSON for `.json` paths and CSV for everything else.
#[derive(Debug, Clone, Default)]
pub struct FileTableWriter {
    csv: CsvTableWriter,
    json: JsonTableWriter,
}

impl FileTableWriter {
    /// Creates a writer from already configured CSV and JSON writers.
    pub fn new(csv: CsvTableWriter, json: JsonTableWriter) -> Self {
        Self { csv, json }
    }
}

impl TableWriter for FileTableWriter {
    fn write(&self, path: &Path, table: &ScoredTable) -> Result<(), TableWriteError> {
        let format = TableFormat::from_path(path);
        debug!(path = %path.display(), ?format, "Writing scored table");

        match format {
            TableFormat::Json => self.json.write(path, table),
            TableFormat::Csv | TableFormat::Spreadsheet => self.csv.write(path, table),
        }
    }
}
