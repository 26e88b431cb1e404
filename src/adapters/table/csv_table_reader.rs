//! CSV Table Reader Adapter
//!
//! Reads delimited text with a header row. The first column is the
//! alternative identifier; every other cell is typed as number or text.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::domain::analysis::{Alternative, DecisionTable};
use crate::domain::foundation::CellValue;
use crate::ports::{TableReadError, TableReader};

/// CSV implementation of the `TableReader` port.
#[derive(Debug, Clone)]
pub struct CsvTableReader {
    delimiter: u8,
}

impl CsvTableReader {
    /// Creates a comma-separated reader.
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Uses a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parses a table from any reader; `source` only labels errors.
    pub fn read_from<R: Read>(
        &self,
        reader: R,
        source: &Path,
    ) -> Result<DecisionTable, TableReadError> {
        let csv_error = |err: csv::Error| TableReadError::Csv {
            path: source.to_path_buf(),
            source: err,
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(TableReadError::MissingHeader(PathBuf::from(source)));
        }

        let mut alternatives = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(csv_error)?;
            let mut fields = record.iter();
            let id = fields.next().unwrap_or_default().to_string();
            let values = fields.map(CellValue::parse).collect();
            alternatives.push(Alternative::new(id, values));
        }

        Ok(DecisionTable::new(headers, alternatives))
    }
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableReader for CsvTableReader {
    fn read(&self, path: &Path) -> Result<DecisionTable, TableReadError> {
        let file = File::open(path).map_err(|err| TableReadError::from_io(path, err))?;
        self.read_from(file, path)
    }
}
