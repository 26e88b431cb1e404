//! Spreadsheet Table Reader Adapter
//!
//! Reads the first worksheet of an Excel or OpenDocument workbook with
//! `calamine` and converts it to a decision table in memory.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::analysis::{Alternative, DecisionTable};
use crate::domain::foundation::CellValue;
use crate::ports::{TableReadError, TableReader};

/// Spreadsheet implementation of the `TableReader` port.
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetTableReader;

impl SpreadsheetTableReader {
    /// Creates a spreadsheet reader.
    pub fn new() -> Self {
        Self
    }

    fn spreadsheet_error(path: &Path, err: calamine::Error) -> TableReadError {
        match err {
            calamine::Error::Io(source) => TableReadError::from_io(path, source),
            other => TableReadError::Spreadsheet {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        }
    }
}

impl TableReader for SpreadsheetTableReader {
    fn read(&self, path: &Path) -> Result<DecisionTable, TableReadError> {
        // calamine wraps I/O failures per format; check the file up front so a
        // missing input is reported as such.
        std::fs::metadata(path).map_err(|err| TableReadError::from_io(path, err))?;

        let mut workbook =
            open_workbook_auto(path).map_err(|err| Self::spreadsheet_error(path, err))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| TableReadError::Spreadsheet {
                path: path.to_path_buf(),
                reason: "workbook has no worksheets".to_string(),
            })?
            .map_err(|err| Self::spreadsheet_error(path, err))?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .ok_or_else(|| TableReadError::MissingHeader(path.to_path_buf()))?
            .iter()
            .map(cell_text)
            .collect();

        let alternatives = rows
            .map(|row| {
                let id = row.first().map(cell_text).unwrap_or_default();
                let values = row.iter().skip(1).map(cell_value).collect();
                Alternative::new(id, values)
            })
            .collect();

        Ok(DecisionTable::new(headers, alternatives))
    }
}

/// Text of a header or identifier cell.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Types a criterion cell the same way the CSV reader does.
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) if value.is_finite() => CellValue::Number(*value),
        Data::String(text) => CellValue::parse(text),
        Data::Empty => CellValue::Text(String::new()),
        other => CellValue::Text(other.to_string()),
    }
}
