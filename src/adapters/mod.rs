//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `table` - CSV, spreadsheet and JSON table readers/writers
//! - `console` - Progress reporting on stdout (and in memory for tests)

pub mod console;
pub mod table;

pub use console::{ConsoleReporter, InMemoryReporter};
pub use table::{
    CsvTableReader, CsvTableWriter, FileTableReader, FileTableWriter, JsonTableWriter,
    SpreadsheetTableReader, TableFormat,
};
