//! Table Adapters
//!
//! Implementations of the `TableReader` and `TableWriter` ports.
//!
//! ## Available Adapters
//!
//! - **CsvTableReader** / **CsvTableWriter** - Delimited text via `csv`
//! - **SpreadsheetTableReader** - `.xlsx`/`.xls`/`.ods` via `calamine`
//! - **JsonTableWriter** - Pretty-printed JSON via `serde_json`
//! - **FileTableReader** / **FileTableWriter** - Pick one of the above by extension
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::table::{FileTableReader, FileTableWriter};
//!
//! let table = FileTableReader::default().read(Path::new("data.xlsx"))?;
//! ```

mod csv_table_reader;
mod csv_table_writer;
mod file_table;
mod json_table_writer;
mod spreadsheet_table_reader;

pub use csv_table_reader::CsvTableReader;
pub use csv_table_writer::{CsvTableWriter, DEFAULT_RANK_COLUMN, DEFAULT_SCORE_COLUMN};
pub use file_table::{FileTableReader, FileTableWriter, TableFormat};
pub use json_table_writer::JsonTableWriter;
pub use spreadsheet_table_reader::SpreadsheetTableReader;
