//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableReader` - Load a decision table from a file
//! - `TableWriter` - Persist a scored table
//! - `ProgressReporter` - Observe pipeline stages as they complete

mod progress_reporter;
mod table_reader;
mod table_writer;

pub use progress_reporter::{PipelineStage, ProgressReporter};
pub use table_reader::{TableReadError, TableReader};
pub use table_writer::{TableWriteError, TableWriter};
