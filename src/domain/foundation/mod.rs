//! Shared domain primitives (value objects and errors).

mod cell_value;
mod errors;
mod impact;

pub use cell_value::CellValue;
pub use errors::ValidationError;
pub use impact::{Impact, UnknownImpact};
