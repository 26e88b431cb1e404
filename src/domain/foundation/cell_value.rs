//! Typed cell of a criterion column.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A criterion cell as it was loaded: either a number or the raw text that
/// failed to parse as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Types a raw cell, trimming surrounding whitespace first.
    ///
    /// Only finite numbers count as numeric; `NaN`/`inf` spellings and empty
    /// cells are kept as text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => CellValue::Number(value),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    /// Returns the numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(_) => None,
        }
    }

    /// Returns true if the cell holds a number.
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(value) => write!(f, "{}", value),
            CellValue::Text(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_types_numbers() {
        assert_eq!(CellValue::parse("250"), CellValue::Number(250.0));
        assert_eq!(CellValue::parse(" 3.5 "), CellValue::Number(3.5));
        assert_eq!(CellValue::parse("-1e3"), CellValue::Number(-1000.0));
    }

    #[test]
    fn parse_keeps_text() {
        assert_eq!(CellValue::parse("high"), CellValue::Text("high".to_string()));
        assert_eq!(CellValue::parse(""), CellValue::Text(String::new()));
        assert!(!CellValue::parse("NaN").is_numeric());
        assert!(!CellValue::parse("inf").is_numeric());
    }

    #[test]
    fn display_uses_shortest_representation() {
        assert_eq!(CellValue::Number(16.0).to_string(), "16");
        assert_eq!(CellValue::Number(0.25).to_string(), "0.25");
        assert_eq!(CellValue::from("n/a").to_string(), "n/a");
    }
}
