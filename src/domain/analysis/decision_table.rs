//! Decision Table - Alternatives x criteria matrix as loaded from input.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CellValue;

/// One alternative: its opaque identifier and its criterion cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub values: Vec<CellValue>,
}

impl Alternative {
    /// Creates an alternative from an identifier and its cells.
    pub fn new(id: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }
}

/// The decision table: one identifier column followed by criterion columns.
///
/// `headers` covers every column, identifier included, so
/// `headers.len()` is the total column count the validator reasons about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionTable {
    pub headers: Vec<String>,
    pub alternatives: Vec<Alternative>,
}

impl DecisionTable {
    /// Creates a table from headers and rows.
    pub fn new(headers: Vec<String>, alternatives: Vec<Alternative>) -> Self {
        Self {
            headers,
            alternatives,
        }
    }

    /// Creates a builder for constructing a decision table.
    pub fn builder() -> DecisionTableBuilder {
        DecisionTableBuilder::new()
    }

    /// Total number of columns, identifier included.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of criterion columns (total minus the identifier column).
    pub fn criteria_count(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }

    /// Names of the criterion columns.
    pub fn criteria_names(&self) -> &[String] {
        self.headers.get(1..).unwrap_or(&[])
    }

    /// Returns true if the table has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }
}

/// Builder for constructing DecisionTable instances.
#[derive(Debug, Default)]
pub struct DecisionTableBuilder {
    headers: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all column headers, identifier first.
    pub fn headers(mut self, headers: Vec<impl Into<String>>) -> Self {
        self.headers = headers.into_iter().map(|h| h.into()).collect();
        self
    }

    /// Adds an alternative with numeric criteria.
    pub fn row(mut self, id: impl Into<String>, values: Vec<f64>) -> Self {
        let cells = values.into_iter().map(CellValue::Number).collect();
        self.alternatives.push(Alternative::new(id, cells));
        self
    }

    /// Adds an alternative with already-typed cells.
    pub fn cells(mut self, id: impl Into<String>, values: Vec<CellValue>) -> Self {
        self.alternatives.push(Alternative::new(id, values));
        self
    }

    /// Builds the decision table.
    pub fn build(self) -> DecisionTable {
        DecisionTable {
            headers: self.headers,
            alternatives: self.alternatives,
        }
    }
}
