//! Error types for the domain layer.

use thiserror::Error;

/// A violated precondition on the decision table, weights, or impacts.
///
/// Variants are listed in the order the validator checks them; only the
/// first violation is ever reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Number of weights ({weights}) does not match number of impacts ({impacts})")]
    WeightImpactMismatch { weights: usize, impacts: usize },

    #[error(
        "Number of criteria columns ({criteria}) does not match number of weights and impacts ({weights})"
    )]
    CriteriaCountMismatch { criteria: usize, weights: usize },

    #[error("Table has {columns} column(s); at least 3 are required (identifier + 2 criteria)")]
    TooFewColumns { columns: usize },

    #[error("Column '{column}' is not numeric: row {row} contains '{value}'")]
    NonNumericCriterion {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Impact #{position} is '{value}'; every impact must be benefit (+) or cost (-)")]
    InvalidImpact { position: usize, value: String },
}

impl ValidationError {
    /// Returns the 1-based number of the rule this error reports.
    pub fn rule(&self) -> u8 {
        match self {
            ValidationError::WeightImpactMismatch { .. } => 1,
            ValidationError::CriteriaCountMismatch { .. } => 2,
            ValidationError::TooFewColumns { .. } => 3,
            ValidationError::NonNumericCriterion { .. } => 4,
            ValidationError::InvalidImpact { .. } => 5,
        }
    }

    /// Creates a non-numeric criterion error.
    pub fn non_numeric(column: impl Into<String>, row: usize, value: impl Into<String>) -> Self {
        ValidationError::NonNumericCriterion {
            column: column.into(),
            row,
            value: value.into(),
        }
    }

    /// Creates an invalid impact error.
    pub fn invalid_impact(position: usize, value: impl Into<String>) -> Self {
        ValidationError::InvalidImpact {
            position,
            value: value.into(),
        }
    }
}
