//! Input Validator - Structural and semantic preconditions for scoring.
//!
//! Checks run in a fixed order and stop at the first violation, so callers
//! always see the earliest broken rule:
//!
//! 1. weights and impacts have the same length
//! 2. criterion column count equals the weight count
//! 3. at least 3 columns (identifier + 2 criteria)
//! 4. every criterion cell is numeric
//! 5. every impact resolves to benefit or cost
//!
//! A successful check converts the loosely typed table into a plain `f64`
//! matrix, so the scorer never sees a text cell.

use crate::domain::foundation::{Impact, ValidationError};

use super::DecisionTable;

/// Minimum total column count: identifier plus two criteria.
pub const MIN_COLUMNS: usize = 3;

/// Scoring input that passed every validation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    /// Criteria values, one inner vector per alternative, in table order.
    pub matrix: Vec<Vec<f64>>,
    pub weights: Vec<f64>,
    pub impacts: Vec<Impact>,
}

impl ValidatedInput {
    /// Number of criteria per alternative.
    pub fn criteria_count(&self) -> usize {
        self.weights.len()
    }
}

/// Stateless validator for decision tables.
pub struct InputValidator;

impl InputValidator {
    /// Validates the table, weights and impact tokens.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` for the first rule that fails.
    pub fn validate<S: AsRef<str>>(
        table: &DecisionTable,
        weights: &[f64],
        impacts: &[S],
    ) -> Result<ValidatedInput, ValidationError> {
        if weights.len() != impacts.len() {
            return Err(ValidationError::WeightImpactMismatch {
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }

        if table.criteria_count() != weights.len() {
            return Err(ValidationError::CriteriaCountMismatch {
                criteria: table.criteria_count(),
                weights: weights.len(),
            });
        }

        if table.column_count() < MIN_COLUMNS {
            return Err(ValidationError::TooFewColumns {
                columns: table.column_count(),
            });
        }

        let matrix = Self::numeric_matrix(table)?;
        let impacts = Self::parse_impacts(impacts)?;

        Ok(ValidatedInput {
            matrix,
            weights: weights.to_vec(),
            impacts,
        })
    }

    /// Converts every criterion cell to `f64`, scanning column by column.
    ///
    /// A row shorter than the header is reported as an empty cell in the
    /// first missing column; cells beyond the header are ignored.
    fn numeric_matrix(table: &DecisionTable) -> Result<Vec<Vec<f64>>, ValidationError> {
        let criteria = table.criteria_names();

        for (col, name) in criteria.iter().enumerate() {
            for (index, alternative) in table.alternatives.iter().enumerate() {
                match alternative.values.get(col) {
                    Some(cell) if cell.is_numeric() => {}
                    Some(cell) => {
                        return Err(ValidationError::non_numeric(
                            name.clone(),
                            index + 1,
                            cell.to_string(),
                        ))
                    }
                    None => return Err(ValidationError::non_numeric(name.clone(), index + 1, "")),
                }
            }
        }

        Ok(table
            .alternatives
            .iter()
            .map(|alternative| {
                alternative
                    .values
                    .iter()
                    .take(criteria.len())
                    .filter_map(|cell| cell.as_number())
                    .collect()
            })
            .collect())
    }

    fn parse_impacts<S: AsRef<str>>(impacts: &[S]) -> Result<Vec<Impact>, ValidationError> {
        impacts
            .iter()
            .enumerate()
            .map(|(index, token)| {
                token
                    .as_ref()
                    .parse::<Impact>()
                    .map_err(|_| ValidationError::invalid_impact(index + 1, token.as_ref()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CellValue;

    fn phones() -> DecisionTable {
        DecisionTable::builder()
            .headers(vec!["Model", "Price", "Storage"])
            .row("M1", vec![250.0, 16.0])
            .row("M2", vec![200.0, 16.0])
            .row("M3", vec![300.0, 32.0])
            .build()
    }

    #[test]
    fn valid_input_produces_matrix_and_impacts() {
        let input = InputValidator::validate(&phones(), &[1.0, 2.0], &["+", "-"]).unwrap();

        assert_eq!(input.matrix, vec![
            vec![250.0, 16.0],
            vec![200.0, 16.0],
            vec![300.0, 32.0],
        ]);
        assert_eq!(input.weights, vec![1.0, 2.0]);
        assert_eq!(input.impacts, vec![Impact::Benefit, Impact::Cost]);
        assert_eq!(input.criteria_count(), 2);
    }

    #[test]
    fn rule_1_weights_and_impacts_differ_in_length() {
        let err = InputValidator::validate(&phones(), &[1.0, 1.0], &["+"]).unwrap_err();
        assert_eq!(err.rule(), 1);
    }

    #[test]
    fn rule_2_weight_count_differs_from_criteria() {
        let err = InputValidator::validate(&phones(), &[1.0, 1.0, 1.0], &["+", "+", "+"])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::CriteriaCountMismatch { criteria: 2, weights: 3 }
        );
    }

    #[test]
    fn rule_3_two_columns_is_too_few() {
        let table = DecisionTable::builder()
            .headers(vec!["Model", "Price"])
            .row("M1", vec![250.0])
            .build();

        let err = InputValidator::validate(&table, &[1.0], &["+"]).unwrap_err();
        assert_eq!(err, ValidationError::TooFewColumns { columns: 2 });
    }

    #[test]
    fn rule_4_reports_first_text_cell_by_column() {
        let table = DecisionTable::builder()
            .headers(vec!["Model", "Price", "Storage"])
            .cells("M1", vec![CellValue::Number(1.0), CellValue::from("big")])
            .cells("M2", vec![CellValue::from("cheap"), CellValue::Number(2.0)])
            .build();

        let err = InputValidator::validate(&table, &[1.0, 1.0], &["+", "+"]).unwrap_err();
        assert_eq!(err, ValidationError::non_numeric("Price", 2, "cheap"));
    }

    #[test]
    fn rule_4_treats_short_rows_as_empty_cells() {
        let table = DecisionTable::builder()
            .headers(vec!["Model", "Price", "Storage"])
            .row("M1", vec![1.0])
            .build();

        let err = InputValidator::validate(&table, &[1.0, 1.0], &["+", "+"]).unwrap_err();
        assert_eq!(err, ValidationError::non_numeric("Storage", 1, ""));
    }

    #[test]
    fn rule_5_rejects_unknown_impact() {
        let err = InputValidator::validate(&phones(), &[1.0, 1.0], &["+", "x"]).unwrap_err();
        assert_eq!(err, ValidationError::invalid_impact(2, "x"));
    }

    #[test]
    fn earlier_rule_wins_when_several_fail() {
        let table = DecisionTable::builder()
            .headers(vec!["Model", "Price"])
            .cells("M1", vec![CellValue::from("cheap")])
            .build();

        // Rules 1, 2, 3, 4 and 5 are all broken here.
        let err = InputValidator::validate(&table, &[1.0, 1.0], &["?"]).unwrap_err();
        assert_eq!(err.rule(), 1);

        // Rules 2, 3, 4 and 5.
        let err = InputValidator::validate(&table, &[1.0, 1.0], &["?", "?"]).unwrap_err();
        assert_eq!(err.rule(), 2);

        // Rules 3, 4 and 5.
        let err = InputValidator::validate(&table, &[1.0], &["?"]).unwrap_err();
        assert_eq!(err.rule(), 3);
    }

    #[test]
    fn rule_4_is_checked_before_rule_5() {
        let table = DecisionTable::builder()
            .headers(vec!["Model", "Price", "Storage"])
            .cells("M1", vec![CellValue::Number(1.0), CellValue::from("big")])
            .build();

        let err = InputValidator::validate(&table, &[1.0, 1.0], &["+", "?"]).unwrap_err();
        assert_eq!(err.rule(), 4);
    }

    #[test]
    fn table_without_rows_is_valid() {
        let table = DecisionTable::builder()
            .headers(vec!["Model", "Price", "Storage"])
            .build();

        let input = InputValidator::validate(&table, &[1.0, 1.0], &["+", "-"]).unwrap();
        assert!(input.matrix.is_empty());
    }
}
