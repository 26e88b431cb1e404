//! TOPSIS Analyzer - Validate then score: the core entry point.

use tracing::debug;

use crate::domain::foundation::{Impact, ValidationError};

use super::topsis_scorer::{ScoringBreakdown, TopsisScorer};
use super::validator::InputValidator;
use super::{DecisionTable, ScoredAlternative, ScoredTable};

/// Runs the full validate → score → rank pipeline over a decision table.
pub struct TopsisAnalyzer;

impl TopsisAnalyzer {
    /// Ranks the alternatives of `table`.
    ///
    /// `impacts` are raw tokens (`+`/`-`, `1`/`-1`, `benefit`/`cost`) so
    /// that an unknown token is reported as a validation failure.
    ///
    /// # Errors
    ///
    /// Returns the first violated `ValidationError`. Numeric edge cases are
    /// not errors: they surface as NaN scores with no rank.
    pub fn analyze<S: AsRef<str>>(
        table: &DecisionTable,
        weights: &[f64],
        impacts: &[S],
    ) -> Result<ScoredTable, ValidationError> {
        Self::analyze_with_breakdown(table, weights, impacts).map(|(scored, _)| scored)
    }

    /// Same as [`TopsisAnalyzer::analyze`] with already-typed impacts.
    pub fn analyze_with_impacts(
        table: &DecisionTable,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<ScoredTable, ValidationError> {
        let tokens: Vec<&str> = impacts.iter().map(Impact::symbol).collect();
        Self::analyze(table, weights, &tokens)
    }

    /// Ranks the alternatives and also returns the intermediate values.
    pub fn analyze_with_breakdown<S: AsRef<str>>(
        table: &DecisionTable,
        weights: &[f64],
        impacts: &[S],
    ) -> Result<(ScoredTable, ScoringBreakdown), ValidationError> {
        let input = InputValidator::validate(table, weights, impacts)?;
        let result = TopsisScorer::score(&input);

        let rows = table
            .alternatives
            .iter()
            .zip(result.scores.iter().zip(&result.ranks))
            .map(|(alternative, (score, rank))| ScoredAlternative {
                alternative: alternative.clone(),
                score: *score,
                rank: *rank,
            })
            .collect();

        let scored = ScoredTable {
            headers: table.headers.clone(),
            rows,
        };

        debug!(
            alternatives = scored.rows.len(),
            unranked = scored.unranked_count(),
            "Ranked alternatives"
        );

        Ok((scored, result.breakdown))
    }
}
