//! TOPSIS Scorer - Closeness to the ideal solution for validated input.
//!
//! # Algorithm
//!
//! For each criterion column `j`:
//! 1. `r_ij = x_ij / sqrt(Σ_i x_ij²)` (vector normalization)
//! 2. `v_ij = w_j · r_ij`
//! 3. ideal `A+_j` = max for benefit, min for cost; negative-ideal `A-_j` the opposite
//!
//! Then per alternative `i`:
//! 4. `D+_i = ‖v_i − A+‖`, `D-_i = ‖v_i − A-‖`
//! 5. `score_i = D-_i / (D+_i + D-_i)`
//! 6. dense rank by descending score
//!
//! # Edge Cases
//!
//! - All-zero column: its norm is 0, every `r_ij` is NaN and so is every score
//! - Identical alternatives: `D+ = D- = 0`, score is NaN
//! - No alternatives: empty result
//!
//! NaN is propagated, never replaced, and never raised as an error.

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::Impact;

use super::ranking::dense_rank;
use super::validator::ValidatedInput;

/// Intermediate values of a scoring run, kept for inspection and logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoringBreakdown {
    /// Euclidean norm of each raw criterion column.
    pub column_norms: Vec<f64>,
    /// Weighted-normalized matrix, one row per alternative.
    pub weighted: Vec<Vec<f64>>,
    pub ideal: Vec<f64>,
    pub negative_ideal: Vec<f64>,
    /// Distance of each alternative to the ideal (`D+`).
    pub ideal_separation: Vec<f64>,
    /// Distance of each alternative to the negative-ideal (`D-`).
    pub negative_separation: Vec<f64>,
}

/// Outcome of scoring: per-row scores and ranks plus the breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct TopsisScores {
    pub scores: Vec<f64>,
    pub ranks: Vec<Option<u32>>,
    pub breakdown: ScoringBreakdown,
}

/// TOPSIS scoring functions.
pub struct TopsisScorer;

impl TopsisScorer {
    /// Scores every alternative of a validated input.
    pub fn score(input: &ValidatedInput) -> TopsisScores {
        let column_norms = Self::column_norms(&input.matrix, input.criteria_count());
        let weighted = Self::weighted_normalized(&input.matrix, &column_norms, &input.weights);
        let (ideal, negative_ideal) = Self::ideal_solutions(&weighted, &input.impacts);

        let ideal_separation: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean_distance(row, &ideal))
            .collect();
        let negative_separation: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean_distance(row, &negative_ideal))
            .collect();

        let scores: Vec<f64> = ideal_separation
            .iter()
            .zip(&negative_separation)
            .map(|(d_plus, d_minus)| closeness(*d_plus, *d_minus))
            .collect();
        let ranks = dense_rank(&scores);

        debug!(
            alternatives = scores.len(),
            criteria = input.criteria_count(),
            ?column_norms,
            ?ideal,
            ?negative_ideal,
            "Computed TOPSIS scores"
        );

        TopsisScores {
            scores,
            ranks,
            breakdown: ScoringBreakdown {
                column_norms,
                weighted,
                ideal,
                negative_ideal,
                ideal_separation,
                negative_separation,
            },
        }
    }

    /// Euclidean norm of each column.
    ///
    /// Accumulated with `hypot` so values near `f64::MAX` do not overflow to
    /// infinity when squared.
    pub fn column_norms(matrix: &[Vec<f64>], criteria: usize) -> Vec<f64> {
        (0..criteria)
            .map(|col| {
                matrix
                    .iter()
                    .map(|row| cell(row, col))
                    .fold(0.0, f64::hypot)
            })
            .collect()
    }

    /// Divides each value by its column norm and multiplies by the column weight.
    pub fn weighted_normalized(matrix: &[Vec<f64>], norms: &[f64], weights: &[f64]) -> Vec<Vec<f64>> {
        matrix
            .iter()
            .map(|row| {
                row.iter()
                    .zip(norms.iter().zip(weights))
                    .map(|(value, (norm, weight))| value / norm * weight)
                    .collect()
            })
            .collect()
    }

    /// Builds the ideal and negative-ideal vectors from the weighted matrix.
    pub fn ideal_solutions(weighted: &[Vec<f64>], impacts: &[Impact]) -> (Vec<f64>, Vec<f64>) {
        impacts
            .iter()
            .enumerate()
            .map(|(col, impact)| {
                let (max, min) = column_extremes(weighted.iter().map(|row| cell(row, col)));
                match impact {
                    Impact::Benefit => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip()
    }
}

/// Missing cells read as NaN.
fn cell(row: &[f64], col: usize) -> f64 {
    row.get(col).copied().unwrap_or(f64::NAN)
}

/// Returns `(max, min)` of a column; NaN if any value is NaN.
///
/// `f64::max` alone drops NaN, which would hide a zero-norm column.
fn column_extremes(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;

    for value in values {
        if value.is_nan() {
            return (f64::NAN, f64::NAN);
        }
        max = max.max(value);
        min = min.min(value);
    }

    (max, min)
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x - y).fold(0.0, f64::hypot)
}

/// `D- / (D+ + D-)`; 0/0 yields NaN.
fn closeness(d_plus: f64, d_minus: f64) -> f64 {
    d_minus / (d_plus + d_minus)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn input(matrix: Vec<Vec<f64>>, weights: Vec<f64>, impacts: Vec<Impact>) -> ValidatedInput {
        ValidatedInput {
            matrix,
            weights,
            impacts,
        }
    }

    fn phones() -> ValidatedInput {
        input(
            vec![vec![250.0, 16.0], vec![200.0, 16.0], vec![300.0, 32.0]],
            vec![1.0, 1.0],
            vec![Impact::Benefit, Impact::Cost],
        )
    }

    #[test]
    fn scores_match_hand_computation() {
        let result = TopsisScorer::score(&phones());

        let expected = [0.788_105_018_124_397_5, 0.641_728_858_105_483_9, 0.358_271_141_894_516_1];
        for (actual, expected) in result.scores.iter().zip(expected) {
            assert!((actual - expected).abs() < EPS, "{actual} != {expected}");
        }
        assert_eq!(result.ranks, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn breakdown_exposes_ideal_vectors() {
        let result = TopsisScorer::score(&phones());
        let b = &result.breakdown;

        assert!((b.column_norms[0] - 192_500f64.sqrt()).abs() < EPS);
        assert!((b.column_norms[1] - 1_536f64.sqrt()).abs() < EPS);
        // Benefit: ideal is the max; cost: ideal is the min.
        assert!((b.ideal[0] - 300.0 / 192_500f64.sqrt()).abs() < EPS);
        assert!((b.ideal[1] - 16.0 / 1_536f64.sqrt()).abs() < EPS);
        assert!((b.negative_ideal[0] - 200.0 / 192_500f64.sqrt()).abs() < EPS);
        assert!((b.negative_ideal[1] - 32.0 / 1_536f64.sqrt()).abs() < EPS);
        assert!((b.ideal_separation[0] - 0.113_960_576_459_637_97).abs() < EPS);
        assert!((b.negative_separation[0] - 0.423_855_729_763_889_97).abs() < EPS);
    }

    #[test]
    fn weights_scale_normalized_columns() {
        let mut weighted = phones();
        weighted.weights = vec![2.0, 0.5];
        let result = TopsisScorer::score(&weighted);

        let w = &result.breakdown.weighted;
        assert!((w[0][0] - 2.0 * 250.0 / 192_500f64.sqrt()).abs() < EPS);
        assert!((w[0][1] - 0.5 * 16.0 / 1_536f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn equal_nonzero_column_normalizes_to_equal_values() {
        let data = input(
            vec![vec![7.0, 1.0], vec![7.0, 2.0], vec![7.0, 3.0]],
            vec![1.0, 1.0],
            vec![Impact::Benefit, Impact::Benefit],
        );
        let result = TopsisScorer::score(&data);

        let first = result.breakdown.weighted[0][0];
        assert!(result.breakdown.weighted.iter().all(|row| row[0] == first));
        assert!((first - 1.0 / 3f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn zero_column_yields_nan_scores() {
        let data = input(
            vec![vec![0.0, 1.0], vec![0.0, 2.0]],
            vec![1.0, 1.0],
            vec![Impact::Benefit, Impact::Cost],
        );
        let result = TopsisScorer::score(&data);

        assert!(result.scores.iter().all(|s| s.is_nan()));
        assert_eq!(result.ranks, vec![None, None]);
        assert!(result.breakdown.ideal[0].is_nan());
    }

    #[test]
    fn identical_alternatives_have_nan_score() {
        let data = input(
            vec![vec![3.0, 4.0], vec![3.0, 4.0]],
            vec![1.0, 1.0],
            vec![Impact::Benefit, Impact::Cost],
        );
        let result = TopsisScorer::score(&data);

        assert_eq!(result.breakdown.ideal_separation, vec![0.0, 0.0]);
        assert!(result.scores.iter().all(|s| s.is_nan()));
    }

    #[test]
    fn cost_reverses_preference() {
        let benefit = TopsisScorer::score(&input(
            vec![vec![1.0, 5.0], vec![2.0, 5.0]],
            vec![1.0, 1.0],
            vec![Impact::Benefit, Impact::Benefit],
        ));
        let cost = TopsisScorer::score(&input(
            vec![vec![1.0, 5.0], vec![2.0, 5.0]],
            vec![1.0, 1.0],
            vec![Impact::Cost, Impact::Benefit],
        ));

        assert_eq!(benefit.ranks, vec![Some(2), Some(1)]);
        assert_eq!(cost.ranks, vec![Some(1), Some(2)]);
    }

    #[test]
    fn huge_values_rank_like_their_scaled_down_table() {
        let scaled = input(
            vec![vec![250e200, 16.0], vec![200e200, 16.0], vec![300e200, 32.0]],
            vec![1.0, 1.0],
            vec![Impact::Benefit, Impact::Cost],
        );

        let small = TopsisScorer::score(&phones());
        let huge = TopsisScorer::score(&scaled);

        assert!(huge.breakdown.column_norms[0].is_finite());
        assert_eq!(huge.ranks, small.ranks);
        for (big, reference) in huge.scores.iter().zip(&small.scores) {
            assert!((big - reference).abs() < EPS, "{big} != {reference}");
        }
    }

    #[test]
    fn no_alternatives_scores_nothing() {
        let data = input(vec![], vec![1.0, 1.0], vec![Impact::Benefit, Impact::Cost]);
        let result = TopsisScorer::score(&data);

        assert!(result.scores.is_empty());
        assert_eq!(result.breakdown.column_norms, vec![0.0, 0.0]);
    }
}
