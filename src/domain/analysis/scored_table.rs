//! Scored Table - The decision table with score and rank appended.

use serde::Serialize;

use super::Alternative;

/// An alternative with its closeness score and rank.
///
/// `score` is NaN when the alternative's separations could not be computed
/// (zero-norm column or zero total separation); `rank` is `None` then.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAlternative {
    #[serde(flatten)]
    pub alternative: Alternative,
    pub score: f64,
    pub rank: Option<u32>,
}

impl ScoredAlternative {
    /// Returns true if the score is defined.
    pub fn is_ranked(&self) -> bool {
        self.rank.is_some()
    }
}

/// Result of a TOPSIS run: original headers and rows, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoredTable {
    pub headers: Vec<String>,
    pub rows: Vec<ScoredAlternative>,
}

impl ScoredTable {
    /// Returns the scores in row order.
    pub fn scores(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.score).collect()
    }

    /// Returns the ranks in row order.
    pub fn ranks(&self) -> Vec<Option<u32>> {
        self.rows.iter().map(|row| row.rank).collect()
    }

    /// Returns the rank-1 alternatives (several on a tie).
    pub fn best(&self) -> Vec<&ScoredAlternative> {
        self.rows.iter().filter(|row| row.rank == Some(1)).collect()
    }

    /// Returns the number of alternatives whose score is NaN.
    pub fn unranked_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_ranked()).count()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
