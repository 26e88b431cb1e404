//! Analysis Module - Pure domain services for TOPSIS ranking.
//!
//! # Components
//!
//! - `DecisionTable` - Alternatives x criteria as loaded from input
//! - `InputValidator` - Ordered precondition checks, yields a numeric matrix
//! - `TopsisScorer` - Normalization, weighting, ideal distances, scores, ranks
//! - `TopsisAnalyzer` - Validate then score; the core entry point
//! - `ScoredTable` - The decision table with score and rank appended
//!
//! All functions are pure and stateless. No I/O happens here; reading and
//! writing tables goes through the ports.

mod decision_table;
mod ranking;
mod scored_table;
mod topsis_analyzer;
mod topsis_scorer;
mod validator;

pub use decision_table::{Alternative, DecisionTable, DecisionTableBuilder};
pub use ranking::dense_rank;
pub use scored_table::{ScoredAlternative, ScoredTable};
pub use topsis_analyzer::TopsisAnalyzer;
pub use topsis_scorer::{ScoringBreakdown, TopsisScorer, TopsisScores};
pub use validator::{InputValidator, ValidatedInput, MIN_COLUMNS};
