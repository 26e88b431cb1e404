//! TOPSIS Ranker - Multi-criteria ranking of alternatives
//!
//! Scores every alternative of a decision table by its relative closeness to
//! the ideal solution (Technique for Order of Preference by Similarity to
//! Ideal Solution) and ranks them, best first.
//!
//! # Example
//!
//! ```
//! use topsis_ranker::domain::analysis::{DecisionTable, TopsisAnalyzer};
//!
//! let table = DecisionTable::builder()
//!     .headers(vec!["Model", "Price", "Storage"])
//!     .row("M1", vec![250.0, 16.0])
//!     .row("M2", vec![200.0, 16.0])
//!     .row("M3", vec![300.0, 32.0])
//!     .build();
//!
//! let scored = TopsisAnalyzer::analyze(&table, &[1.0, 1.0], &["+", "-"]).unwrap();
//! assert_eq!(scored.ranks(), vec![Some(1), Some(2), Some(3)]);
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod telemetry;
