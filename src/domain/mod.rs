//! Domain layer containing the decision model and the TOPSIS computation.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects (impacts, typed cells) and errors
//! - `analysis` - Pure domain services: validation, scoring, ranking

pub mod analysis;
pub mod foundation;
