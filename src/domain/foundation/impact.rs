//! Impact value object: the preference direction of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether larger or smaller values of a criterion are preferable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Larger is better.
    Benefit,
    /// Smaller is better.
    Cost,
}

impl Impact {
    /// Returns the single-character symbol used on the command line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }
}

/// Error returned when a token is neither a benefit nor a cost marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownImpact(pub String);

impl fmt::Display for UnknownImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown impact '{}'", self.0)
    }
}

impl std::error::Error for UnknownImpact {}

impl FromStr for Impact {
    type Err = UnknownImpact;

    /// Accepts `+`, `1`, `benefit` and `-`, `-1`, `cost` (trimmed, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "1" | "+1" | "benefit" => Ok(Impact::Benefit),
            "-" | "-1" | "cost" => Ok(Impact::Cost),
            _ => Err(UnknownImpact(s.to_string())),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
