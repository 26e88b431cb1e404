use thiserror::Error;

use crate::application::RankingError;
use crate::cli::ArgumentError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Any failure that ends a `topsis` run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Ranking(#[from] RankingError),
}

impl AppError {
    /// Short machine-friendly category, recorded with the log event.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Telemetry(_) => "telemetry",
            AppError::Argument(_) => "argument",
            AppError::Ranking(RankingError::Read(_)) => "read",
            AppError::Ranking(RankingError::Validation(_)) => "validation",
            AppError::Ranking(RankingError::Write(_)) => "write",
        }
    }
}
