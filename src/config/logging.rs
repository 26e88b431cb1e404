//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where and how verbosely the log file is written
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log file, opened in append mode
    #[serde(default = "default_file")]
    pub file: String,

    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.file"));
        }
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.level"));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            level: default_level(),
        }
    }
}

fn default_file() -> String {
    "topsis_log.txt".to_string()
}

fn default_level() -> String {
    "warn".to_string()
}
