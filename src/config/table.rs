//! Table input/output configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Delimiter and appended column names for tabular files
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    /// Field delimiter for CSV input and output
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Header of the appended score column
    #[serde(default = "default_score_column")]
    pub score_column: String,

    /// Header of the appended rank column
    #[serde(default = "default_rank_column")]
    pub rank_column: String,
}

impl TableConfig {
    /// Delimiter as a byte; falls back to a comma if invalid.
    pub fn delimiter_byte(&self) -> u8 {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => *byte,
            _ => b',',
        }
    }

    /// Validate table configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !matches!(self.delimiter.as_bytes(), [byte] if byte.is_ascii()) {
            return Err(ValidationError::InvalidDelimiter(self.delimiter.clone()));
        }
        if self.score_column.trim().is_empty() {
            return Err(ValidationError::MissingRequired("table.score_column"));
        }
        if self.rank_column.trim().is_empty() {
            return Err(ValidationError::MissingRequired("table.rank_column"));
        }
        if self.score_column == self.rank_column {
            return Err(ValidationError::DuplicateColumnName);
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            score_column: default_score_column(),
            rank_column: default_rank_column(),
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_score_column() -> String {
    "Score".to_string()
}

fn default_rank_column() -> String {
    "Rank".to_string()
}
