//! Command line front end: `topsis <input> <weights> <impacts> <output>`.
//!
//! Prints a check-marked line per completed stage. Any failure is logged to
//! the configured log file and reported as a single `✗ Error:` line, after
//! which the process exits with code -1.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::Parser;
use thiserror::Error;
use tracing::{error, error_span, info};

use crate::adapters::{
    ConsoleReporter, CsvTableWriter, FileTableReader, FileTableWriter, JsonTableWriter,
};
use crate::application::{RankAlternativesCommand, RankAlternativesHandler, RankingSummary};
use crate::config::{AppConfig, ConfigError, LoggingConfig};
use crate::error::AppError;
use crate::ports::{PipelineStage, ProgressReporter};
use crate::telemetry;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for any failed run.
pub const EXIT_FAILURE: i32 = -1;

#[derive(Parser, Debug)]
#[command(
    name = "topsis",
    about = "Rank alternatives in a decision table with TOPSIS",
    version
)]
pub struct Cli {
    /// Input table (.csv, or .xlsx/.xls/.ods for spreadsheets)
    pub input: PathBuf,

    /// Comma-separated positive weights, one per criterion (e.g. "1,1,2")
    #[arg(allow_hyphen_values = true)]
    pub weights: String,

    /// Comma-separated impacts, '+' for benefit and '-' for cost (e.g. "+,-,+")
    #[arg(allow_hyphen_values = true)]
    pub impacts: String,

    /// Output file (.csv, or .json for a JSON array of row objects)
    pub output: PathBuf,
}

/// Malformed command line arguments.
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("Wrong number of arguments")]
    WrongArgumentCount,

    #[error("{0}")]
    Usage(String),

    #[error("{0} list is empty")]
    Empty(&'static str),

    #[error("Weight {position} is not a positive number: '{value}'")]
    InvalidWeight { position: usize, value: String },

    #[error("Not all values are either + or - in Impacts (impact {position}: '{value}')")]
    InvalidImpactSymbol { position: usize, value: String },
}

impl ArgumentError {
    fn from_clap(err: &clap::Error) -> Self {
        match err.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues => ArgumentError::WrongArgumentCount,
            _ => ArgumentError::Usage(
                err.to_string()
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches("error: ")
                    .to_string(),
            ),
        }
    }
}

impl Cli {
    /// Converts the raw arguments into a ranking command.
    pub fn into_command(self) -> Result<RankAlternativesCommand, ArgumentError> {
        Ok(RankAlternativesCommand {
            weights: parse_weights(&self.weights)?,
            impacts: parse_impacts(&self.impacts)?,
            input: self.input,
            output: self.output,
        })
    }
}

/// Parses `"1,1,2"` into weights. Every entry must be a finite number > 0.
pub fn parse_weights(raw: &str) -> Result<Vec<f64>, ArgumentError> {
    if raw.trim().is_empty() {
        return Err(ArgumentError::Empty("Weights"));
    }

    raw.split(',')
        .enumerate()
        .map(|(index, item)| {
            let item = item.trim();
            match item.parse::<f64>() {
                Ok(weight) if weight.is_finite() && weight > 0.0 => Ok(weight),
                _ => Err(ArgumentError::InvalidWeight {
                    position: index + 1,
                    value: item.to_string(),
                }),
            }
        })
        .collect()
}

/// Parses `"+,-,+"` into impact tokens. Only `+` and `-` are accepted here;
/// the richer token set is for library callers.
pub fn parse_impacts(raw: &str) -> Result<Vec<String>, ArgumentError> {
    if raw.trim().is_empty() {
        return Err(ArgumentError::Empty("Impacts"));
    }

    raw.split(',')
        .enumerate()
        .map(|(index, item)| match item.trim() {
            symbol @ ("+" | "-") => Ok(symbol.to_string()),
            other => Err(ArgumentError::InvalidImpactSymbol {
                position: index + 1,
                value: other.to_string(),
            }),
        })
        .collect()
}

/// Parses the process arguments. `--help` and `--version` print and exit.
pub fn parse_arguments<I, T>(args: I) -> Result<RankAlternativesCommand, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => cli.into_command(),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => Err(ArgumentError::from_clap(&err)),
    }
}

/// Runs the whole tool, printing to stdout, and returns the process exit code.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with(args, Arc::new(ConsoleReporter::stdout()))
}

/// Runs the whole tool against the given console and returns the exit code.
///
/// Installs the global log subscriber, so it can succeed once per process.
pub fn run_with<I, T>(args: I, console: Arc<ConsoleReporter>) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            console.report_error(&err, &LoggingConfig::default().file);
            return EXIT_FAILURE;
        }
    };

    if let Err(err) = telemetry::init(&config.logging) {
        console.report_error(&err, &config.logging.file);
        return EXIT_FAILURE;
    }

    // ERROR level so the process context survives the default `warn` filter.
    let (program, pid) = telemetry::process_context();
    let span = error_span!("topsis", %program, pid);
    let _entered = span.enter();
    console.stage_completed(PipelineStage::LoggerInitialized);

    match execute(&config, args, console.clone()) {
        Ok(summary) => {
            info!(
                output = %summary.output.display(),
                alternatives = summary.alternatives,
                best = ?summary.best,
                "Ranking completed"
            );
            EXIT_SUCCESS
        }
        Err(err) => {
            error!(kind = err.kind(), "{err}");
            console.report_error(&err, &config.logging.file);
            EXIT_FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn execute<I, T>(
    config: &AppConfig,
    args: I,
    reporter: Arc<ConsoleReporter>,
) -> Result<RankingSummary, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let command = parse_arguments(args)?;
    info!(
        input = %command.input.display(),
        output = %command.output.display(),
        weights = ?command.weights,
        impacts = ?command.impacts,
        "Parsed arguments"
    );
    reporter.stage_completed(PipelineStage::ArgumentsParsed);

    let delimiter = config.table.delimiter_byte();
    let (score_column, rank_column) = (&config.table.score_column, &config.table.rank_column);
    let csv = CsvTableWriter::new()
        .with_delimiter(delimiter)
        .with_columns(score_column, rank_column);
    let json = JsonTableWriter::new().with_columns(score_column, rank_column);

    let handler = RankAlternativesHandler::new(
        Arc::new(FileTableReader::new(delimiter)),
        Arc::new(FileTableWriter::new(csv, json)),
        reporter,
    );

    Ok(handler.handle(command)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(rest: &[&str]) -> Vec<String> {
        std::iter::once("topsis")
            .chain(rest.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_four_positional_arguments() {
        let command =
            parse_arguments(args(&["data.csv", "1,1,2", "+,-,+", "result.csv"])).unwrap();

        assert_eq!(command.input, PathBuf::from("data.csv"));
        assert_eq!(command.output, PathBuf::from("result.csv"));
        assert_eq!(command.weights, vec![1.0, 1.0, 2.0]);
        assert_eq!(command.impacts, vec!["+", "-", "+"]);
    }

    #[test]
    fn impacts_may_start_with_a_minus() {
        let command = parse_arguments(args(&["data.csv", "1,1", "-,+", "out.csv"])).unwrap();
        assert_eq!(command.impacts, vec!["-", "+"]);
    }

    #[test]
    fn missing_argument_is_wrong_count() {
        let err = parse_arguments(args(&["data.csv", "1,1", "+,-"])).unwrap_err();
        assert_eq!(err, ArgumentError::WrongArgumentCount);
        assert_eq!(err.to_string(), "Wrong number of arguments");
    }

    #[test]
    fn extra_argument_is_wrong_count() {
        let err =
            parse_arguments(args(&["data.csv", "1,1", "+,-", "out.csv", "extra"])).unwrap_err();
        assert_eq!(err, ArgumentError::WrongArgumentCount);
    }

    #[test]
    fn weights_are_trimmed() {
        assert_eq!(parse_weights(" 0.5, 2 ,1e1").unwrap(), vec![0.5, 2.0, 10.0]);
    }

    #[test]
    fn non_positive_or_text_weights_are_rejected() {
        for (raw, position, value) in [
            ("1,0", 2, "0"),
            ("-1,1", 1, "-1"),
            ("1,abc", 2, "abc"),
            ("1,,1", 2, ""),
            ("inf,1", 1, "inf"),
        ] {
            assert_eq!(
                parse_weights(raw),
                Err(ArgumentError::InvalidWeight {
                    position,
                    value: value.to_string()
                }),
                "{raw}"
            );
        }
    }

    #[test]
    fn impacts_accept_only_plus_and_minus() {
        assert_eq!(parse_impacts("+, -").unwrap(), vec!["+", "-"]);

        let err = parse_impacts("+,cost").unwrap_err();
        assert_eq!(
            err,
            ArgumentError::InvalidImpactSymbol {
                position: 2,
                value: "cost".to_string()
            }
        );
        assert!(err
            .to_string()
            .starts_with("Not all values are either + or - in Impacts"));
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert_eq!(parse_weights("  "), Err(ArgumentError::Empty("Weights")));
        assert_eq!(parse_impacts(""), Err(ArgumentError::Empty("Impacts")));
    }
}
