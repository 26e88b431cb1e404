//! RankAlternativesHandler - Read, score and write a decision table.
//!
//! Runs the pipeline end to end:
//! 1. Load the decision table through the `TableReader` port
//! 2. Validate and score it with `TopsisAnalyzer`
//! 3. Persist the scored table through the `TableWriter` port
//!
//! Each completed stage is reported to the `ProgressReporter`. The first
//! failure aborts the run; nothing is written after a failed stage.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::analysis::{ScoredTable, TopsisAnalyzer};
use crate::domain::foundation::ValidationError;
use crate::ports::{
    PipelineStage, ProgressReporter, TableReadError, TableReader, TableWriteError, TableWriter,
};

/// Command to rank the alternatives of one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct RankAlternativesCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    pub weights: Vec<f64>,
    /// Raw impact tokens, resolved by the validator.
    pub impacts: Vec<String>,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingSummary {
    pub output: PathBuf,
    pub alternatives: usize,
    /// Identifiers of the rank-1 alternatives.
    pub best: Vec<String>,
    /// Alternatives whose score is NaN.
    pub unranked: usize,
}

impl RankingSummary {
    fn from_table(output: PathBuf, table: &ScoredTable) -> Self {
        Self {
            output,
            alternatives: table.rows.len(),
            best: table
                .best()
                .into_iter()
                .map(|row| row.alternative.id.clone())
                .collect(),
            unranked: table.unranked_count(),
        }
    }
}

/// Errors that abort a ranking run.
#[derive(Debug, Error)]
pub enum RankingError {
    #[error(transparent)]
    Read(#[from] TableReadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Write(#[from] TableWriteError),
}

/// Handles `RankAlternativesCommand`s.
pub struct RankAlternativesHandler {
    reader: Arc<dyn TableReader>,
    writer: Arc<dyn TableWriter>,
    reporter: Arc<dyn ProgressReporter>,
}

impl RankAlternativesHandler {
    /// Creates a new RankAlternativesHandler.
    pub fn new(
        reader: Arc<dyn TableReader>,
        writer: Arc<dyn TableWriter>,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Self {
        Self {
            reader,
            writer,
            reporter,
        }
    }

    /// Runs the pipeline for one command.
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that fails.
    pub fn handle(&self, cmd: RankAlternativesCommand) -> Result<RankingSummary, RankingError> {
        let table = self.reader.read(&cmd.input)?;
        info!(
            input = %cmd.input.display(),
            alternatives = table.alternative_count(),
            criteria = table.criteria_count(),
            "Read decision table"
        );
        self.reporter.stage_completed(PipelineStage::InputRead);

        let scored = TopsisAnalyzer::analyze(&table, &cmd.weights, &cmd.impacts)?;
        let summary = RankingSummary::from_table(cmd.output.clone(), &scored);
        if summary.unranked > 0 {
            warn!(
                unranked = summary.unranked,
                "Some alternatives have an undefined score (zero-norm column or zero separation)"
            );
        }
        debug!(best = ?summary.best, "Scored alternatives");
        self.reporter.stage_completed(PipelineStage::ScoresCalculated);

        self.writer.write(&cmd.output, &scored)?;
        info!(output = %cmd.output.display(), "Wrote scored table");
        self.reporter.stage_completed(PipelineStage::OutputWritten);

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryReporter;
    use crate::domain::analysis::DecisionTable;
    use std::path::Path;
    use std::sync::Mutex;

    struct FixedReader(Result<DecisionTable, fn(&Path) -> TableReadError>);

    impl TableReader for FixedReader {
        fn read(&self, path: &Path) -> Result<DecisionTable, TableReadError> {
            match &self.0 {
                Ok(table) => Ok(table.clone()),
                Err(make) => Err(make(path)),
            }
        }
    }

    #[derive(Default)]
    struct CapturingWriter {
        written: Mutex<Vec<(PathBuf, ScoredTable)>>,
    }

    impl TableWriter for CapturingWriter {
        fn write(&self, path: &Path, table: &ScoredTable) -> Result<(), TableWriteError> {
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), table.clone()));
            Ok(())
        }
    }

    fn phones() -> DecisionTable {
        DecisionTable::builder()
            .headers(vec!["Model", "Price", "Storage"])
            .row("M1", vec![250.0, 16.0])
            .row("M2", vec![200.0, 16.0])
            .row("M3", vec![300.0, 32.0])
            .build()
    }

    fn command(weights: Vec<f64>, impacts: &[&str]) -> RankAlternativesCommand {
        RankAlternativesCommand {
            input: PathBuf::from("phones.csv"),
            output: PathBuf::from("result.csv"),
            weights,
            impacts: impacts.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn successful_run_reports_every_stage_and_writes_once() {
        let writer = Arc::new(CapturingWriter::default());
        let reporter = Arc::new(InMemoryReporter::new());
        let handler = RankAlternativesHandler::new(
            Arc::new(FixedReader(Ok(phones()))),
            writer.clone(),
            reporter.clone(),
        );

        let summary = handler.handle(command(vec![1.0, 1.0], &["+", "-"])).unwrap();

        assert_eq!(summary.alternatives, 3);
        assert_eq!(summary.best, vec!["M1".to_string()]);
        assert_eq!(summary.unranked, 0);
        assert_eq!(
            reporter.stages(),
            vec![
                PipelineStage::InputRead,
                PipelineStage::ScoresCalculated,
                PipelineStage::OutputWritten
            ]
        );
        let written = writer.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("result.csv"));
        assert_eq!(written[0].1.ranks(), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn validation_failure_writes_nothing() {
        let writer = Arc::new(CapturingWriter::default());
        let reporter = Arc::new(InMemoryReporter::new());
        let handler = RankAlternativesHandler::new(
            Arc::new(FixedReader(Ok(phones()))),
            writer.clone(),
            reporter.clone(),
        );

        let err = handler.handle(command(vec![1.0], &["+"])).unwrap_err();

        match err {
            RankingError::Validation(validation) => assert_eq!(validation.rule(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(reporter.stages(), vec![PipelineStage::InputRead]);
        assert!(writer.written.lock().unwrap().is_empty());
    }

    #[test]
    fn read_failure_stops_before_scoring() {
        let reporter = Arc::new(InMemoryReporter::new());
        let handler = RankAlternativesHandler::new(
            Arc::new(FixedReader(Err(|path: &Path| {
                TableReadError::NotFound(path.to_path_buf())
            }))),
            Arc::new(CapturingWriter::default()),
            reporter.clone(),
        );

        let err = handler.handle(command(vec![1.0, 1.0], &["+", "-"])).unwrap_err();

        assert_eq!(err.to_string(), "input file not found: phones.csv");
        assert!(reporter.stages().is_empty());
    }

    #[test]
    fn nan_scores_are_counted_not_fatal() {
        let table = DecisionTable::builder()
            .headers(vec!["Model", "Price", "Storage"])
            .row("M1", vec![0.0, 1.0])
            .row("M2", vec![0.0, 2.0])
            .build();
        let handler = RankAlternativesHandler::new(
            Arc::new(FixedReader(Ok(table))),
            Arc::new(CapturingWriter::default()),
            Arc::new(InMemoryReporter::new()),
        );

        let summary = handler.handle(command(vec![1.0, 1.0], &["+", "+"])).unwrap();

        assert_eq!(summary.unranked, 2);
        assert!(summary.best.is_empty());
    }
}
