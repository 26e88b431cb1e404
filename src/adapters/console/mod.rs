//! Console Adapters
//!
//! `ProgressReporter` implementations: one printing check-marked stage
//! messages (stdout by default), one recording stages in memory for tests.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::ports::{PipelineStage, ProgressReporter};

/// Prints `✔ <stage message>` for every completed stage and a single
/// `✗ Error:` line on failure.
pub struct ConsoleReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    /// Reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Reporter writing to any sink.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Formats the success line for a stage.
    pub fn success_line(stage: PipelineStage) -> String {
        format!("✔ {}", stage.message())
    }

    /// Formats the failure line pointing the user at the log file.
    pub fn error_line(error: &dyn std::fmt::Display, log_file: &str) -> String {
        format!("✗ Error: {}, check {} for more details", error, log_file)
    }

    /// Prints the failure line.
    pub fn report_error(&self, error: &dyn std::fmt::Display, log_file: &str) {
        self.print(&Self::error_line(error, log_file));
    }

    // Best effort: write failures are ignored.
    fn print(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ProgressReporter for ConsoleReporter {
    fn stage_completed(&self, stage: PipelineStage) {
        self.print(&Self::success_line(stage));
    }
}

/// Records completed stages in order.
#[derive(Debug, Default)]
pub struct InMemoryReporter {
    stages: Mutex<Vec<PipelineStage>>,
}

impl InMemoryReporter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stages seen so far.
    pub fn stages(&self) -> Vec<PipelineStage> {
        self.stages
            .lock()
            .map(|stages| stages.clone())
            .unwrap_or_default()
    }
}

impl ProgressReporter for InMemoryReporter {
    fn stage_completed(&self, stage: PipelineStage) {
        if let Ok(mut stages) = self.stages.lock() {
            stages.push(stage);
        }
    }
}
