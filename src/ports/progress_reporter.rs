//! Progress Reporter Port - Stage notifications for the ranking pipeline.

use std::fmt;

/// A completed stage of a ranking run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    LoggerInitialized,
    ArgumentsParsed,
    InputRead,
    ScoresCalculated,
    OutputWritten,
}

impl PipelineStage {
    /// Returns the message shown to the user when the stage completes.
    pub fn message(&self) -> &'static str {
        match self {
            PipelineStage::LoggerInitialized => "Logger Initialized",
            PipelineStage::ArgumentsParsed => "Parsed Arguments",
            PipelineStage::InputRead => "Read Input",
            PipelineStage::ScoresCalculated => "TOPSIS Calculated",
            PipelineStage::OutputWritten => "Output Generated",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Port notified as each pipeline stage completes.
pub trait ProgressReporter {
    /// Called once per completed stage.
    fn stage_completed(&self, stage: PipelineStage);
}
