//! Run-level error type for the application layer.

use crate::domain::repositories::SourceError;

/// Errors that abort a whole processing run.
///
/// Row-level problems never surface here; they are recorded in the summary log.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    /// The input workbook is unreadable or lacks the input sheet.
    #[error("{0}")]
    InvalidWorkbook(#[source] SourceError),

    /// A campaign sheet exists but could not be read.
    #[error("Failed to read campaign sheet: {0}")]
    CampaignRead(#[source] SourceError),

    /// The summary or archive could not be produced.
    #[error("Failed to write results: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking worker running the job panicked or was cancelled.
    #[error("Processing task failed: {0}")]
    Task(String),
}

impl ProcessingError {
    /// Returns true for faults caused by the uploaded file itself.
    ///
    /// Structural faults are reported to the client as validation errors; all
    /// others are internal errors.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::InvalidWorkbook(_))
    }
}
