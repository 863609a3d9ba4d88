//! Run summary log entries.

use serde::Serialize;
use std::fmt;

/// Per-row status recorded in the summary log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowStatus {
    /// All requested countries resolved; an artifact was written.
    Yes,
    /// Some countries resolved; an artifact was written from the matched subset.
    Partial,
    /// Nothing resolved; no artifact.
    No,
    /// Domains resolved but writing the artifact failed.
    Error,
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Partial => "Partial",
            Self::No => "No",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status, domain count and diagnostic for one processed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: RowStatus,
    pub domain_count: Option<usize>,
    pub diagnostic: String,
}

/// One line of the summary log, appended in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub entity_name: String,
    pub countries_raw: String,
    pub campaign_name: String,
    pub status: RowStatus,
    pub domain_count: Option<usize>,
    pub diagnostic: String,
}

/// A per-entity artifact written during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Sanitized campaign directory name.
    pub campaign_dir: String,
    /// Sanitized, per-campaign unique file name.
    pub file_name: String,
}

impl Artifact {
    /// Path relative to the run directory (and archive root), `/`-separated.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.campaign_dir, self.file_name)
    }
}
