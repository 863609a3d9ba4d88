//! Output of per-entity domain lists.

use crate::domain::entities::Artifact;

/// Errors raised while writing an artifact.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet write error: {0}")]
    Spreadsheet(String),
}

/// Destination for resolved domain lists.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FsArtifactSink`] - One `.xlsx` per entity on disk
/// - [`crate::infrastructure::storage::MemoryArtifactSink`] - Keeps lists in memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactSink {
    /// Writes a single-column domain list for `entity` under `campaign`.
    ///
    /// Domains are written one per row, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the artifact cannot be written. The caller
    /// records the failure for this row and carries on.
    fn write_domain_list(
        &mut self,
        campaign: &str,
        entity: &str,
        domains: &[String],
    ) -> Result<Artifact, SinkError>;
}
