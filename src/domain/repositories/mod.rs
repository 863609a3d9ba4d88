//! Collaborator trait definitions for the domain layer.
//!
//! The resolution engine never touches files directly. It reads rows through a
//! [`WorkbookSource`] and emits per-entity domain lists through an
//! [`ArtifactSink`]; concrete implementations live in
//! `crate::infrastructure::spreadsheet` and `crate::infrastructure::storage`.
//!
//! # Available Traits
//!
//! - [`WorkbookSource`] - Input sheet and campaign sheet access
//! - [`ArtifactSink`] - Per-entity domain list output
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod artifact_sink;
pub mod workbook_source;

pub use artifact_sink::{ArtifactSink, SinkError};
pub use workbook_source::{CampaignRows, SourceError, WorkbookSource};

#[cfg(test)]
pub use artifact_sink::MockArtifactSink;
#[cfg(test)]
pub use workbook_source::MockWorkbookSource;
