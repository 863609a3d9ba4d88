//! On-disk run output.
//!
//! - [`FsArtifactSink`] - Writes per-entity domain lists into a run directory
//! - [`MemoryArtifactSink`] - Same naming rules, kept in memory
//! - [`archive`] - Zips a finished run
//! - [`housekeeping`] - Retention sweep and cleanup helpers

pub mod archive;
mod fs_artifact_sink;
pub mod housekeeping;
mod memory_artifact_sink;

pub use archive::{SUMMARY_FILE_NAME, package_run};
pub use fs_artifact_sink::FsArtifactSink;
pub use memory_artifact_sink::MemoryArtifactSink;
