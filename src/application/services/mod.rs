//! Application services.
//!
//! - [`RunOrchestrator`] - Synchronous row loop over a workbook
//! - [`GenerationService`] - Upload handling, archive packaging and cleanup

pub mod generation_service;
pub mod run_orchestrator;

pub use generation_service::{GenerationResult, GenerationService};
pub use run_orchestrator::{DEFAULT_INPUT_SHEET, RunOptions, RunOrchestrator, RunReport};
