//! # Domain Generator
//!
//! Turns a workbook of TAL (target account list) rows into per-entity domain
//! list spreadsheets, bundled with a summary into a zip archive. Served over
//! HTTP with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Country normalization, campaign indexing,
//!   row resolution and classification; synchronous and I/O free
//! - **Application Layer** ([`application`]) - Run orchestration and the
//!   upload-to-archive pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - Workbook reading/writing,
//!   artifact storage, archive packaging
//! - **API Layer** ([`api`]) - Upload, download and health endpoints
//! - **Web Layer** ([`web`]) - HTML upload page
//!
//! ## Input Workbook
//!
//! - `Sheet1`: `TAL Name | Countries | Campaign (Sales Play)`, header in row 1
//! - One sheet per campaign: `Country | Domain`, header in row 1
//!
//! ## Quick Start
//!
//! ```bash
//! # Write an example workbook
//! cargo run --bin template -- write
//!
//! # Start the service on 0.0.0.0:5000
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::ProcessingError;
    pub use crate::application::services::{
        GenerationResult, GenerationService, RunOptions, RunOrchestrator, RunReport,
    };
    pub use crate::domain::entities::{ResolutionOutcome, RowStatus, SummaryEntry, TalRow};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
