//! Domain layer containing the resolution and aggregation engine.
//!
//! Everything in this module is synchronous and free of I/O: rows come in
//! through [`repositories::WorkbookSource`], domain lists go out through
//! [`repositories::ArtifactSink`].
//!
//! # Architecture
//!
//! - [`entities`] - Rows, campaign indices, outcomes and summary entries
//! - [`repositories`] - Collaborator traits implemented by the infrastructure layer
//! - [`index_builder`] - Builds a campaign's country → domain table
//! - [`index_cache`] - Run-scoped memoization of built tables
//! - [`resolver`] - Resolves one TAL row into a tagged outcome
//! - [`classifier`] - Maps outcomes to summary status and diagnostic
//!
//! # Processing Flow
//!
//! 1. [`crate::application::services::RunOrchestrator`] reads TAL rows
//! 2. Each referenced campaign is indexed once via [`index_cache::CampaignIndexCache`]
//! 3. [`resolver::resolve_row`] produces a [`entities::ResolutionOutcome`]
//! 4. [`classifier::classify`] turns it into a [`entities::SummaryEntry`]

pub mod classifier;
pub mod entities;
pub mod index_builder;
pub mod index_cache;
pub mod repositories;
pub mod resolver;
