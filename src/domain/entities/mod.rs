//! Core domain entities for the domain generation run.
//!
//! Entities are plain data structures; the logic that builds and consumes them
//! lives in [`crate::domain::index_builder`], [`crate::domain::resolver`] and
//! [`crate::domain::classifier`].
//!
//! # Entity Types
//!
//! - [`TalRow`] / [`CampaignRow`] - Rows as read from the workbook
//! - [`CampaignIndex`] - Country → domain table for one campaign
//! - [`ResolutionOutcome`] - Tagged result of resolving one row
//! - [`SummaryEntry`] - One line of the run summary log
//! - [`Artifact`] - A per-entity domain list written during a run

pub mod campaign_index;
pub mod resolution;
pub mod summary;
pub mod tal_row;

pub use campaign_index::{CampaignIndex, DomainSet};
pub use resolution::{FailureReason, Resolution, ResolutionOutcome};
pub use summary::{Artifact, Classification, RowStatus, SummaryEntry};
pub use tal_row::{CampaignRow, TalRow};
