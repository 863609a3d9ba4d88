//! Small helpers shared across layers.
//!
//! - [`country_normalizer`] - Canonical country keys
//! - [`file_name`] - Filesystem-safe names and upload extension checks
//! - [`run_id`] - Run identifiers and archive naming

pub mod country_normalizer;
pub mod file_name;
pub mod run_id;
