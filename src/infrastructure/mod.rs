//! Infrastructure layer for external integrations.
//!
//! This layer implements the collaborator traits defined by the domain layer
//! on top of real spreadsheets and the local filesystem.
//!
//! # Modules
//!
//! - [`spreadsheet`] - Workbook reading (calamine) and writing (rust_xlsxwriter)
//! - [`storage`] - Artifact sinks, archive packaging and housekeeping
//! - [`template`] - The downloadable example workbook

pub mod spreadsheet;
pub mod storage;
pub mod template;
