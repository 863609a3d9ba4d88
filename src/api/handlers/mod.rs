//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod download;
pub mod health;
pub mod upload;

pub use download::{download_result_handler, download_template_handler};
pub use health::health_handler;
pub use upload::upload_handler;
