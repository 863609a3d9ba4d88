//! Browser UI.
//!
//! A single upload page rendered with Askama; the page talks to the JSON
//! endpoints in [`crate::api`].
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
