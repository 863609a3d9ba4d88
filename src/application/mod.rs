//! Application layer coordinating the domain engine and infrastructure.
//!
//! The HTTP handlers only talk to [`services::GenerationService`]; it stores
//! uploads, runs [`services::RunOrchestrator`] on a blocking worker and
//! packages the results.

pub mod error;
pub mod services;

pub use error::ProcessingError;
