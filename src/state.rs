use std::sync::Arc;

use crate::application::services::GenerationService;
use crate::config::Config;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    /// Request body limit for `POST /upload`, also shown on the upload page.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(generation_service: GenerationService, max_upload_bytes: usize) -> Self {
        Self {
            generation_service: Arc::new(generation_service),
            max_upload_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            GenerationService::from_config(config),
            config.max_upload_bytes,
        )
    }
}
