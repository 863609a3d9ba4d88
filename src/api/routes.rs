//! API route configuration.

use crate::api::handlers::{
    download_result_handler, download_template_handler, health_handler, upload_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Upload route. Rate limiting and the body limit are applied by
/// [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST /upload` - Process a workbook, respond with summary and download URL
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/upload", post(upload_handler))
}

/// Download and status routes.
///
/// # Endpoints
///
/// - `GET /download-result/{file}` - Result archive of an earlier upload
/// - `GET /download-template`      - Example input workbook
/// - `GET /health`                 - Working directory checks
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/download-result/{file}", get(download_result_handler))
        .route("/download-template", get(download_template_handler))
        .route("/health", get(health_handler))
}
