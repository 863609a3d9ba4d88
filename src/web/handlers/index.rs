//! Upload page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the upload page.
///
/// Renders `templates/index.html`: the upload form, a link to the example
/// template and a results table filled in by the page script from the
/// `POST /upload` response.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub max_upload_mb: usize,
    pub version: &'static str,
}

/// Renders the upload page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        max_upload_mb: state.max_upload_bytes.div_ceil(1024 * 1024),
        version: env!("CARGO_PKG_VERSION"),
    }
}
