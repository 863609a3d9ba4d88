//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                       - Upload page
//! - `POST /upload`                 - Workbook upload (rate limited, size limited)
//! - `GET  /download-result/{file}` - Result archive download
//! - `GET  /download-template`      - Example workbook
//! - `GET  /health`                 - Working directory checks
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on uploads (configurable for proxy deployments)
//! - **Body limit** - `MAX_UPLOAD_BYTES` on the upload request, 413 beyond it
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::Layer;
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and middleware without rate limiting.
///
/// Used by [`app_router`], and directly by tests, which have no peer address
/// to key a rate limiter on.
pub fn base_router(state: AppState) -> Router {
    build(state, |upload| upload)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let router = build(state, |upload| {
        if behind_proxy {
            upload.layer(rate_limit::upload_layer(SmartIpKeyExtractor))
        } else {
            upload.layer(rate_limit::upload_layer(PeerIpKeyExtractor))
        }
    });

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn build<F>(state: AppState, limit_uploads: F) -> Router
where
    F: FnOnce(Router<AppState>) -> Router<AppState>,
{
    let upload = api::routes::upload_routes().layer(DefaultBodyLimit::max(state.max_upload_bytes));

    Router::new()
        .merge(web::routes::public_routes())
        .merge(limit_uploads(upload))
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}
