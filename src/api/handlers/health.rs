//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use std::path::Path;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::infrastructure::storage::housekeeping::ensure_writable;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Both working directories are writable
/// - **503 Service Unavailable**: A directory cannot be created or written
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "upload_dir": { "status": "ok", "message": "uploads" },
///     "output_dir": { "status": "ok", "message": "outputs" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let upload_check = check_dir(state.generation_service.upload_dir()).await;
    let output_check = check_dir(state.generation_service.output_dir()).await;

    let all_healthy = upload_check.status == "ok" && output_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            upload_dir: upload_check,
            output_dir: output_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that a working directory exists and accepts writes.
async fn check_dir(dir: &Path) -> CheckStatus {
    let owned = dir.to_path_buf();
    let result = tokio::task::spawn_blocking(move || ensure_writable(&owned)).await;

    match result {
        Ok(Ok(())) => CheckStatus {
            status: "ok".to_string(),
            message: Some(dir.display().to_string()),
        },
        Ok(Err(e)) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{}: {}", dir.display(), e)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Check failed: {}", e)),
        },
    }
}
