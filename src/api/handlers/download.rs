//! Handlers serving generated files.

use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::download::DownloadPath;
use crate::error::AppError;
use crate::infrastructure::template::TEMPLATE_FILE_NAME;
use crate::state::AppState;

const ZIP_CONTENT_TYPE: &str = "application/zip";
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn attachment(content_type: &'static str, file_name: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        Body::from(bytes),
    )
        .into_response()
}

/// Serves a result archive produced by an earlier upload.
///
/// # Endpoint
///
/// `GET /download-result/{file}`
///
/// # Errors
///
/// - 400 if `file` is not a result archive name
/// - 404 if the archive does not exist (never produced or already swept)
pub async fn download_result_handler(
    State(state): State<AppState>,
    Path(path): Path<DownloadPath>,
) -> Result<Response, AppError> {
    path.validate()?;

    let archive = state
        .generation_service
        .archive_path(&path.file)
        .ok_or_else(|| AppError::bad_request("Invalid file name", json!({ "file": path.file })))?;

    let bytes = match tokio::fs::read(&archive).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::not_found(
                "Result file not found",
                json!({ "file": path.file }),
            ));
        }
        Err(e) => {
            tracing::error!(file = %path.file, error = %e, "Failed to read archive");
            return Err(AppError::internal("Failed to read result file", json!({})));
        }
    };

    Ok(attachment(ZIP_CONTENT_TYPE, &path.file, bytes))
}

/// Serves the example input workbook.
///
/// # Endpoint
///
/// `GET /download-template`
pub async fn download_template_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let bytes = state.generation_service.template_bytes()?;
    Ok(attachment(XLSX_CONTENT_TYPE, TEMPLATE_FILE_NAME, bytes))
}
