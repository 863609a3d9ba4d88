//! Handler for workbook uploads.

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde_json::json;

use crate::api::dto::upload::{SummaryItem, UploadResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::file_name::has_spreadsheet_extension;

/// Multipart field carrying the workbook.
const FILE_FIELD: &str = "file";

/// Processes an uploaded workbook and returns a link to the result archive.
///
/// # Endpoint
///
/// `POST /upload` (multipart, field `file`)
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Successfully created 1 domain file(s)",
///   "download_url": "/download-result/domain_files_20250307_090501_a1b2c3.zip",
///   "file_count": 1,
///   "summary": [
///     {
///       "tal_name": "TAL1",
///       "countries": "USA, Germany",
///       "campaign": "CampaignX",
///       "file_created": "Yes",
///       "domain_count": 2,
///       "details": "Yes"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 400 if the `file` field is missing, has no name, is not `.xlsx`/`.xls`,
///   or the workbook has no input sheet
/// - 413 if the body exceeds the configured upload limit
/// - 500 on unexpected processing failures
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let contents = field.bytes().await?;
        upload = Some((file_name, contents));
        break;
    }

    let Some((file_name, contents)) = upload else {
        return Err(AppError::bad_request("No file uploaded", json!({})));
    };

    if file_name.trim().is_empty() {
        return Err(AppError::bad_request("No file selected", json!({})));
    }

    if !has_spreadsheet_extension(&file_name) {
        return Err(AppError::bad_request(
            "Please upload an Excel file (.xlsx or .xls)",
            json!({ "file_name": file_name }),
        ));
    }

    let result = state
        .generation_service
        .process_upload(&file_name, contents.to_vec())
        .await?;

    Ok(Json(UploadResponse {
        success: true,
        message: format!(
            "Successfully created {} domain file(s)",
            result.files_created
        ),
        download_url: format!("/download-result/{}", result.archive_name),
        file_count: result.files_created,
        summary: result.summary.into_iter().map(SummaryItem::from).collect(),
    }))
}
