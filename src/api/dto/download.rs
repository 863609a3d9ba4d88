//! DTOs for result downloads.

use serde::Deserialize;
use validator::Validate;

use crate::utils::run_id::ARCHIVE_NAME_REGEX;

/// Path parameters of `GET /download-result/{file}`.
#[derive(Debug, Deserialize, Validate)]
pub struct DownloadPath {
    #[validate(regex(path = *ARCHIVE_NAME_REGEX, message = "Not a result archive name"))]
    pub file: String,
}
