//! DTOs for the upload endpoint.

use serde::Serialize;

use crate::domain::entities::SummaryEntry;

/// Successful generation response.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub download_url: String,
    pub file_count: usize,
    /// One entry per processed input row, in input order.
    pub summary: Vec<SummaryItem>,
}

/// Summary row as returned to the client.
#[derive(Debug, Serialize)]
pub struct SummaryItem {
    pub tal_name: String,
    pub countries: String,
    pub campaign: String,
    pub file_created: String,
    pub domain_count: Option<usize>,
    pub details: String,
}

impl From<SummaryEntry> for SummaryItem {
    fn from(entry: SummaryEntry) -> Self {
        Self {
            tal_name: entry.entity_name,
            countries: entry.countries_raw,
            campaign: entry.campaign_name,
            file_created: entry.status.to_string(),
            domain_count: entry.domain_count,
            details: entry.diagnostic,
        }
    }
}
