//! Read access to the uploaded workbook.

use crate::domain::entities::{CampaignRow, TalRow};

/// Lazily produced rows of one campaign sheet, header excluded.
pub type CampaignRows = Box<dyn Iterator<Item = CampaignRow> + Send>;

/// Errors raised while reading workbook contents.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Unable to open workbook: {0}")]
    Open(String),

    #[error("Excel file must contain '{0}'")]
    SheetNotFound(String),

    #[error("Failed to read sheet '{sheet}': {reason}")]
    Read { sheet: String, reason: String },
}

/// Sheet-level read access used by the run orchestrator.
///
/// Row numbering follows the spreadsheet convention: row 1 is the header and is
/// never returned, data starts at row 2.
///
/// # Implementations
///
/// - [`crate::infrastructure::spreadsheet::CalamineWorkbook`] - `.xlsx`/`.xls` files on disk
/// - [`crate::infrastructure::spreadsheet::MemoryWorkbook`] - In-memory sheets (template, tests)
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait WorkbookSource {
    /// Returns true if a sheet with exactly this name exists.
    fn has_sheet(&self, name: &str) -> bool;

    /// Reads every data row of the input sheet (first three columns).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::SheetNotFound`] if the sheet is absent and
    /// [`SourceError::Read`] if it cannot be decoded.
    fn tal_rows(&mut self, sheet: &str) -> Result<Vec<TalRow>, SourceError>;

    /// Opens a campaign sheet and iterates its (country, domain) rows.
    ///
    /// The iterator may run far past the last populated row; callers decide
    /// when to stop.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the sheet cannot be opened or decoded.
    fn campaign_rows(&mut self, campaign: &str) -> Result<CampaignRows, SourceError>;
}
