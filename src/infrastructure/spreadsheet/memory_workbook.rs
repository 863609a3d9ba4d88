//! In-memory workbook used for the example template and as a row source.

use indexmap::IndexMap;

use crate::domain::entities::{CampaignRow, TalRow};
use crate::domain::repositories::{CampaignRows, SourceError, WorkbookSource};

/// A workbook held entirely in memory: ordered sheets of text rows.
///
/// Row 0 of each sheet is the header. [`crate::infrastructure::template`] builds
/// the example input this way, and [`super::xlsx_writer::save_workbook`] turns
/// it into an `.xlsx` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryWorkbook {
    sheets: IndexMap<String, Vec<Vec<String>>>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a sheet built from string slices.
    pub fn with_sheet(mut self, name: &str, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        self.add_sheet(name, rows);
        self
    }

    /// Adds (or replaces) a sheet.
    pub fn add_sheet(&mut self, name: impl Into<String>, rows: Vec<Vec<String>>) {
        self.sheets.insert(name.into(), rows);
    }

    /// Sheet names in insertion order.
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    /// All rows of a sheet, header included.
    pub fn rows(&self, sheet: &str) -> Option<&[Vec<String>]> {
        self.sheets.get(sheet).map(Vec::as_slice)
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    fn data_rows(&self, sheet: &str) -> Result<&[Vec<String>], SourceError> {
        let rows = self
            .rows(sheet)
            .ok_or_else(|| SourceError::SheetNotFound(sheet.to_string()))?;
        Ok(rows.get(1..).unwrap_or_default())
    }
}

fn cell(row: &[String], col: usize) -> String {
    row.get(col).cloned().unwrap_or_default()
}

impl WorkbookSource for MemoryWorkbook {
    fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    fn tal_rows(&mut self, sheet: &str) -> Result<Vec<TalRow>, SourceError> {
        Ok(self
            .data_rows(sheet)?
            .iter()
            .map(|row| TalRow::new(cell(row, 0), cell(row, 1), cell(row, 2)))
            .collect())
    }

    fn campaign_rows(&mut self, campaign: &str) -> Result<CampaignRows, SourceError> {
        let rows: Vec<CampaignRow> = self
            .data_rows(campaign)?
            .iter()
            .map(|row| CampaignRow::new(cell(row, 0), cell(row, 1)))
            .collect();
        Ok(Box::new(rows.into_iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workbook() -> MemoryWorkbook {
        MemoryWorkbook::new()
            .with_sheet(
                "Sheet1",
                &[
                    &["TAL Name", "Countries", "Campaign"],
                    &["TAL1", "USA"],
                ],
            )
            .with_sheet("Security", &[&["Country", "Domain"], &["USA", "cisco.com"]])
    }

    #[test]
    fn test_short_rows_are_padded() {
        let rows = workbook().tal_rows("Sheet1").unwrap();
        assert_eq!(rows, vec![TalRow::new("TAL1", "USA", "")]);
    }

    #[test]
    fn test_header_is_skipped() {
        let rows: Vec<_> = workbook().campaign_rows("Security").unwrap().collect();
        assert_eq!(rows, vec![CampaignRow::new("USA", "cisco.com")]);
    }

    #[test]
    fn test_sheet_order_and_lookup() {
        let wb = workbook();
        assert_eq!(wb.sheet_names().collect::<Vec<_>>(), vec!["Sheet1", "Security"]);
        assert!(wb.has_sheet("Security"));
        assert!(!wb.has_sheet("security"));
    }

    #[test]
    fn test_missing_sheet_error() {
        let err = workbook().tal_rows("Nope").unwrap_err();
        assert!(matches!(err, SourceError::SheetNotFound(_)));
    }

    #[test]
    fn test_header_only_sheet_is_empty() {
        let mut wb = MemoryWorkbook::new().with_sheet("Sheet1", &[&["TAL Name"]]);
        assert!(wb.tal_rows("Sheet1").unwrap().is_empty());

        let mut empty = MemoryWorkbook::new().with_sheet("Sheet1", &[]);
        assert!(empty.tal_rows("Sheet1").unwrap().is_empty());
    }
}
