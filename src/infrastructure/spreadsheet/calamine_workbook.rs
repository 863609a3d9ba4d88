//! Workbook source backed by calamine (`.xlsx`, `.xlsm`, `.xls`, `.ods`).

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::entities::{CampaignRow, TalRow};
use crate::domain::repositories::{CampaignRows, SourceError, WorkbookSource};

/// Zero-based index of the first data row (row 2 in spreadsheet terms).
const FIRST_DATA_ROW: u32 = 1;

/// An uploaded workbook opened for reading.
///
/// Cell values are read with their cached results (formulas are not evaluated),
/// converted to text and addressed by absolute position, so leading empty rows
/// or columns never shift the layout.
pub struct CalamineWorkbook {
    sheets: Sheets<BufReader<File>>,
    sheet_names: Vec<String>,
}

impl CalamineWorkbook {
    /// Opens a workbook, detecting the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Open`] if the file is missing, not a spreadsheet or
    /// corrupt.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let sheets =
            open_workbook_auto(path.as_ref()).map_err(|e| SourceError::Open(e.to_string()))?;
        let sheet_names = sheets.sheet_names();

        tracing::debug!(sheets = ?sheet_names, "Workbook opened");

        Ok(Self {
            sheets,
            sheet_names,
        })
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    fn range(&mut self, sheet: &str) -> Result<Range<Data>, SourceError> {
        if !self.has_sheet(sheet) {
            return Err(SourceError::SheetNotFound(sheet.to_string()));
        }

        self.sheets
            .worksheet_range(sheet)
            .map_err(|e| SourceError::Read {
                sheet: sheet.to_string(),
                reason: e.to_string(),
            })
    }
}

impl WorkbookSource for CalamineWorkbook {
    fn has_sheet(&self, name: &str) -> bool {
        self.sheet_names.iter().any(|s| s == name)
    }

    fn tal_rows(&mut self, sheet: &str) -> Result<Vec<TalRow>, SourceError> {
        let range = self.range(sheet)?;

        let Some((last_row, _)) = range.end() else {
            return Ok(Vec::new());
        };

        Ok((FIRST_DATA_ROW..=last_row)
            .map(|row| {
                TalRow::new(
                    cell_text(&range, row, 0),
                    cell_text(&range, row, 1),
                    cell_text(&range, row, 2),
                )
            })
            .collect())
    }

    fn campaign_rows(&mut self, campaign: &str) -> Result<CampaignRows, SourceError> {
        let range = self.range(campaign)?;
        Ok(Box::new(RangeRows::new(range)))
    }
}

/// Iterates the (country, domain) columns of a sheet from row 2 downwards.
struct RangeRows {
    range: Range<Data>,
    next_row: u32,
    last_row: Option<u32>,
}

impl RangeRows {
    fn new(range: Range<Data>) -> Self {
        let last_row = range.end().map(|(row, _)| row);
        Self {
            range,
            next_row: FIRST_DATA_ROW,
            last_row,
        }
    }
}

impl Iterator for RangeRows {
    type Item = CampaignRow;

    fn next(&mut self) -> Option<Self::Item> {
        let last_row = self.last_row?;
        if self.next_row > last_row {
            return None;
        }

        let row = self.next_row;
        self.next_row += 1;

        Some(CampaignRow::new(
            cell_text(&self.range, row, 0),
            cell_text(&self.range, row, 1),
        ))
    }
}

/// Text of the cell at an absolute position; empty for blank or absent cells.
fn cell_text(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
