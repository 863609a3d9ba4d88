//! `.xlsx` output via rust_xlsxwriter: domain lists, run summary, templates.

use rust_xlsxwriter::{
    Color, DocProperties, ExcelDateTime, Format, FormatAlign, Workbook, Worksheet, XlsxError,
};
use std::path::Path;

use super::MemoryWorkbook;
use crate::domain::entities::SummaryEntry;

/// Header row of the run summary workbook.
pub const SUMMARY_HEADERS: [&str; 6] = [
    "TAL Name",
    "Countries",
    "Campaign (Sales Play)",
    "File Created",
    "Domain Count",
    "Details",
];

/// Name of the sheet holding the run summary.
pub const SUMMARY_SHEET: &str = "Results";

const HEADER_BACKGROUND: u32 = 0x001B47;

/// Creates a workbook whose document properties carry a fixed creation time,
/// so the same content always saves to the same bytes.
fn new_workbook() -> Result<Workbook, XlsxError> {
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let mut workbook = Workbook::new();
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));
    Ok(workbook)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_BACKGROUND))
        .set_align(FormatAlign::Center)
}

fn write_header(worksheet: &mut Worksheet, headers: &[&str]) -> Result<(), XlsxError> {
    let format = header_format();
    for (col, title) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &format)?;
    }
    Ok(())
}

/// Writes a single-column domain list, one domain per row, no header.
pub fn write_domain_list(path: &Path, domains: &[String]) -> Result<(), XlsxError> {
    let mut workbook = new_workbook()?;
    let worksheet = workbook.add_worksheet();

    for (row, domain) in domains.iter().enumerate() {
        worksheet.write_string(row as u32, 0, domain)?;
    }
    worksheet.set_column_width(0, 40)?;

    workbook.save(path)
}

/// Writes the run summary, one row per processed TAL row, in input order.
pub fn write_summary(path: &Path, entries: &[SummaryEntry]) -> Result<(), XlsxError> {
    let mut workbook = new_workbook()?;
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SUMMARY_SHEET)?;

    write_header(worksheet, &SUMMARY_HEADERS)?;

    for (offset, entry) in entries.iter().enumerate() {
        let row = offset as u32 + 1;
        worksheet.write_string(row, 0, &entry.entity_name)?;
        worksheet.write_string(row, 1, &entry.countries_raw)?;
        worksheet.write_string(row, 2, &entry.campaign_name)?;
        worksheet.write_string(row, 3, entry.status.as_str())?;
        if let Some(count) = entry.domain_count {
            worksheet.write_number(row, 4, count as f64)?;
        }
        worksheet.write_string(row, 5, &entry.diagnostic)?;
    }

    for (col, width) in [20.0, 30.0, 35.0, 15.0, 15.0, 40.0].into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width)?;
    }

    workbook.save(path)
}

/// Renders an in-memory workbook to `.xlsx` bytes.
///
/// Row 0 of every sheet is written as a styled header. Empty cells are left
/// blank rather than written as empty strings.
pub fn workbook_to_buffer(source: &MemoryWorkbook) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = build_workbook(source)?;
    workbook.save_to_buffer()
}

/// Saves an in-memory workbook to disk. See [`workbook_to_buffer`].
pub fn save_workbook(source: &MemoryWorkbook, path: &Path) -> Result<(), XlsxError> {
    let mut workbook = build_workbook(source)?;
    workbook.save(path)
}

fn build_workbook(source: &MemoryWorkbook) -> Result<Workbook, XlsxError> {
    let mut workbook = new_workbook()?;

    for name in source.sheet_names() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;

        let rows = source.rows(name).unwrap_or_default();
        let Some((header, data)) = rows.split_first() else {
            continue;
        };

        let header: Vec<&str> = header.iter().map(String::as_str).collect();
        write_header(worksheet, &header)?;

        for (offset, cells) in data.iter().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string(offset as u32 + 1, col as u16, value)?;
                }
            }
        }

        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        for col in 0..widest {
            worksheet.set_column_width(col as u16, if col < 2 { 25 } else { 35 })?;
        }
    }

    Ok(workbook)
}
