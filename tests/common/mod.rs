#![allow(dead_code)]

use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use calamine::{Data, Reader, Xlsx};
use domain_generator::application::services::{GenerationService, RunOptions};
use domain_generator::infrastructure::spreadsheet::{MemoryWorkbook, xlsx_writer};
use domain_generator::routes::base_router;
use domain_generator::state::AppState;
use std::io::{Cursor, Read};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use zip::ZipArchive;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub fn create_test_state(root: &Path) -> AppState {
    create_test_state_with_limit(root, 16 * 1024 * 1024)
}

pub fn create_test_state_with_limit(root: &Path, max_upload_bytes: usize) -> AppState {
    let service = GenerationService::new(
        root.join("uploads"),
        root.join("outputs"),
        Duration::from_secs(3600),
        RunOptions::default(),
    );
    AppState::new(service, max_upload_bytes)
}

/// Full router (without rate limiting) over a fresh temporary directory.
pub fn create_test_server() -> (TestServer, TempDir) {
    let dir = TempDir::new().unwrap();
    let server = TestServer::new(base_router(create_test_state(dir.path()))).unwrap();
    (server, dir)
}

/// Input workbook exercising every outcome.
///
/// | Row | TAL   | Countries    | Campaign  | Expected                        |
/// |-----|-------|--------------|-----------|---------------------------------|
/// | 2   | TAL1  | USA, Germany | CampaignX | Yes, 2, duplicate               |
/// | 3   | TAL2  | Mexico       | CampaignX | No, 0                           |
/// | 4   | TAL3  | USA          |           | No, missing campaign            |
/// | 5   | -     | -            | -         | skipped                         |
/// | 6   | TAL4  | usa, Peru    | CampaignX | Partial, 1                      |
/// | 7   | TAL5  | USA          | Ghost     | No, missing sheet               |
/// | 8   | TAL6  | UK           | Campaign Y| Yes, 1, no duplicate            |
pub fn sample_workbook() -> MemoryWorkbook {
    MemoryWorkbook::new()
        .with_sheet(
            "Sheet1",
            &[
                &["TAL Name", "Countries", "Campaign (Sales Play)"],
                &["TAL1", "USA, Germany", "CampaignX"],
                &["TAL2", "Mexico", "CampaignX"],
                &["TAL3", "USA", ""],
                &["", "", ""],
                &["TAL4", "usa, Peru", "CampaignX"],
                &["TAL5", "USA", "Ghost"],
                &["TAL6", "UK", "Campaign Y"],
            ],
        )
        .with_sheet(
            "CampaignX",
            &[
                &["Country", "Domain"],
                &["USA", "microsoft.com"],
                &["Germany", "microsoft.com"],
                &["Germany", "bmw.com"],
            ],
        )
        .with_sheet(
            "Campaign Y",
            &[&["Country", "Domain"], &["United Kingdom", "x.com"], &["UK", "bp.com"]],
        )
}

pub fn sample_workbook_bytes() -> Vec<u8> {
    xlsx_writer::workbook_to_buffer(&sample_workbook()).unwrap()
}

pub fn upload_form(file_name: &str, bytes: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes).file_name(file_name).mime_type(XLSX_MIME),
    )
}

/// Entry names of a zip archive, in archive order.
pub fn zip_entries(bytes: &[u8]) -> Vec<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

/// Raw bytes of one archive entry.
pub fn zip_entry(bytes: &[u8], name: &str) -> Vec<u8> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut out = Vec::new();
    entry.read_to_end(&mut out).unwrap();
    out
}

/// All cells of the first sheet of an `.xlsx`, rendered as strings.
pub fn sheet_cells(xlsx: Vec<u8>) -> Vec<Vec<String>> {
    let mut workbook = Xlsx::new(Cursor::new(xlsx)).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect()
}
