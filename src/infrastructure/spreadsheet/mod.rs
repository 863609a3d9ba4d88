//! Spreadsheet reading and writing.
//!
//! - [`CalamineWorkbook`] - Reads uploaded `.xlsx`/`.xls` files
//! - [`MemoryWorkbook`] - In-memory sheets (example template)
//! - [`xlsx_writer`] - Writes domain lists, the run summary and templates

mod calamine_workbook;
mod memory_workbook;
pub mod xlsx_writer;

pub use calamine_workbook::CalamineWorkbook;
pub use memory_workbook::MemoryWorkbook;
