//! File and directory name sanitization for generated artifacts.

use regex::Regex;
use std::sync::LazyLock;

/// Characters that are unsafe in file names on at least one supported platform.
static UNSAFE_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1F\x7F]"#).unwrap());

/// Name used when sanitization leaves nothing behind.
pub const FALLBACK_NAME: &str = "Unnamed";

/// Strips filesystem-unsafe characters from an entity or campaign name.
///
/// # Rules
///
/// - Removes `< > : " / \ | ? *` and control characters
/// - Trims surrounding whitespace and trailing dots
/// - Rejects `.` / `..` style results
/// - Falls back to [`FALLBACK_NAME`] when nothing usable remains
///
/// The result is deterministic: the same input always maps to the same name.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_file_name("Tech/APAC: Q1?"), "TechAPAC Q1");
/// assert_eq!(sanitize_file_name("Migrate & Modernize ENT"), "Migrate & Modernize ENT");
/// assert_eq!(sanitize_file_name("..."), "Unnamed");
/// ```
pub fn sanitize_file_name(raw: &str) -> String {
    let stripped = UNSAFE_CHARS_REGEX.replace_all(raw, "");
    let cleaned = stripped.trim().trim_end_matches(['.', ' ']).trim();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        FALLBACK_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Returns `true` if the upload file name has a spreadsheet extension.
///
/// Accepts `.xlsx` and `.xls`, case-insensitively.
pub fn has_spreadsheet_extension(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    lower.ends_with(".xlsx") || lower.ends_with(".xls")
}

/// Name under which an upload is stored for a run.
///
/// Prefixed with the run id and sanitized; the extension is lowercased so that
/// format detection works for names like `TALS.XLSX`.
pub fn stored_upload_name(run_id: &str, original: &str) -> String {
    let sanitized = sanitize_file_name(original);
    let name = match sanitized.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}.{}", ext.to_ascii_lowercase()),
        None => sanitized,
    };
    format!("{run_id}_{name}")
}
