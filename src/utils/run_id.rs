//! Run identifier generation and archive naming.
//!
//! Every processing run gets its own identifier, used for the run's working
//! directory and for the name of the archive handed back to the client.

use chrono::{DateTime, Local};
use regex::Regex;
use std::sync::LazyLock;

/// Number of random bytes appended to the timestamp (hex-encoded).
const SUFFIX_BYTES: usize = 3;

/// Prefix of every generated archive file name.
pub const ARCHIVE_PREFIX: &str = "domain_files_";

/// Pattern every downloadable archive name must match.
pub static ARCHIVE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^domain_files_[0-9]{8}_[0-9]{6}_[0-9a-f]{6}\.zip$").unwrap()
});

/// Generates a new run identifier of the form `YYYYmmdd_HHMMSS_xxxxxx`.
///
/// The timestamp keeps archives sortable, the random hex suffix keeps two runs
/// started within the same second apart.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_run_id() -> String {
    run_id_at(Local::now())
}

fn run_id_at(now: DateTime<Local>) -> String {
    let mut buffer = [0u8; SUFFIX_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    format!("{}_{}", now.format("%Y%m%d_%H%M%S"), hex::encode(buffer))
}

/// Returns the archive file name for a run.
pub fn archive_file_name(run_id: &str) -> String {
    format!("{ARCHIVE_PREFIX}{run_id}.zip")
}

/// Returns `true` if `name` looks like an archive produced by this service.
pub fn is_archive_file_name(name: &str) -> bool {
    ARCHIVE_NAME_REGEX.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_run_id_format() {
        let now = Local.with_ymd_and_hms(2025, 3, 7, 9, 5, 1).unwrap();
        let id = run_id_at(now);

        assert!(id.starts_with("20250307_090501_"));
        assert_eq!(id.len(), "20250307_090501_".len() + SUFFIX_BYTES * 2);
    }

    #[test]
    fn test_run_ids_are_unique() {
        let a = generate_run_id();
        let b = generate_run_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_archive_name_round_trip() {
        let id = generate_run_id();
        let name = archive_file_name(&id);
        assert!(is_archive_file_name(&name));
    }

    #[test]
    fn test_archive_name_rejects_foreign_names() {
        assert!(!is_archive_file_name("../secret.zip"));
        assert!(!is_archive_file_name("domain_files_20250101_000000.zip"));
        assert!(!is_archive_file_name("domain_files_20250101_000000_ABCDEF.zip"));
        assert!(!is_archive_file_name("Master_Results.xlsx"));
    }
}
