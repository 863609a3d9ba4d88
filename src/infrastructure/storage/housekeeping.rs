//! Working-directory housekeeping: retention sweep, cleanup, writability probes.

use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime};

use crate::utils::run_id::is_archive_file_name;

/// Removes expired archives and abandoned run directories from `output_dir`.
///
/// Only entries this service creates are considered: files matching the
/// archive naming pattern and directories (per-run scratch space). Anything
/// modified less than `max_age` ago is kept. Individual failures are logged
/// and skipped.
///
/// Returns the number of entries removed.
pub fn sweep_expired(output_dir: &Path, max_age: Duration) -> io::Result<usize> {
    let now = SystemTime::now();
    let mut removed = 0;

    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(_) => continue,
        };

        let age = metadata
            .modified()
            .ok()
            .and_then(|modified| now.duration_since(modified).ok())
            .unwrap_or_default();
        if age < max_age {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name();
        let result = if metadata.is_dir() {
            fs::remove_dir_all(&path)
        } else if is_archive_file_name(&name.to_string_lossy()) {
            fs::remove_file(&path)
        } else {
            continue;
        };

        match result {
            Ok(()) => removed += 1,
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to remove expired entry"),
        }
    }

    if removed > 0 {
        tracing::info!(removed, "Swept expired results");
    }

    Ok(removed)
}

/// Removes a file or directory tree, logging instead of failing.
pub fn remove_quietly(path: &Path) {
    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "Cleanup failed"),
    }
}

/// Creates `dir` if needed and checks that files can be written into it.
pub fn ensure_writable(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let probe = dir.join(".write-probe");
    fs::write(&probe, b"")?;
    fs::remove_file(&probe)
}
