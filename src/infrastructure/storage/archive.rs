//! Result archive packaging.

use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use zip::result::ZipResult;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::application::services::RunReport;

/// File name of the run summary, at the archive root and in each campaign directory.
pub const SUMMARY_FILE_NAME: &str = "Master_Results.xlsx";

/// Packages a finished run directory into a zip archive.
///
/// # Layout
///
/// ```text
/// Master_Results.xlsx
/// <campaign>/Master_Results.xlsx
/// <campaign>/<entity>.xlsx
/// ...
/// ```
///
/// Campaigns appear in first-seen order, artifacts in write order. Only
/// campaigns that produced artifacts get a directory. Two campaigns whose
/// names sanitize to the same directory share it; each entry is written once.
///
/// # Errors
///
/// Fails if the archive cannot be created or a source file cannot be read.
pub fn package_run(run_dir: &Path, report: &RunReport, archive_path: &Path) -> ZipResult<usize> {
    let summary_path = run_dir.join(SUMMARY_FILE_NAME);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut zip = ZipWriter::new(File::create(archive_path)?);
    let mut written: HashSet<String> = HashSet::new();

    let mut add = |zip: &mut ZipWriter<File>, source: &Path, entry: String| -> ZipResult<()> {
        if !written.insert(entry.clone()) {
            return Ok(());
        }
        zip.start_file(entry, options)?;
        io::copy(&mut File::open(source)?, zip)?;
        Ok(())
    };

    add(&mut zip, &summary_path, SUMMARY_FILE_NAME.to_string())?;

    for artifacts in report.campaign_artifacts.values() {
        let Some(first) = artifacts.first() else {
            continue;
        };
        add(
            &mut zip,
            &summary_path,
            format!("{}/{}", first.campaign_dir, SUMMARY_FILE_NAME),
        )?;

        for artifact in artifacts {
            let source = run_dir.join(&artifact.campaign_dir).join(&artifact.file_name);
            add(&mut zip, &source, artifact.relative_path())?;
        }
    }

    zip.finish()?;

    tracing::info!(
        archive = %archive_path.display(),
        entries = written.len(),
        "Packaged results"
    );

    Ok(written.len())
}
