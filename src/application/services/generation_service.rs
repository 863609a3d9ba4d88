//! Upload-to-archive pipeline used by the HTTP layer.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::error::ProcessingError;
use crate::application::services::{RunOptions, RunOrchestrator};
use crate::config::Config;
use crate::domain::entities::SummaryEntry;
use crate::infrastructure::spreadsheet::{CalamineWorkbook, xlsx_writer};
use crate::infrastructure::storage::housekeeping::{remove_quietly, sweep_expired};
use crate::infrastructure::storage::{FsArtifactSink, SUMMARY_FILE_NAME, package_run};
use crate::infrastructure::template;
use crate::utils::file_name::stored_upload_name;
use crate::utils::run_id::{archive_file_name, generate_run_id, is_archive_file_name};

/// Outcome of a successful generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// File name of the archive inside the output directory.
    pub archive_name: String,
    pub files_created: usize,
    pub summary: Vec<SummaryEntry>,
}

/// Turns uploaded workbooks into result archives.
///
/// Every run gets its own id, upload file and run directory, so concurrent
/// requests never touch each other's files. The run directory and the upload
/// are removed once the run ends, successful or not; only the archive stays
/// until the retention sweep removes it.
#[derive(Debug, Clone)]
pub struct GenerationService {
    upload_dir: PathBuf,
    output_dir: PathBuf,
    retention: Duration,
    orchestrator: RunOrchestrator,
}

impl GenerationService {
    pub fn new(
        upload_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        retention: Duration,
        options: RunOptions,
    ) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            output_dir: output_dir.into(),
            retention,
            orchestrator: RunOrchestrator::new(options),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.upload_dir,
            &config.output_dir,
            config.result_retention(),
            config.run_options(),
        )
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Stores an uploaded workbook and processes it on a blocking worker.
    ///
    /// The stored upload is deleted afterwards whatever the outcome.
    ///
    /// # Errors
    ///
    /// - [`ProcessingError::InvalidWorkbook`] if the upload is not a readable
    ///   workbook with an input sheet
    /// - [`ProcessingError::Task`] if the worker panicked
    /// - Any other [`ProcessingError`] from [`Self::process_file`]
    pub async fn process_upload(
        &self,
        original_name: &str,
        contents: Vec<u8>,
    ) -> Result<GenerationResult, ProcessingError> {
        let run_id = generate_run_id();

        tokio::fs::create_dir_all(&self.upload_dir).await?;
        let upload_path = self
            .upload_dir
            .join(stored_upload_name(&run_id, original_name));
        tokio::fs::write(&upload_path, contents).await?;

        tracing::info!(
            run_id = %run_id,
            file = %original_name,
            "Upload stored, starting generation"
        );

        let service = self.clone();
        let input = upload_path.clone();
        let result = tokio::task::spawn_blocking(move || service.process_file(&input, &run_id))
            .await
            .map_err(|e| ProcessingError::Task(e.to_string()));

        remove_quietly(&upload_path);

        result?
    }

    /// Processes a workbook on disk into an archive in the output directory.
    ///
    /// Expired archives are swept first. The run directory is removed before
    /// returning.
    ///
    /// # Errors
    ///
    /// See [`ProcessingError`]; structural faults abort before any row is read.
    pub fn process_file(
        &self,
        input: &Path,
        run_id: &str,
    ) -> Result<GenerationResult, ProcessingError> {
        fs::create_dir_all(&self.output_dir)?;

        if let Err(e) = sweep_expired(&self.output_dir, self.retention) {
            tracing::warn!(error = %e, "Retention sweep failed");
        }

        let run_dir = self.output_dir.join(run_id);
        fs::create_dir_all(&run_dir)?;

        let result = self.generate(input, &run_dir, run_id);
        remove_quietly(&run_dir);

        match &result {
            Ok(r) => tracing::info!(
                run_id,
                archive = %r.archive_name,
                files_created = r.files_created,
                "Generation finished"
            ),
            Err(e) => tracing::warn!(run_id, error = %e, "Generation failed"),
        }

        result
    }

    fn generate(
        &self,
        input: &Path,
        run_dir: &Path,
        run_id: &str,
    ) -> Result<GenerationResult, ProcessingError> {
        let mut workbook =
            CalamineWorkbook::open(input).map_err(ProcessingError::InvalidWorkbook)?;
        let mut sink = FsArtifactSink::new(run_dir);

        let report = self.orchestrator.run(&mut workbook, &mut sink)?;

        xlsx_writer::write_summary(&run_dir.join(SUMMARY_FILE_NAME), &report.summary)
            .map_err(|e| ProcessingError::Output(e.to_string()))?;

        let archive_name = archive_file_name(run_id);
        let archive_path = self.output_dir.join(&archive_name);
        if let Err(e) = package_run(run_dir, &report, &archive_path) {
            remove_quietly(&archive_path);
            return Err(ProcessingError::Output(e.to_string()));
        }

        Ok(GenerationResult {
            archive_name,
            files_created: report.files_created,
            summary: report.summary,
        })
    }

    /// Location of a previously produced archive.
    ///
    /// Returns `None` for names that do not follow the archive naming pattern,
    /// which also rules out path traversal. The file may no longer exist.
    pub fn archive_path(&self, name: &str) -> Option<PathBuf> {
        is_archive_file_name(name).then(|| self.output_dir.join(name))
    }

    /// The downloadable example workbook.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::Output`] if the workbook cannot be rendered.
    pub fn template_bytes(&self) -> Result<Vec<u8>, ProcessingError> {
        template::template_bytes().map_err(|e| ProcessingError::Output(e.to_string()))
    }
}
