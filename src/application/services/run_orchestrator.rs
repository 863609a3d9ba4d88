//! Per-run row loop: index, resolve, classify, emit.

use indexmap::IndexMap;

use crate::application::error::ProcessingError;
use crate::domain::classifier::{classify, classify_write_failure};
use crate::domain::entities::{Artifact, SummaryEntry, TalRow};
use crate::domain::index_builder::{DEFAULT_EMPTY_ROW_LIMIT, build_campaign_index};
use crate::domain::index_cache::CampaignIndexCache;
use crate::domain::repositories::{ArtifactSink, WorkbookSource};
use crate::domain::resolver::resolve_row;

/// Name of the input sheet when none is configured.
pub const DEFAULT_INPUT_SHEET: &str = "Sheet1";

/// Tunables for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Sheet holding the TAL rows.
    pub input_sheet: String,
    /// Consecutive empty campaign rows tolerated before a sheet is considered finished.
    pub empty_row_limit: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input_sheet: DEFAULT_INPUT_SHEET.to_string(),
            empty_row_limit: DEFAULT_EMPTY_ROW_LIMIT,
        }
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Number of artifacts written.
    pub files_created: usize,
    /// One entry per processed input row, in input order.
    pub summary: Vec<SummaryEntry>,
    /// Artifacts grouped by campaign name, campaigns in first-seen order.
    pub campaign_artifacts: IndexMap<String, Vec<Artifact>>,
}

impl RunReport {
    fn record_artifact(&mut self, campaign: &str, artifact: Artifact) {
        self.campaign_artifacts
            .entry(campaign.to_string())
            .or_default()
            .push(artifact);
        self.files_created += 1;
    }
}

/// Drives one processing run over a workbook.
///
/// The orchestrator itself is stateless; every call to [`Self::run`] creates a
/// fresh [`CampaignIndexCache`] and summary log, so concurrent or repeated runs
/// never observe each other's data.
#[derive(Debug, Clone, Default)]
pub struct RunOrchestrator {
    options: RunOptions,
}

impl RunOrchestrator {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Processes every TAL row of `source`, writing artifacts to `sink`.
    ///
    /// # Row Handling
    ///
    /// - Rows whose first three cells are all empty are skipped
    /// - Every other row gets exactly one [`SummaryEntry`], in input order
    /// - Each referenced campaign sheet is indexed at most once per run
    /// - Success and partial outcomes produce an artifact; a failed write is
    ///   recorded with status `Error` and the run continues
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::InvalidWorkbook`] if the input sheet cannot be
    /// read (nothing is processed), and [`ProcessingError::CampaignRead`] if an
    /// existing campaign sheet cannot be opened.
    pub fn run<S, A>(&self, source: &mut S, sink: &mut A) -> Result<RunReport, ProcessingError>
    where
        S: WorkbookSource + ?Sized,
        A: ArtifactSink + ?Sized,
    {
        let rows = source
            .tal_rows(&self.options.input_sheet)
            .map_err(ProcessingError::InvalidWorkbook)?;

        tracing::info!(
            sheet = %self.options.input_sheet,
            rows = rows.len(),
            "Starting run"
        );

        let mut cache = CampaignIndexCache::new();
        let mut report = RunReport::default();

        for (offset, row) in rows.into_iter().enumerate() {
            if row.is_blank() {
                continue;
            }

            tracing::debug!(row = offset + 2, entity = %row.entity_name, "Processing row");

            self.ensure_index(source, &mut cache, &row.campaign_name)?;

            let entry = self.process_row(row, &cache, sink, &mut report);
            report.summary.push(entry);
        }

        tracing::info!(
            files_created = report.files_created,
            rows = report.summary.len(),
            campaigns_indexed = cache.len(),
            "Run complete"
        );

        Ok(report)
    }

    /// Builds the campaign's index on first reference, if the sheet exists.
    fn ensure_index<S>(
        &self,
        source: &mut S,
        cache: &mut CampaignIndexCache,
        campaign: &str,
    ) -> Result<(), ProcessingError>
    where
        S: WorkbookSource + ?Sized,
    {
        if campaign.is_empty() || !source.has_sheet(campaign) {
            return Ok(());
        }

        cache.get_or_try_build(campaign, || {
            let rows = source
                .campaign_rows(campaign)
                .map_err(ProcessingError::CampaignRead)?;
            let index = build_campaign_index(rows, self.options.empty_row_limit);

            tracing::info!(
                campaign,
                countries = index.country_count(),
                domains = index.domain_count(),
                "Indexed campaign sheet"
            );

            Ok::<_, ProcessingError>(index)
        })?;

        Ok(())
    }

    fn process_row<A>(
        &self,
        row: TalRow,
        cache: &CampaignIndexCache,
        sink: &mut A,
        report: &mut RunReport,
    ) -> SummaryEntry
    where
        A: ArtifactSink + ?Sized,
    {
        let outcome = resolve_row(&row, |name| cache.get(name));

        let classification = match outcome.domains() {
            None => classify(&outcome),
            Some(domains) => {
                match sink.write_domain_list(&row.campaign_name, &row.entity_name, domains) {
                    Ok(artifact) => {
                        report.record_artifact(&row.campaign_name, artifact);
                        classify(&outcome)
                    }
                    Err(e) => {
                        tracing::warn!(
                            entity = %row.entity_name,
                            campaign = %row.campaign_name,
                            error = %e,
                            "Failed to write domain list"
                        );
                        classify_write_failure(&e)
                    }
                }
            }
        };

        SummaryEntry {
            entity_name: row.entity_name,
            countries_raw: row.countries_raw,
            campaign_name: row.campaign_name,
            status: classification.status,
            domain_count: classification.domain_count,
            diagnostic: classification.diagnostic,
        }
    }
}
