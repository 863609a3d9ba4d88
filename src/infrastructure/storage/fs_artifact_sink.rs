//! Filesystem artifact sink: one `.xlsx` per entity under its campaign directory.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Artifact;
use crate::domain::repositories::{ArtifactSink, SinkError};
use crate::infrastructure::spreadsheet::xlsx_writer;
use crate::utils::file_name::sanitize_file_name;

const ARTIFACT_EXTENSION: &str = "xlsx";

/// Hands out per-directory unique artifact names.
///
/// Names are compared case-insensitively so that `Acme` and `ACME` do not
/// collide on case-insensitive filesystems or inside the archive.
#[derive(Debug, Default)]
pub(super) struct NameRegistry {
    used: HashMap<String, HashSet<String>>,
}

impl NameRegistry {
    /// Returns `(campaign_dir, file_name)` for the next artifact.
    pub(super) fn reserve(&mut self, campaign: &str, entity: &str) -> (String, String) {
        let campaign_dir = sanitize_file_name(campaign);
        let base = sanitize_file_name(entity);
        let used = self.used.entry(campaign_dir.to_lowercase()).or_default();

        let mut stem = base.clone();
        let mut n = 2;
        while used.contains(&stem.to_lowercase()) {
            stem = format!("{base} ({n})");
            n += 1;
        }
        used.insert(stem.to_lowercase());

        (campaign_dir, format!("{stem}.{ARTIFACT_EXTENSION}"))
    }
}

/// Writes domain lists below a run directory.
///
/// ```text
/// <root>/
///   <campaign>/
///     <entity>.xlsx
/// ```
#[derive(Debug)]
pub struct FsArtifactSink {
    root: PathBuf,
    names: NameRegistry,
}

impl FsArtifactSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            names: NameRegistry::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for FsArtifactSink {
    fn write_domain_list(
        &mut self,
        campaign: &str,
        entity: &str,
        domains: &[String],
    ) -> Result<Artifact, SinkError> {
        let (campaign_dir, file_name) = self.names.reserve(campaign, entity);

        let dir = self.root.join(&campaign_dir);
        fs::create_dir_all(&dir)?;

        xlsx_writer::write_domain_list(&dir.join(&file_name), domains)
            .map_err(|e| SinkError::Spreadsheet(e.to_string()))?;

        tracing::debug!(
            campaign_dir = %campaign_dir,
            file_name = %file_name,
            domains = domains.len(),
            "Wrote domain list"
        );

        Ok(Artifact {
            campaign_dir,
            file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Reader, Xlsx, open_workbook};
    use tempfile::TempDir;

    #[test]
    fn test_writes_under_sanitized_campaign_dir() {
        let dir = TempDir::new().unwrap();
        let mut sink = FsArtifactSink::new(dir.path());

        let artifact = sink
            .write_domain_list("M365/Copilot", "Acme: EU", &["a.com".into(), "b.com".into()])
            .unwrap();

        assert_eq!(artifact.campaign_dir, "M365Copilot");
        assert_eq!(artifact.file_name, "Acme EU.xlsx");

        let path = dir.path().join("M365Copilot").join("Acme EU.xlsx");
        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(range.height(), 2);
    }

    #[test]
    fn test_repeated_entity_gets_numbered_suffix() {
        let dir = TempDir::new().unwrap();
        let mut sink = FsArtifactSink::new(dir.path());
        let domains = vec!["a.com".to_string()];

        let first = sink.write_domain_list("C", "Acme", &domains).unwrap();
        let second = sink.write_domain_list("C", "ACME", &domains).unwrap();
        let third = sink.write_domain_list("C", "Acme", &domains).unwrap();
        let other = sink.write_domain_list("D", "Acme", &domains).unwrap();

        assert_eq!(first.file_name, "Acme.xlsx");
        assert_eq!(second.file_name, "ACME (2).xlsx");
        assert_eq!(third.file_name, "Acme (3).xlsx");
        assert_eq!(other.file_name, "Acme.xlsx");
        assert!(dir.path().join("C").join("ACME (2).xlsx").exists());
    }

    #[test]
    fn test_empty_entity_name_falls_back() {
        let dir = TempDir::new().unwrap();
        let mut sink = FsArtifactSink::new(dir.path());

        let artifact = sink
            .write_domain_list("C", "  ", &["a.com".into()])
            .unwrap();

        assert_eq!(artifact.file_name, "Unnamed.xlsx");
    }

    #[test]
    fn test_unwritable_root_is_reported() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file, not a directory").unwrap();
        let mut sink = FsArtifactSink::new(&blocker);

        let result = sink.write_domain_list("C", "Acme", &["a.com".into()]);

        assert!(matches!(result, Err(SinkError::Io(_))));
    }
}
