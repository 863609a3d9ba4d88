//! In-memory artifact sink.

use indexmap::IndexMap;

use super::fs_artifact_sink::NameRegistry;
use crate::domain::entities::Artifact;
use crate::domain::repositories::{ArtifactSink, SinkError};

/// Keeps written domain lists in memory, keyed by relative artifact path.
///
/// Applies the same naming rules as [`super::FsArtifactSink`]. Useful for dry
/// runs where only the resolved lists matter.
#[derive(Debug, Default)]
pub struct MemoryArtifactSink {
    names: NameRegistry,
    lists: IndexMap<String, Vec<String>>,
}

impl MemoryArtifactSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Domain list written for `artifact`, if any.
    pub fn domains(&self, artifact: &Artifact) -> Option<&[String]> {
        self.lists
            .get(&artifact.relative_path())
            .map(Vec::as_slice)
    }

    /// All written lists in write order, keyed by `campaign/file` path.
    pub fn lists(&self) -> &IndexMap<String, Vec<String>> {
        &self.lists
    }
}

impl ArtifactSink for MemoryArtifactSink {
    fn write_domain_list(
        &mut self,
        campaign: &str,
        entity: &str,
        domains: &[String],
    ) -> Result<Artifact, SinkError> {
        let (campaign_dir, file_name) = self.names.reserve(campaign, entity);
        let artifact = Artifact {
            campaign_dir,
            file_name,
        };
        self.lists.insert(artifact.relative_path(), domains.to_vec());
        Ok(artifact)
    }
}
