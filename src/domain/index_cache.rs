//! Run-scoped memoization of campaign indices.

use std::collections::HashMap;

use crate::domain::entities::CampaignIndex;

/// Campaign indices built during one run, keyed by campaign name.
///
/// Owned by a single run and dropped with it; nothing is shared between runs.
#[derive(Debug, Default)]
pub struct CampaignIndexCache {
    indices: HashMap<String, CampaignIndex>,
}

impl CampaignIndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached index for `campaign`, building it on first use.
    ///
    /// `build` runs at most once per campaign name. A failed build leaves the
    /// cache untouched.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `build`.
    pub fn get_or_try_build<E, F>(&mut self, campaign: &str, build: F) -> Result<&CampaignIndex, E>
    where
        F: FnOnce() -> Result<CampaignIndex, E>,
    {
        if !self.indices.contains_key(campaign) {
            let index = build()?;
            self.indices.insert(campaign.to_string(), index);
        }

        Ok(&self.indices[campaign])
    }

    pub fn get(&self, campaign: &str) -> Option<&CampaignIndex> {
        self.indices.get(campaign)
    }

    /// Number of campaigns built so far in this run.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn index_with(country: &str, domain: &str) -> CampaignIndex {
        let mut index = CampaignIndex::new();
        index.insert(country.to_string(), domain.to_string());
        index
    }

    #[test]
    fn test_builds_once_per_campaign() {
        let mut cache = CampaignIndexCache::new();
        let mut builds = 0;

        for _ in 0..3 {
            let index = cache
                .get_or_try_build("Security", || {
                    builds += 1;
                    Ok::<_, Infallible>(index_with("Usa", "cisco.com"))
                })
                .unwrap();
            assert!(index.contains_country("Usa"));
        }

        assert_eq!(builds, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_campaigns_are_cached_separately() {
        let mut cache = CampaignIndexCache::new();

        cache
            .get_or_try_build("A", || Ok::<_, Infallible>(index_with("Usa", "a.com")))
            .unwrap();
        cache
            .get_or_try_build("B", || Ok::<_, Infallible>(index_with("Uk", "b.com")))
            .unwrap();

        assert!(cache.get("A").unwrap().contains_country("Usa"));
        assert!(cache.get("B").unwrap().contains_country("Uk"));
        assert!(cache.get("C").is_none());
    }

    #[test]
    fn test_failed_build_is_not_cached() {
        let mut cache = CampaignIndexCache::new();

        let result = cache.get_or_try_build("Broken", || Err("read failure"));
        assert!(result.is_err());
        assert!(cache.is_empty());

        let result = cache.get_or_try_build("Broken", || {
            Ok::<_, &str>(index_with("Usa", "a.com"))
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_new_cache_is_empty() {
        let cache = CampaignIndexCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }
}
