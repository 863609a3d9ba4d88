//! Per-campaign country → domain lookup table.

use indexmap::IndexMap;

/// Domains known for one country, keyed by lowercased domain.
///
/// Values keep the original casing of the first occurrence. Iteration follows
/// insertion order.
pub type DomainSet = IndexMap<String, String>;

/// Country → domain table for a single campaign.
///
/// Keys are normalized country names (see
/// [`crate::utils::country_normalizer::normalize_country`]). Built once per
/// campaign per run by [`crate::domain::index_builder::build_campaign_index`] and
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignIndex {
    countries: IndexMap<String, DomainSet>,
}

impl CampaignIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a domain for a normalized country.
    ///
    /// Returns `false` without touching the stored value if the
    /// (country, lowercased domain) pair is already present.
    pub(crate) fn insert(&mut self, country_key: String, domain: String) -> bool {
        let domain_key = domain.to_lowercase();
        let domains = self.countries.entry(country_key).or_default();

        if domains.contains_key(&domain_key) {
            return false;
        }

        domains.insert(domain_key, domain);
        true
    }

    /// Domains for a normalized country key, if the country is known.
    pub fn domains_for(&self, country_key: &str) -> Option<&DomainSet> {
        self.countries.get(country_key)
    }

    pub fn contains_country(&self, country_key: &str) -> bool {
        self.countries.contains_key(country_key)
    }

    /// Normalized country keys in insertion order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Total number of distinct (country, domain) pairs.
    pub fn domain_count(&self) -> usize {
        self.countries.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
