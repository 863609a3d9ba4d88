//! Row resolution: requested countries → merged domain list.

use std::collections::HashSet;

use crate::domain::entities::{
    CampaignIndex, FailureReason, Resolution, ResolutionOutcome, TalRow,
};
use crate::utils::country_normalizer::normalize_country;

/// Resolves one TAL row against the campaign indices available in this run.
///
/// `lookup` returns the index for a campaign name, or `None` if the workbook has
/// no sheet for it.
///
/// # Algorithm
///
/// 1. Empty campaign name → [`FailureReason::MissingCampaignName`]
/// 2. Unknown campaign → [`FailureReason::MissingSheet`]
/// 3. Requested countries are split into found/missing by normalized key
/// 4. Found countries' domains are merged in request order; a domain already
///    collected for this row flags a duplicate and keeps its first casing
///
/// Pure function: the result depends only on the row and the index contents.
pub fn resolve_row<'i, F>(row: &TalRow, lookup: F) -> ResolutionOutcome
where
    F: FnOnce(&str) -> Option<&'i CampaignIndex>,
{
    if row.campaign_name.is_empty() {
        return ResolutionOutcome::Failure(FailureReason::MissingCampaignName);
    }

    let Some(index) = lookup(&row.campaign_name) else {
        return ResolutionOutcome::Failure(FailureReason::MissingSheet(
            row.campaign_name.clone(),
        ));
    };

    resolve_countries(&row.requested_countries(), index).into()
}

/// Partitions `countries` against `index` and merges the found domain sets.
pub fn resolve_countries(countries: &[&str], index: &CampaignIndex) -> Resolution {
    let mut resolution = Resolution::default();
    let mut collected: HashSet<&str> = HashSet::new();

    for &country in countries {
        let key = normalize_country(country);

        let Some(domains) = index.domains_for(&key) else {
            resolution.missing_countries.push(country.to_string());
            continue;
        };

        resolution.found_countries.push(country.to_string());

        for (domain_key, original) in domains {
            if collected.insert(domain_key.as_str()) {
                resolution.merged_domains.push(original.clone());
            } else {
                resolution.had_cross_country_duplicate = true;
            }
        }
    }

    resolution
}
