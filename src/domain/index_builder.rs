//! Campaign index construction.

use crate::domain::entities::{CampaignIndex, CampaignRow};
use crate::utils::country_normalizer::normalize_country;

/// Default number of consecutive empty rows tolerated before a campaign sheet
/// is considered finished.
pub const DEFAULT_EMPTY_ROW_LIMIT: usize = 10;

/// Builds a [`CampaignIndex`] from the rows of one campaign sheet.
///
/// # Scanning Rules
///
/// - Fully empty rows are skipped; more than `empty_row_limit` of them in a row
///   ends the scan (no error, the rest of the sheet is never read)
/// - Rows with only one of country/domain are ignored
/// - Countries are normalized, domains trimmed and keyed by their lowercase form
/// - The first occurrence of a (country, domain) pair wins; later case variants
///   are dropped
pub fn build_campaign_index<I>(rows: I, empty_row_limit: usize) -> CampaignIndex
where
    I: IntoIterator<Item = CampaignRow>,
{
    let mut index = CampaignIndex::new();
    let mut empty_streak = 0usize;

    for row in rows {
        if row.is_empty() {
            empty_streak += 1;
            if empty_streak > empty_row_limit {
                break;
            }
            continue;
        }
        empty_streak = 0;

        let country_key = normalize_country(&row.country);
        let domain = row.domain.trim();

        if country_key.is_empty() || domain.is_empty() {
            continue;
        }

        index.insert(country_key, domain.to_string());
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<CampaignRow> {
        pairs.iter().map(|(c, d)| CampaignRow::new(*c, *d)).collect()
    }

    #[test]
    fn test_build_groups_by_normalized_country() {
        let index = build_campaign_index(
            rows(&[
                ("USA", "microsoft.com"),
                ("usa ", "apple.com"),
                (" Germany", "siemens.com"),
            ]),
            DEFAULT_EMPTY_ROW_LIMIT,
        );

        assert_eq!(index.country_count(), 2);
        let usa: Vec<_> = index.domains_for("Usa").unwrap().values().collect();
        assert_eq!(usa, vec!["microsoft.com", "apple.com"]);
    }

    #[test]
    fn test_build_first_casing_wins() {
        let index = build_campaign_index(
            rows(&[
                ("France", "Airbus.com"),
                ("FRANCE", "AIRBUS.COM"),
                ("france", "airbus.com"),
            ]),
            DEFAULT_EMPTY_ROW_LIMIT,
        );

        let france = index.domains_for("France").unwrap();
        assert_eq!(france.len(), 1);
        assert_eq!(france["airbus.com"], "Airbus.com");
    }

    #[test]
    fn test_build_trims_domains() {
        let index = build_campaign_index(rows(&[("UK", "  bp.com  ")]), 10);
        assert_eq!(index.domains_for("Uk").unwrap()["bp.com"], "bp.com");
    }

    #[test]
    fn test_build_skips_incomplete_rows() {
        let index = build_campaign_index(
            rows(&[
                ("USA", ""),
                ("", "orphan.com"),
                ("   ", "blank-country.com"),
                ("USA", "   "),
                ("USA", "google.com"),
            ]),
            DEFAULT_EMPTY_ROW_LIMIT,
        );

        assert_eq!(index.domain_count(), 1);
        assert!(index.domains_for("Usa").unwrap().contains_key("google.com"));
    }

    #[test]
    fn test_build_tolerates_short_empty_runs() {
        let mut input = rows(&[("USA", "a.com")]);
        input.extend(std::iter::repeat_n(CampaignRow::default(), 10));
        input.extend(rows(&[("USA", "b.com")]));

        let index = build_campaign_index(input, 10);
        assert_eq!(index.domain_count(), 2);
    }

    #[test]
    fn test_build_stops_after_long_empty_run() {
        let mut input = rows(&[("USA", "a.com")]);
        input.extend(std::iter::repeat_n(CampaignRow::default(), 11));
        input.extend(rows(&[("USA", "after-gap.com")]));

        let index = build_campaign_index(input, 10);
        assert_eq!(index.domain_count(), 1);
        assert!(!index.domains_for("Usa").unwrap().contains_key("after-gap.com"));
    }

    #[test]
    fn test_build_stops_without_draining_endless_source() {
        let endless = std::iter::once(CampaignRow::new("USA", "a.com"))
            .chain(std::iter::repeat(CampaignRow::default()));

        let index = build_campaign_index(endless, 3);
        assert_eq!(index.domain_count(), 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let input = rows(&[
            ("Germany", "BMW.com"),
            ("Germany", "bmw.com"),
            ("Usa", "x.com"),
        ]);

        let a = build_campaign_index(input.clone(), 10);
        let b = build_campaign_index(input, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_empty_source() {
        let index = build_campaign_index(Vec::new(), 10);
        assert!(index.is_empty());
    }
}
