//! Result of resolving one TAL row against its campaign index.

use thiserror::Error;

/// Why a row produced no domains at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// The campaign cell was empty.
    #[error("Missing campaign name")]
    MissingCampaignName,
    /// No sheet exists for the named campaign.
    #[error("Missing sheet: {0}")]
    MissingSheet(String),
    /// None of the requested countries exist in the campaign index.
    /// Holds the original spellings, in request order.
    #[error("All countries missing: {}", .0.join(", "))]
    AllCountriesMissing(Vec<String>),
}

/// Found/missing partition and merged domains for a row whose campaign resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Requested countries present in the index (original spelling, request order).
    pub found_countries: Vec<String>,
    /// Requested countries absent from the index (original spelling, request order).
    pub missing_countries: Vec<String>,
    /// Merged domains in country order, then first-seen order within a country.
    pub merged_domains: Vec<String>,
    /// A domain key appeared under more than one requested country.
    pub had_cross_country_duplicate: bool,
}

/// Outcome of resolving a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Failure(FailureReason),
    Partial {
        missing: Vec<String>,
        domains: Vec<String>,
        had_duplicate: bool,
    },
    Success {
        domains: Vec<String>,
        had_duplicate: bool,
    },
}

impl ResolutionOutcome {
    /// Domains to emit as an artifact, or `None` for failures.
    pub fn domains(&self) -> Option<&[String]> {
        match self {
            Self::Failure(_) => None,
            Self::Partial { domains, .. } | Self::Success { domains, .. } => {
                Some(domains.as_slice())
            }
        }
    }
}

impl From<Resolution> for ResolutionOutcome {
    fn from(resolution: Resolution) -> Self {
        if resolution.found_countries.is_empty() {
            return Self::Failure(FailureReason::AllCountriesMissing(
                resolution.missing_countries,
            ));
        }

        if resolution.missing_countries.is_empty() {
            Self::Success {
                domains: resolution.merged_domains,
                had_duplicate: resolution.had_cross_country_duplicate,
            }
        } else {
            Self::Partial {
                missing: resolution.missing_countries,
                domains: resolution.merged_domains,
                had_duplicate: resolution.had_cross_country_duplicate,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_messages() {
        assert_eq!(
            FailureReason::MissingCampaignName.to_string(),
            "Missing campaign name"
        );
        assert_eq!(
            FailureReason::MissingSheet("Security".into()).to_string(),
            "Missing sheet: Security"
        );
        assert_eq!(
            FailureReason::AllCountriesMissing(vec!["Mexico".into(), "Peru".into()]).to_string(),
            "All countries missing: Mexico, Peru"
        );
    }

    #[test]
    fn test_resolution_without_found_countries_is_failure() {
        let resolution = Resolution {
            missing_countries: vec!["Mexico".into()],
            ..Default::default()
        };

        assert_eq!(
            ResolutionOutcome::from(resolution),
            ResolutionOutcome::Failure(FailureReason::AllCountriesMissing(vec!["Mexico".into()]))
        );
    }

    #[test]
    fn test_resolution_with_missing_countries_is_partial() {
        let resolution = Resolution {
            found_countries: vec!["USA".into()],
            missing_countries: vec!["Mexico".into()],
            merged_domains: vec!["a.com".into()],
            had_cross_country_duplicate: false,
        };

        let outcome = ResolutionOutcome::from(resolution);
        assert!(matches!(outcome, ResolutionOutcome::Partial { .. }));
        assert_eq!(outcome.domains().unwrap(), ["a.com".to_string()]);
    }

    #[test]
    fn test_resolution_all_found_is_success() {
        let resolution = Resolution {
            found_countries: vec!["USA".into(), "Germany".into()],
            merged_domains: vec!["a.com".into(), "b.com".into()],
            had_cross_country_duplicate: true,
            ..Default::default()
        };

        assert_eq!(
            ResolutionOutcome::from(resolution),
            ResolutionOutcome::Success {
                domains: vec!["a.com".into(), "b.com".into()],
                had_duplicate: true,
            }
        );
    }

    #[test]
    fn test_failure_has_no_domains() {
        let outcome = ResolutionOutcome::Failure(FailureReason::MissingCampaignName);
        assert!(outcome.domains().is_none());
    }
}
