//! Outcome classification for the summary log.

use crate::domain::entities::{Classification, FailureReason, ResolutionOutcome, RowStatus};
use crate::domain::repositories::SinkError;

/// Maps a resolution outcome to the status, domain count and diagnostic
/// persisted in the summary.
///
/// | Outcome | Status | Count | Diagnostic |
/// |---|---|---|---|
/// | Missing campaign / sheet | `No` | none | failure reason |
/// | All countries missing | `No` | 0 | failure reason |
/// | Partial | `Partial` | domains | `Missing: a, b` |
/// | Success | `Yes` | domains | `Yes` if a duplicate was merged, else `No` |
pub fn classify(outcome: &ResolutionOutcome) -> Classification {
    match outcome {
        ResolutionOutcome::Failure(reason) => Classification {
            status: RowStatus::No,
            domain_count: match reason {
                FailureReason::AllCountriesMissing(_) => Some(0),
                FailureReason::MissingCampaignName | FailureReason::MissingSheet(_) => None,
            },
            diagnostic: reason.to_string(),
        },
        ResolutionOutcome::Partial {
            missing, domains, ..
        } => Classification {
            status: RowStatus::Partial,
            domain_count: Some(domains.len()),
            diagnostic: format!("Missing: {}", missing.join(", ")),
        },
        ResolutionOutcome::Success {
            domains,
            had_duplicate,
        } => Classification {
            status: RowStatus::Yes,
            domain_count: Some(domains.len()),
            diagnostic: if *had_duplicate { "Yes" } else { "No" }.to_string(),
        },
    }
}

/// Classification for a row whose domains resolved but could not be written.
pub fn classify_write_failure(error: &SinkError) -> Classification {
    Classification {
        status: RowStatus::Error,
        domain_count: None,
        diagnostic: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_missing_campaign_name() {
        let c = classify(&ResolutionOutcome::Failure(
            FailureReason::MissingCampaignName,
        ));

        assert_eq!(c.status, RowStatus::No);
        assert_eq!(c.domain_count, None);
        assert_eq!(c.diagnostic, "Missing campaign name");
    }

    #[test]
    fn test_classify_missing_sheet() {
        let c = classify(&ResolutionOutcome::Failure(FailureReason::MissingSheet(
            "Copilot ENT".into(),
        )));

        assert_eq!(c.status, RowStatus::No);
        assert_eq!(c.domain_count, None);
        assert_eq!(c.diagnostic, "Missing sheet: Copilot ENT");
    }

    #[test]
    fn test_classify_all_countries_missing() {
        let c = classify(&ResolutionOutcome::Failure(
            FailureReason::AllCountriesMissing(vec!["Mexico".into()]),
        ));

        assert_eq!(c.status, RowStatus::No);
        assert_eq!(c.domain_count, Some(0));
        assert!(c.diagnostic.contains("Mexico"));
    }

    #[test]
    fn test_classify_partial() {
        let c = classify(&ResolutionOutcome::Partial {
            missing: vec!["Mexico".into(), "Peru".into()],
            domains: vec!["a.com".into(), "b.com".into(), "c.com".into()],
            had_duplicate: true,
        });

        assert_eq!(c.status, RowStatus::Partial);
        assert_eq!(c.domain_count, Some(3));
        assert_eq!(c.diagnostic, "Missing: Mexico, Peru");
    }

    #[test]
    fn test_classify_success_with_duplicate() {
        let c = classify(&ResolutionOutcome::Success {
            domains: vec!["microsoft.com".into(), "bmw.com".into()],
            had_duplicate: true,
        });

        assert_eq!(c.status, RowStatus::Yes);
        assert_eq!(c.domain_count, Some(2));
        assert_eq!(c.diagnostic, "Yes");
    }

    #[test]
    fn test_classify_success_without_duplicate() {
        let c = classify(&ResolutionOutcome::Success {
            domains: vec!["a.com".into()],
            had_duplicate: false,
        });

        assert_eq!(c.status, RowStatus::Yes);
        assert_eq!(c.diagnostic, "No");
    }

    #[test]
    fn test_classify_write_failure() {
        let error = SinkError::Spreadsheet("disk full".into());
        let c = classify_write_failure(&error);

        assert_eq!(c.status, RowStatus::Error);
        assert_eq!(c.domain_count, None);
        assert!(c.diagnostic.contains("disk full"));
    }
}
