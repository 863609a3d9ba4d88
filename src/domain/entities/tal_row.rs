//! TAL row entity read from the input sheet.

/// One input record requesting domains for a set of countries under a campaign.
///
/// Entity and campaign names are trimmed on construction; `countries_raw` is kept
/// exactly as read so the summary can echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalRow {
    pub entity_name: String,
    pub countries_raw: String,
    pub campaign_name: String,
}

impl TalRow {
    /// Creates a row from raw cell text.
    pub fn new(
        entity_name: impl Into<String>,
        countries_raw: impl Into<String>,
        campaign_name: impl Into<String>,
    ) -> Self {
        Self {
            entity_name: entity_name.into().trim().to_string(),
            countries_raw: countries_raw.into(),
            campaign_name: campaign_name.into().trim().to_string(),
        }
    }

    /// Returns true if none of the three input cells carry any content.
    pub fn is_blank(&self) -> bool {
        self.entity_name.is_empty()
            && self.countries_raw.trim().is_empty()
            && self.campaign_name.is_empty()
    }

    /// Splits `countries_raw` on commas.
    ///
    /// Tokens are trimmed and empty tokens dropped. Order and repeated entries
    /// are preserved.
    pub fn requested_countries(&self) -> Vec<&str> {
        self.countries_raw
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    }
}

/// One (country, domain) line of a campaign sheet, as read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CampaignRow {
    pub country: String,
    pub domain: String,
}

impl CampaignRow {
    pub fn new(country: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            domain: domain.into(),
        }
    }

    /// Returns true if both cells are empty or whitespace.
    pub fn is_empty(&self) -> bool {
        self.country.trim().is_empty() && self.domain.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_names_but_not_countries() {
        let row = TalRow::new("  Tech_APAC ", " Malaysia, Singapore ", " Accelerate ");
        assert_eq!(row.entity_name, "Tech_APAC");
        assert_eq!(row.countries_raw, " Malaysia, Singapore ");
        assert_eq!(row.campaign_name, "Accelerate");
    }

    #[test]
    fn test_requested_countries_drops_empty_tokens_keeps_duplicates() {
        let row = TalRow::new("T", " USA, ,Germany,, usa ,", "C");
        assert_eq!(row.requested_countries(), vec!["USA", "Germany", "usa"]);
    }

    #[test]
    fn test_requested_countries_empty() {
        let row = TalRow::new("T", "", "C");
        assert!(row.requested_countries().is_empty());
    }

    #[test]
    fn test_is_blank() {
        assert!(TalRow::new("", "  ", "").is_blank());
        assert!(!TalRow::new("", "", "Campaign").is_blank());
        assert!(!TalRow::new("", "USA", "").is_blank());
    }

    #[test]
    fn test_campaign_row_is_empty() {
        assert!(CampaignRow::new(" ", "").is_empty());
        assert!(!CampaignRow::new("USA", "").is_empty());
        assert!(CampaignRow::default().is_empty());
    }
}
