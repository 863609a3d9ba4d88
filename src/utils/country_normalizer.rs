//! Country name normalization for lookup-key equality.
//!
//! Campaign sheets and TAL rows are typed by hand, so the same country shows up
//! as `germany`, ` Germany `, `GERMANY` or `Türkiye`/`Turkiye`. Every lookup in a
//! [`crate::domain::entities::CampaignIndex`] goes through [`normalize_country`].

/// Fixed diacritic/ligature substitutions, matched against lowercase text.
///
/// Only these characters are folded. Anything else (e.g. `å`, `ø`, `ã`) stays as
/// typed and produces a distinct key.
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('ü', "u"),
    ('ö', "o"),
    ('ä', "a"),
    ('ß', "ss"),
    ('ç', "c"),
    ('é', "e"),
    ('á', "a"),
    ('í', "i"),
    ('ó', "o"),
    ('ú', "u"),
    ('ñ', "n"),
];

/// Normalizes a free-text country name to its canonical lookup key.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Surrounding whitespace is trimmed
/// 2. **Case**: Lowercased before substitution
/// 3. **Diacritics**: Characters from the fixed substitution table are folded
/// 4. **Title case**: The first letter of every word is uppercased, the rest lowercased
///
/// Total function: empty or whitespace-only input yields an empty key, which never
/// matches a campaign index entry.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_country("  united STATES "), "United States");
/// assert_eq!(normalize_country("MÜNCHEN"), "Munchen");
/// assert_eq!(normalize_country("côte d'ivoire"), "Côte D'Ivoire");
/// ```
pub fn normalize_country(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let mut folded = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => folded.push_str(to),
            None => folded.push(ch),
        }
    }

    title_case(&folded)
}

/// Uppercases the first letter of each alphabetic run and lowercases the rest.
///
/// Any non-alphabetic character (space, hyphen, apostrophe, dot) starts a new word.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_title_cases() {
        assert_eq!(normalize_country("  germany  "), "Germany");
        assert_eq!(normalize_country("UNITED KINGDOM"), "United Kingdom");
    }

    #[test]
    fn test_normalize_case_and_whitespace_insensitive() {
        assert_eq!(normalize_country(" germany "), normalize_country("GERMANY"));
        assert_eq!(normalize_country("\tsouth africa\n"), normalize_country("South Africa"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in [
            "germany",
            " Straße ",
            "CÔTE D'IVOIRE",
            "méxico",
            "usa",
            "",
            "bosnia-herzegovina",
            "Ñuñoa",
        ] {
            let once = normalize_country(input);
            assert_eq!(normalize_country(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_normalize_folds_covered_diacritics() {
        assert_eq!(normalize_country("Türkiye"), "Turkiye");
        assert_eq!(normalize_country("österreich"), "Osterreich");
        assert_eq!(normalize_country("Ägypten"), "Agypten");
        assert_eq!(normalize_country("Curaçao"), "Curacao");
        assert_eq!(normalize_country("Perú"), "Peru");
        assert_eq!(normalize_country("España"), "Espana");
        assert_eq!(normalize_country("méxico"), "Mexico");
        assert_eq!(normalize_country("Panamá"), "Panama");
        assert_eq!(normalize_country("Haití"), "Haiti");
        assert_eq!(normalize_country("Japón"), "Japon");
    }

    #[test]
    fn test_normalize_expands_sharp_s() {
        assert_eq!(normalize_country("GROßBRITANNIEN"), "Grossbritannien");
    }

    #[test]
    fn test_normalize_uppercase_diacritic_is_lowered_first() {
        assert_eq!(normalize_country("ÜBERLAND"), "Uberland");
        assert_eq!(normalize_country("ÉIRE"), "Eire");
    }

    #[test]
    fn test_normalize_keeps_uncovered_diacritics_distinct() {
        assert_eq!(normalize_country("åland"), "Åland");
        assert_ne!(normalize_country("åland"), normalize_country("aland"));
        assert_ne!(normalize_country("São Tomé"), normalize_country("Sao Tome"));
    }

    #[test]
    fn test_normalize_word_boundaries() {
        assert_eq!(normalize_country("guinea-bissau"), "Guinea-Bissau");
        assert_eq!(normalize_country("côte d'ivoire"), "Côte D'Ivoire");
        assert_eq!(normalize_country("u.s.a"), "U.S.A");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_country(""), "");
        assert_eq!(normalize_country("   "), "");
    }

    #[test]
    fn test_normalize_keeps_inner_spacing() {
        assert_eq!(normalize_country("new   zealand"), "New   Zealand");
    }
}
