//! Country association heuristics.
//!
//! The ingestion pipeline does not always stamp observations with a
//! `country_iso2`. For those rows the only available association is a text
//! match against the observation's category and source name. That fallback
//! is a heuristic, not a relational join; it lives here, in one place, so
//! both backends share it and tests can exercise it apart from the exact
//! path.

use vigia_core::types::normalize_iso2;
use vigia_core::Observation;

/// Returns `true` if the observation belongs to the country identified by
/// `iso2` (any case) and `country_name`.
///
/// Exact `country_iso2` equality is authoritative. The text fallback is
/// consulted only for rows with no explicit linkage.
pub fn matches_country(obs: &Observation, iso2: &str, country_name: &str) -> bool {
    let iso2 = normalize_iso2(iso2);
    match &obs.country_iso2 {
        Some(code) => normalize_iso2(code) == iso2,
        None => text_fallback_matches(obs, &iso2, country_name),
    }
}

/// The fragile text fallback: category or source name contains the ISO2
/// code or the country name, case-insensitively.
pub fn text_fallback_matches(obs: &Observation, iso2: &str, country_name: &str) -> bool {
    let haystacks = [obs.category.to_string(), obs.source_name.clone()];
    let name_lower = country_name.to_lowercase();
    let iso2_lower = iso2.to_lowercase();
    haystacks.iter().any(|text| {
        let text = text.to_lowercase();
        text.contains(&name_lower) || text.contains(&iso2_lower)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vigia_core::{Category, Severity};

    fn obs(country_iso2: Option<&str>, source_name: &str) -> Observation {
        Observation {
            id: 1,
            category: Category::Irregularidad,
            title: "test".to_string(),
            indicator: None,
            severity: Severity::Moderado,
            captured_at: "2026-02-06T10:30:00Z".parse().unwrap(),
            source_name: source_name.to_string(),
            source_url: None,
            country_iso2: country_iso2.map(str::to_string),
        }
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let o = obs(Some("UG"), "Electoral Commission");
        assert!(matches_country(&o, "ug", "Uganda"));
        assert!(matches_country(&o, "UG", "Uganda"));
        assert!(!matches_country(&o, "NG", "Nigeria"));
    }

    #[test]
    fn test_explicit_code_suppresses_text_fallback() {
        // Source name mentions Nigeria, but the explicit code says Uganda.
        let o = obs(Some("UG"), "INEC Nigeria");
        assert!(!matches_country(&o, "NG", "Nigeria"));
        assert!(matches_country(&o, "ug", "Uganda"));
    }

    #[test]
    fn test_fallback_matches_country_name_in_source() {
        let o = obs(None, "INEC Nigeria");
        assert!(matches_country(&o, "NG", "Nigeria"));
    }

    #[test]
    fn test_fallback_matches_iso2_in_source() {
        let o = obs(None, "OAS mission CO desk");
        assert!(matches_country(&o, "co", "Colombia"));
    }

    #[test]
    fn test_fallback_no_match() {
        let o = obs(None, "Generic wire service");
        assert!(!matches_country(&o, "UG", "Uganda"));
    }
}
