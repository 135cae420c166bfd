// crates/tzfind-core/src/vocab.rs

//! # Vocabulary
//!
//! The read-only place-name data the indexes are built from. Names are the
//! canonical display spellings; the timezone identifiers they map to are
//! carried through untouched.

use crate::common::VocabStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a city name resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    /// IANA zone identifier, e.g. `Europe/London`.
    pub tz: String,
    /// Canonical country name.
    pub country: String,
}

/// All names the index knows about.
///
/// Every map defaults to empty when missing from the source JSON, so a file
/// with only `"cities"` is a valid vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub cities: BTreeMap<String, CityRecord>,
    /// Country name → zone identifiers, primary zone first.
    #[serde(default)]
    pub countries: BTreeMap<String, Vec<String>>,
    /// ISO 3166 alpha-2 code (upper case) → country name.
    #[serde(default)]
    pub alpha2: BTreeMap<String, String>,
    /// ISO 3166 alpha-3 code (upper case) → country name.
    #[serde(default)]
    pub alpha3: BTreeMap<String, String>,
    /// Zone abbreviation (upper case) → zone identifier.
    #[serde(default)]
    pub abbreviations: BTreeMap<String, String>,
}

impl Vocabulary {
    pub fn stats(&self) -> VocabStats {
        VocabStats {
            cities: self.cities.len(),
            countries: self.countries.len(),
            country_codes: self.alpha2.len() + self.alpha3.len(),
            abbreviations: self.abbreviations.len(),
        }
    }

    pub fn city(&self, name: &str) -> Option<&CityRecord> {
        self.cities.get(name)
    }

    pub fn country_zones(&self, name: &str) -> Option<&[String]> {
        self.countries.get(name).map(Vec::as_slice)
    }

    /// Canonical country name for an ISO alpha-2 or alpha-3 code.
    ///
    /// Case-insensitive; alpha-2 is tried first.
    pub fn country_for_code(&self, code: &str) -> Option<&str> {
        let code = code.trim().to_uppercase();
        self.alpha2
            .get(&code)
            .or_else(|| self.alpha3.get(&code))
            .map(String::as_str)
    }

    /// Zone identifier for an abbreviation such as `pst` (case-insensitive).
    pub fn zone_for_abbreviation(&self, abbreviation: &str) -> Option<&str> {
        self.abbreviations
            .get(&abbreviation.trim().to_uppercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        serde_json::from_str(
            r#"{
                "cities": { "Kathmandu": { "tz": "Asia/Kathmandu", "country": "Nepal" } },
                "countries": { "Nepal": ["Asia/Kathmandu"] },
                "alpha2": { "NP": "Nepal" },
                "alpha3": { "NPL": "Nepal" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let v = vocab();
        assert!(v.abbreviations.is_empty());
        assert_eq!(
            v.stats(),
            VocabStats {
                cities: 1,
                countries: 1,
                country_codes: 2,
                abbreviations: 0,
            }
        );
    }

    #[test]
    fn country_codes_are_case_insensitive() {
        let v = vocab();
        assert_eq!(v.country_for_code("np"), Some("Nepal"));
        assert_eq!(v.country_for_code(" Npl "), Some("Nepal"));
        assert_eq!(v.country_for_code("NE"), None);
    }

    #[test]
    fn lookups_by_name() {
        let v = vocab();
        assert_eq!(v.city("Kathmandu").map(|c| c.tz.as_str()), Some("Asia/Kathmandu"));
        assert_eq!(v.country_zones("Nepal"), Some(&["Asia/Kathmandu".to_string()][..]));
        assert!(v.city("kathmandu").is_none());
    }
}
