// crates/tzfind-core/src/resolve.rs

//! Turning matched names and zone strings into timezone identifiers.
//!
//! Identifiers are returned as stored in the vocabulary; nothing here
//! checks them against a timezone database or does any time arithmetic.

use crate::error::{LocationKind, Result, TzFindError};
use crate::vocab::Vocabulary;
use serde::Serialize;

/// Zone strings shorter than this are treated as abbreviations.
const MIN_ZONE_NAME_LEN: usize = 6;

/// Where a lookup landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// A single city and its zone.
    City {
        city: String,
        country: String,
        timezone: String,
    },
    /// A single country and all of its zones, primary first.
    Country {
        country: String,
        timezones: Vec<String>,
    },
    /// Several names matched; the caller has to pick one.
    Candidates { names: Vec<String> },
}

/// A zone given directly, by abbreviation or by full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneInfo {
    /// The abbreviation as typed, when the zone was given as one.
    pub abbreviation: Option<String>,
    pub timezone: String,
}

/// Resolves the names returned by a location search.
///
/// One name is looked up as a city first, then as a country. Several names
/// are handed back as [`Resolution::Candidates`].
pub fn resolve_locations(vocab: &Vocabulary, names: &[String]) -> Result<Resolution> {
    match names {
        [] => Err(TzFindError::InvalidData("no locations to resolve".into())),
        [name] => {
            if let Some(record) = vocab.city(name) {
                return Ok(Resolution::City {
                    city: name.clone(),
                    country: record.country.clone(),
                    timezone: record.tz.clone(),
                });
            }
            match vocab.country_zones(name) {
                Some([]) => Err(TzFindError::InvalidData(format!(
                    "country '{name}' has no timezones"
                ))),
                Some(zones) => Ok(Resolution::Country {
                    country: name.clone(),
                    timezones: zones.to_vec(),
                }),
                None => Err(TzFindError::not_found(LocationKind::City, name.as_str())),
            }
        }
        _ => Ok(Resolution::Candidates {
            names: names.to_vec(),
        }),
    }
}

/// Resolves a zone given as an abbreviation (`pst`, `NPT`) or as a full
/// IANA name (`Asia/Kathmandu`).
///
/// Inputs shorter than six characters are abbreviations and must be present
/// in the vocabulary; longer inputs are returned as the zone name verbatim.
pub fn resolve_zone(vocab: &Vocabulary, zone: &str) -> Result<ZoneInfo> {
    let zone = zone.trim();
    if zone.chars().count() >= MIN_ZONE_NAME_LEN {
        return Ok(ZoneInfo {
            abbreviation: None,
            timezone: zone.to_owned(),
        });
    }

    let timezone = vocab
        .zone_for_abbreviation(zone)
        .ok_or_else(|| TzFindError::UnknownZone(zone.to_owned()))?;
    Ok(ZoneInfo {
        abbreviation: Some(zone.to_owned()),
        timezone: timezone.to_owned(),
    })
}
