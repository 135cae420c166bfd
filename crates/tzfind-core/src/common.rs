use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a vocabulary.
///
/// Returned by [`crate::Vocabulary::stats`]; counts reflect the loaded
/// vocabulary, not the tries built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabStats {
    pub cities: usize,
    pub countries: usize,
    pub country_codes: usize,
    pub abbreviations: usize,
}
