// crates/tzfind-core/src/text.rs

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// `true` for characters that belong in a key: general category `L*`
/// (letters) or `N*` (numbers). Combining marks are not letters even where
/// Unicode counts them as alphabetic.
fn is_key_char(ch: char) -> bool {
    ch.general_category_group() == GeneralCategoryGroup::Letter || ch.is_numeric()
}

/// Convert a place name into the key used for indexing and lookup.
///
/// Keeps only Unicode letters and digits, lowercasing the letters. Spaces,
/// punctuation, symbols and combining marks are dropped, not replaced, so
/// `"New York"` and `"new-york"` both become `"newyork"`.
///
/// The same function runs at insert time and at query time; matching is only
/// consistent as long as both sides go through it.
///
/// # Examples
///
/// ```rust
/// use tzfind_core::text::normalize;
///
/// assert_eq!(normalize("Hello, World!"), "helloworld");
/// assert_eq!(normalize("Zürich"), "zürich");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars().filter(|&c| is_key_char(c)) {
        // Some capitals lowercase into a letter plus a combining mark; only
        // the letter belongs in the key.
        out.extend(ch.to_lowercase().filter(|&c| is_key_char(c)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_and_lowercases() {
        let cases = [
            ("!abc2", "abc2"),
            ("123@abc$def", "123abcdef"),
            ("Hello, World!", "helloworld"),
            ("kritib", "kritib"),
            ("New York", "newyork"),
            ("new-york", "newyork"),
            ("St. John's", "stjohns"),
            ("", ""),
            ("  ...  ", ""),
        ];
        for (given, want) in cases {
            assert_eq!(normalize(given), want, "normalize({given:?})");
        }
    }

    #[test]
    fn normalize_keeps_non_ascii_letters() {
        assert_eq!(normalize("São Paulo"), "sãopaulo");
        assert_eq!(normalize("ŁÓDŹ"), "łódź");
        assert_eq!(normalize("東京"), "東京");
    }

    #[test]
    fn normalize_drops_combining_marks() {
        // Devanagari vowel signs (Mc) are alphabetic but not letters.
        assert_eq!(normalize("नेपाल"), "नपल");
        assert_eq!(normalize("काठमाडौं"), "कठमड");
        // U+093F (Mc) and U+0345 (Mn) on their own leave nothing.
        assert_eq!(normalize("\u{093F}\u{0345}"), "");
        // Decomposed accents lose the mark and keep the base letter.
        assert_eq!(normalize("Zu\u{0308}rich"), "zurich");
        // İ lowercases to i + U+0307; the dot is dropped.
        assert_eq!(normalize("İzmir"), "izmir");
    }

    #[test]
    fn normalize_output_is_lowercase_letters_and_digits_and_idempotent() {
        let samples = [
            "Los Angeles",
            "Port-au-Prince",
            "Ho Chi Minh City",
            "Ärø",
            "A1 B2 C3!!",
            "\t\n",
            "Guinea-Bissau (GW)",
            "नेपाल",
            "İstanbul",
            "Ⅻ Ⅳ ½",
        ];
        for s in samples {
            let once = normalize(s);
            assert!(
                once.chars().all(|c| {
                    let letter = c.general_category_group() == GeneralCategoryGroup::Letter;
                    (letter || c.is_numeric()) && !c.is_uppercase()
                }),
                "{once:?} contains non-key characters"
            );
            assert_eq!(normalize(&once), once, "normalize not idempotent on {s:?}");
        }
    }
}
