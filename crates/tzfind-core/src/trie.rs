// crates/tzfind-core/src/trie.rs

//! # Trie Index
//!
//! A character trie over [`normalize`]d names. Every terminal node remembers
//! the original display string it was inserted with, so lookups answer in
//! the vocabulary's own spelling ("Los Angeles", not "losangeles").

use crate::fuzzy::{rank_closest, DEFAULT_MATCH_LIMIT};
use crate::text::normalize;
use log::{trace, warn};
use std::collections::BTreeMap;

/// One node of the trie.
///
/// `display` is `Some` exactly when a word ends here; the path of keys from
/// the root to this node is then `normalize(display)`.
#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    display: Option<String>,
}

impl TrieNode {
    fn is_terminal(&self) -> bool {
        self.display.is_some()
    }

    /// Depth-first collection of every display value at or below this node.
    fn collect_words<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(display) = &self.display {
            out.push(display);
        }
        for child in self.children.values() {
            child.collect_words(out);
        }
    }
}

/// Outcome of [`Trie::search_prefix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The query normalized to a complete stored name.
    Exact(String),
    /// The query is a strict prefix of one or more names; these are the
    /// closest ones by edit distance, best first, at most
    /// [`DEFAULT_MATCH_LIMIT`].
    Ranked(Vec<String>),
    /// No stored name starts with the query.
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        !matches!(self, Lookup::NotFound)
    }

    /// The matches as a flat list; empty for [`Lookup::NotFound`].
    pub fn matches(&self) -> &[String] {
        match self {
            Lookup::Exact(word) => std::slice::from_ref(word),
            Lookup::Ranked(words) => words,
            Lookup::NotFound => &[],
        }
    }

    pub fn into_matches(self) -> Vec<String> {
        match self {
            Lookup::Exact(word) => vec![word],
            Lookup::Ranked(words) => words,
            Lookup::NotFound => Vec::new(),
        }
    }

    /// The `(found, matches)` pair view of this outcome.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.is_found(), self.into_matches())
    }
}

/// Prefix index over place names.
///
/// Built by repeated [`Trie::insert`] and then only read. Reads take `&self`
/// and the type is `Sync`, so a finished trie can be shared across threads
/// without locking.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct (normalized) names stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `word` under its normalized key, remembering `display` as the
    /// name to return for it.
    ///
    /// If another name already normalized to the same key, its display value
    /// is replaced (last write wins). A word that normalizes to nothing is
    /// ignored: the root never ends a word.
    pub fn insert(&mut self, word: &str, display: impl Into<String>) {
        let key = normalize(word);
        if key.is_empty() {
            warn!("ignoring name {word:?}: no letters or digits to index");
            return;
        }

        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }

        let display = display.into();
        match node.display.replace(display) {
            None => self.len += 1,
            Some(previous) => {
                if node.display.as_deref() != Some(previous.as_str()) {
                    warn!(
                        "{previous:?} and {:?} share key {key:?}; keeping the latter",
                        node.display.as_deref().unwrap_or_default()
                    );
                }
            }
        }
    }

    /// `true` if `word` normalizes to a complete stored name.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(&normalize(word))
            .is_some_and(TrieNode::is_terminal)
    }

    /// Exact-or-prefix lookup.
    ///
    /// - If `query` normalizes to a stored name, that name alone is returned,
    ///   even when longer names continue below it.
    /// - If it normalizes to a strict prefix, every name below is ranked by
    ///   edit distance against the raw `query` and the closest
    ///   [`DEFAULT_MATCH_LIMIT`] are returned.
    /// - If the walk falls off the trie, the result is
    ///   [`Lookup::NotFound`]; no fuzzy search over the whole vocabulary is
    ///   attempted.
    pub fn search_prefix(&self, query: &str) -> Lookup {
        let key = normalize(query);
        let Some(node) = self.walk(&key) else {
            trace!("no path for {key:?}");
            return Lookup::NotFound;
        };

        if let Some(display) = &node.display {
            trace!("exact match for {key:?}: {display:?}");
            return Lookup::Exact(display.clone());
        }

        let mut candidates = Vec::new();
        node.collect_words(&mut candidates);
        trace!("{} names under prefix {key:?}", candidates.len());

        if candidates.is_empty() {
            return Lookup::NotFound;
        }
        Lookup::Ranked(rank_closest(query, &candidates, DEFAULT_MATCH_LIMIT))
    }

    /// Every stored display value, in key order.
    pub fn words(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_words(&mut out);
        out
    }

    fn walk(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

impl<W: AsRef<str>, D: Into<String>> Extend<(W, D)> for Trie {
    fn extend<I: IntoIterator<Item = (W, D)>>(&mut self, iter: I) {
        for (word, display) in iter {
            self.insert(word.as_ref(), display);
        }
    }
}

impl<W: AsRef<str>, D: Into<String>> FromIterator<(W, D)> for Trie {
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        let mut trie = Trie::new();
        trie.insert("London", "London");
        trie.insert("Los Angeles", "Los Angeles");
        trie.insert("Berlin", "Berlin");
        trie
    }

    #[test]
    fn insert_and_search() {
        let trie = sample();
        let cases: [(&str, bool, &[&str]); 4] = [
            ("London", true, &["London"]),
            ("Berlin", true, &["Berlin"]),
            ("Lo", true, &["London", "Los Angeles"]),
            ("Paris", false, &[]),
        ];
        for (given, found, want) in cases {
            let (got_found, got) = trie.search_prefix(given).into_parts();
            assert_eq!(got_found, found, "search_prefix({given:?}) found");
            assert_eq!(got, want, "search_prefix({given:?}) matches");
        }
    }

    #[test]
    fn search_ignores_case_and_punctuation() {
        let trie = sample();
        assert_eq!(
            trie.search_prefix("los-angeles"),
            Lookup::Exact("Los Angeles".into())
        );
        assert_eq!(trie.search_prefix("  LONDON!"), Lookup::Exact("London".into()));
    }

    #[test]
    fn terminal_wins_over_longer_names() {
        let trie: Trie = [("York", "York"), ("Yorkton", "Yorkton"), ("York Harbor", "York Harbor")]
            .into_iter()
            .collect();
        assert_eq!(trie.search_prefix("york"), Lookup::Exact("York".into()));
        assert_eq!(
            trie.search_prefix("yo").into_matches(),
            vec!["York", "Yorkton", "York Harbor"]
        );
    }

    #[test]
    fn broken_path_does_not_fall_back() {
        let trie = sample();
        // One typo past a valid prefix still ends on a missing child.
        assert_eq!(trie.search_prefix("Lpndon"), Lookup::NotFound);
        assert_eq!(trie.search_prefix("Londonx"), Lookup::NotFound);
    }

    #[test]
    fn empty_query_ranks_whole_trie() {
        let trie = sample();
        let got = trie.search_prefix("").into_matches();
        assert_eq!(got.len(), 3);
        assert!(Trie::new().search_prefix("?!").matches().is_empty());
    }

    #[test]
    fn prefix_results_are_capped() {
        let trie: Trie = (0..25)
            .map(|i| (format!("Springfield {i}"), format!("Springfield {i}")))
            .collect();
        let got = trie.search_prefix("Spring").into_matches();
        assert_eq!(got.len(), DEFAULT_MATCH_LIMIT);
        // Single-digit suffixes are closest to the query.
        assert!(got.iter().take(10).all(|w| w.len() == "Springfield 0".len()));
    }

    #[test]
    fn duplicate_keys_keep_last_display() {
        let mut trie = Trie::new();
        trie.insert("Saint-Denis", "Saint-Denis");
        trie.insert("Saint Denis", "Saint Denis");
        assert_eq!(trie.len(), 1);
        assert_eq!(
            trie.search_prefix("saintdenis"),
            Lookup::Exact("Saint Denis".into())
        );
    }

    #[test]
    fn empty_names_are_ignored() {
        let mut trie = sample();
        trie.insert("", "");
        trie.insert("--", "--");
        assert_eq!(trie.len(), 3);
        assert!(!trie.contains(""));
    }

    #[test]
    fn contains_and_words() {
        let trie = sample();
        assert!(trie.contains("berlin"));
        assert!(!trie.contains("ber"));
        assert_eq!(trie.words(), vec!["Berlin", "London", "Los Angeles"]);
        assert!(!trie.is_empty());
    }
}
