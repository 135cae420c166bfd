// crates/tzfind-core/src/index.rs

//! # Location Index
//!
//! Lazily built tries over the city and country names of a [`Vocabulary`].
//!
//! Each trie is built on the first lookup that needs it, exactly once, even
//! when several threads ask at the same time: one thread builds while the
//! others block on the same [`OnceCell`], then everyone reads the finished
//! trie without locking.

use crate::error::{LocationKind, Result, TzFindError};
use crate::resolve::{resolve_locations, Resolution};
use crate::trie::Trie;
use crate::vocab::Vocabulary;
use log::debug;
use once_cell::sync::OnceCell;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "bundled")]
static GLOBAL_INDEX: OnceCell<LocationIndex<'static>> = OnceCell::new();

/// Search front-end over a vocabulary.
#[derive(Debug)]
pub struct LocationIndex<'v> {
    vocab: &'v Vocabulary,
    cities: OnceCell<Trie>,
    countries: OnceCell<Trie>,
    #[cfg(test)]
    builds: AtomicUsize,
}

impl<'v> LocationIndex<'v> {
    /// Wraps `vocab`. No trie is built until the first lookup.
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self {
            vocab,
            cities: OnceCell::new(),
            countries: OnceCell::new(),
            #[cfg(test)]
            builds: AtomicUsize::new(0),
        }
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocab
    }

    /// The city trie, built on first access.
    pub fn city_trie(&self) -> &Trie {
        self.cities.get_or_init(|| {
            #[cfg(test)]
            self.builds.fetch_add(1, Ordering::SeqCst);
            let trie: Trie = self.vocab.cities.keys().map(|name| (name, name)).collect();
            debug!("built city trie with {} names", trie.len());
            trie
        })
    }

    /// The country trie, built on first access.
    pub fn country_trie(&self) -> &Trie {
        self.countries.get_or_init(|| {
            #[cfg(test)]
            self.builds.fetch_add(1, Ordering::SeqCst);
            let trie: Trie = self.vocab.countries.keys().map(|name| (name, name)).collect();
            debug!("built country trie with {} names", trie.len());
            trie
        })
    }

    /// `true` once the trie for `kind` has been built.
    pub fn is_built(&self, kind: LocationKind) -> bool {
        match kind {
            LocationKind::City => self.cities.get().is_some(),
            LocationKind::Country => self.countries.get().is_some(),
        }
    }

    /// Cities matching `query`: the exact name, or up to ten names that start
    /// with it, closest first.
    pub fn find_city(&self, query: &str) -> Result<Vec<String>> {
        let lookup = self.city_trie().search_prefix(query);
        if !lookup.is_found() {
            return Err(TzFindError::not_found(LocationKind::City, query));
        }
        Ok(lookup.into_matches())
    }

    /// Countries matching `query`.
    ///
    /// An ISO alpha-2 or alpha-3 code resolves to exactly one country without
    /// touching the trie; anything else is a name or name prefix.
    pub fn find_country(&self, query: &str) -> Result<Vec<String>> {
        if let Some(name) = self.vocab.country_for_code(query) {
            return Ok(vec![name.to_owned()]);
        }
        let lookup = self.country_trie().search_prefix(query);
        if !lookup.is_found() {
            return Err(TzFindError::not_found(LocationKind::Country, query));
        }
        Ok(lookup.into_matches())
    }

    /// Looks up `city` when it is non-empty, otherwise `country`.
    pub fn find_location(&self, city: &str, country: &str) -> Result<Vec<String>> {
        if city.is_empty() {
            self.find_country(country)
        } else {
            self.find_city(city)
        }
    }

    /// [`find_city`](Self::find_city) followed by timezone resolution.
    pub fn lookup_city(&self, query: &str) -> Result<Resolution> {
        let names = self.find_city(query)?;
        resolve_locations(self.vocab, &names)
    }

    /// [`find_country`](Self::find_country) followed by timezone resolution.
    pub fn lookup_country(&self, query: &str) -> Result<Resolution> {
        let names = self.find_country(query)?;
        resolve_locations(self.vocab, &names)
    }
}

#[cfg(feature = "bundled")]
impl LocationIndex<'static> {
    /// Process-wide index over [`Vocabulary::bundled`].
    pub fn global() -> Result<&'static LocationIndex<'static>> {
        GLOBAL_INDEX.get_or_try_init(|| Ok(LocationIndex::new(Vocabulary::bundled()?)))
    }
}
