// crates/tzfind-core/src/lib.rs

//! tzfind-core
//! ===========
//!
//! Prefix search with fuzzy fallback over city and country names.
//!
//! A query is normalized (letters and digits only, lowercased) and walked
//! down a trie. Landing on a complete name gives that one name; landing on a
//! prefix gives the names below it ranked by edit distance; falling off the
//! trie gives nothing.
//!
//! ```rust
//! use tzfind_core::{Lookup, Trie};
//!
//! let trie: Trie = ["London", "Los Angeles", "Berlin"]
//!     .into_iter()
//!     .map(|name| (name, name))
//!     .collect();
//!
//! assert_eq!(trie.search_prefix("london"), Lookup::Exact("London".into()));
//! assert_eq!(trie.search_prefix("Lo").into_matches(), ["London", "Los Angeles"]);
//! assert!(!trie.search_prefix("Paris").is_found());
//! ```
//!
//! With the default `bundled` feature, [`LocationIndex::global`] gives a
//! process-wide index over the shipped vocabulary, built on first use.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod loader;
pub mod prelude;
pub mod resolve;
pub mod text;
pub mod trie;
pub mod vocab;

// Re-exports
pub use crate::common::VocabStats;
pub use crate::error::{LocationKind, Result, TzFindError};
pub use crate::fuzzy::{edit_distance, rank_closest, DEFAULT_MATCH_LIMIT};
pub use crate::index::LocationIndex;
pub use crate::resolve::{resolve_locations, resolve_zone, Resolution, ZoneInfo};
pub use crate::text::normalize;
pub use crate::trie::{Lookup, Trie};
pub use crate::vocab::{CityRecord, Vocabulary};
