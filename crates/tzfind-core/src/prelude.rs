//! tzfind prelude: bring common types and functions into scope for demos.

#![allow(unused_imports)]

pub use crate::error::{LocationKind, Result, TzFindError};
pub use crate::fuzzy::{edit_distance, rank_closest};
pub use crate::index::LocationIndex;
pub use crate::resolve::{resolve_locations, resolve_zone, Resolution, ZoneInfo};
pub use crate::text::normalize;
pub use crate::trie::{Lookup, Trie};
pub use crate::vocab::{CityRecord, Vocabulary};
