// crates/tzfind-core/src/error.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What kind of name a lookup was for.
///
/// Carried inside [`TzFindError::NotFound`] so callers can tell a missing
/// city from a missing country without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    City,
    Country,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LocationKind::City => "City",
            LocationKind::Country => "Country",
        };
        f.write_str(s)
    }
}

/// Errors surfaced by the vocabulary loader, the location index and the
/// resolver. Searching a [`crate::Trie`] directly never fails.
#[derive(Debug, Error)]
pub enum TzFindError {
    /// The query matched nothing. The message is meant for end users.
    #[error("{kind} '{query}' not found!")]
    NotFound { kind: LocationKind, query: String },

    /// A zone abbreviation that is not in the vocabulary.
    #[error("Zone abbreviation '{0}' not found.")]
    UnknownZone(String),

    #[error("Dataset not found at {}: {source}", .path.display())]
    DatasetNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading or decompressing an opened vocabulary stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl TzFindError {
    pub fn not_found(kind: LocationKind, query: impl Into<String>) -> Self {
        TzFindError::NotFound {
            kind,
            query: query.into(),
        }
    }

    /// `true` for the "no match" outcomes, as opposed to a loading failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TzFindError::NotFound { .. } | TzFindError::UnknownZone(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TzFindError>;
