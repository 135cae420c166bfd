// crates/tzfind-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and hands the JSON
//! payload to serde. The bundled vocabulary is parsed once per process.

use crate::error::Result;
use crate::vocab::Vocabulary;
use log::debug;
use std::io::Read;
use std::path::Path;

mod common_io;

#[cfg(feature = "bundled")]
use once_cell::sync::OnceCell;

#[cfg(feature = "bundled")]
static BUNDLED_JSON: &str = include_str!("../../data/tzdata.json");

#[cfg(feature = "bundled")]
static BUNDLED: OnceCell<Vocabulary> = OnceCell::new();

impl Vocabulary {
    /// The vocabulary shipped with the crate.
    ///
    /// Parsed on first call and cached for the life of the process;
    /// concurrent first callers wait for the single parse to finish.
    #[cfg(feature = "bundled")]
    pub fn bundled() -> Result<&'static Vocabulary> {
        BUNDLED.get_or_try_init(|| {
            let vocab = Self::from_json_str(BUNDLED_JSON)?;
            debug!("parsed bundled vocabulary: {:?}", vocab.stats());
            Ok(vocab)
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the whole stream, then parses it. Read and decompression
    /// failures surface as [`TzFindError::Io`](crate::TzFindError::Io),
    /// bad JSON as [`TzFindError::Json`](crate::TzFindError::Json).
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// Reads a vocabulary JSON file. Paths ending in `.gz` are decompressed
    /// on the fly (requires the `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let vocab = Self::from_reader(reader)?;
        debug!("loaded vocabulary from {}: {:?}", path.display(), vocab.stats());
        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TzFindError;
    use std::io::Write;

    const SMALL: &str = r#"{ "cities": { "Oslo": { "tz": "Europe/Oslo", "country": "Norway" } } }"#;

    #[test]
    fn loads_plain_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let vocab = Vocabulary::load_from_path(file.path()).unwrap();
        assert_eq!(vocab.city("Oslo").unwrap().country, "Norway");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn loads_gzipped_json_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        encoder.write_all(SMALL.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let vocab = Vocabulary::load_from_path(file.path()).unwrap();
        assert_eq!(vocab.stats().cities, 1);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Vocabulary::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TzFindError::DatasetNotFound { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = Vocabulary::from_json_str(r#"{ "cities": [1, 2] }"#).unwrap_err();
        assert!(matches!(err, TzFindError::Json(_)));
    }

    #[test]
    fn unreadable_bytes_are_an_io_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(&[b'{', 0xff, 0xfe, b'}']).unwrap();

        let err = Vocabulary::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, TzFindError::Io(_)), "got {err:?}");
        assert!(!err.is_not_found());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn corrupt_gzip_is_an_io_error() {
        let mut file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let err = Vocabulary::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, TzFindError::Io(_)), "got {err:?}");
    }

    #[cfg(feature = "bundled")]
    #[test]
    fn bundled_is_parsed_once() {
        let a = Vocabulary::bundled().unwrap();
        let b = Vocabulary::bundled().unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(a.stats().cities > 50);
        assert_eq!(a.country_for_code("US"), Some("United States of America"));
    }
}
