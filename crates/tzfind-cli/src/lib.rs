//! tzfind-cli
//! ==========
//!
//! Command-line interface for the `tzfind-core` place-name search.
//!
//! This crate primarily provides a binary (`tzfind`). The small library
//! target exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! tzfind --help
//! tzfind city new york
//! tzfind country united
//! tzfind zone pst
//! tzfind --data ./places.json.gz stats
//! ```
//!
//! For programmatic access, use [`tzfind-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
