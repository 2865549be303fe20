//! # hymnq - Hymnal Search Query Engine
//!
//! hymnq parses a keyword-augmented search string (free text plus
//! `keyword:value` tokens) and compiles it into a conjunction of predicates
//! evaluated against an in-memory hymnal document, yielding the matching
//! entry ids in document order.
//!
//! ## Architecture
//!
//! - [`query`] - Query parsing, predicate building, and execution
//! - [`document`] - Hymnal document model and XML loader
//! - [`output`] - Result formatting (plain and JSON)
//! - [`utils`] - Text normalization
//!
//! ## Quick Start
//!
//! ```
//! use hymnq::document::xml::parse_hymnal;
//! use hymnq::query::search;
//!
//! let doc = parse_hymnal(
//!     r#"<hymnal lang="en" year="1986">
//!          <hymn id="1"><topic ref="heaven"/>
//!            <verse><line>Alleluia! Sing to Jesus</line></verse>
//!          </hymn>
//!        </hymnal>"#,
//! ).unwrap();
//!
//! assert_eq!(search("topic:heaven alleluia", &doc), vec!["1"]);
//! ```
//!
//! ## Query language
//!
//! Recognized keywords: `topic:`, `tune:`, `lang:`, `day:`,
//! `has:`/`hasnot:` (refrain, chorus, repeat, deleted), `is:`/`isnot:`
//! (deleted, restricted, new, kept). Unrecognized keywords and values are
//! ignored rather than rejected: a search box never hard-fails on input.

pub mod document;
pub mod output;
pub mod query;
pub mod utils;
