//! Shared utilities.
//!
//! - [`normalize`] - text normalization used by the query parser and the
//!   free-text match path

pub mod normalize;

pub use normalize::*;
