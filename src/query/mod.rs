pub mod executor;
pub mod parser;
pub mod predicate;

pub use executor::{compile, search};
pub use parser::{SearchQuery, parse};
pub use predicate::{Feature, Marker, Predicate, build_predicate};
