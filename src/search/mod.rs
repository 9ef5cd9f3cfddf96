//! In-memory query engine: language filter, fuzzy text match, sort.

pub mod fuzzy;
pub mod query;

pub use query::search;
