//! The extraction boundary: turning file content into observations.
//!
//! The catalog core only depends on the [`Extractor`] contract; how call
//! sites are recognized is a collaborator concern. [`KeywordExtractor`] is
//! the built-in implementation.

mod keyword;

use anyhow::Result;

use crate::catalog::Location;

pub use keyword::{DEFAULT_KEYWORDS, KeywordExtractor};

/// One (message text, source location) pair discovered in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub text: String,
    pub location: Location,
}

/// Recognizes translatable call sites in file content.
///
/// Implementations must be `Sync`: files are processed in parallel and one
/// extractor instance is shared across workers. The returned order does not
/// matter; the store's snapshot is order-insensitive.
pub trait Extractor: Sync {
    fn extract(&self, content: &str, path: &str) -> Result<Vec<Observation>>;
}
