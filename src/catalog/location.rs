//! Source references attached to observed messages.

use std::fmt;

/// A source reference: where a message was observed.
///
/// Ordering is lexicographic on `path` bytes, then numeric on `line`
/// (a missing line sorts before any present line). This is the canonical
/// order for `#: ` reference lines in the rendered catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// File path exactly as supplied by the extractor.
    pub path: String,
    /// 1-based line number, if known.
    pub line: Option<u32>,
}

impl Location {
    pub fn new(path: impl Into<String>, line: u32) -> Self {
        Self {
            path: path.into(),
            line: Some(line),
        }
    }

    /// A reference without line information (whole-file reference).
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line: None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path, line),
            None => write!(f, "{}", self.path),
        }
    }
}
