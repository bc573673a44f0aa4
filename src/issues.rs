//! Non-fatal findings surfaced during an extraction session.
//!
//! These are values, not errors: the session keeps running when one file
//! fails to extract or one baseline catalog is malformed. Fatal conditions
//! (unwritable destination, invalid config) propagate as `anyhow` errors
//! instead.

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A non-fatal finding, attributable to one file or path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIssue {
    /// A source file failed to yield observations (unreadable, extractor
    /// failure). The file was skipped; other files are unaffected.
    ExtractionFailed { file_path: String, error: String },
    /// An existing catalog was malformed and could not serve as a merge
    /// baseline. Extraction proceeded with an empty baseline, so existing
    /// translations in that file are not preserved.
    MalformedBaseline { file_path: String, error: String },
}

impl SessionIssue {
    pub fn severity(&self) -> Severity {
        match self {
            SessionIssue::ExtractionFailed { .. } => Severity::Error,
            SessionIssue::MalformedBaseline { .. } => Severity::Warning,
        }
    }

    /// The file or path this issue is attributable to.
    pub fn file_path(&self) -> &str {
        match self {
            SessionIssue::ExtractionFailed { file_path, .. }
            | SessionIssue::MalformedBaseline { file_path, .. } => file_path,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionIssue::ExtractionFailed { error, .. } => {
                format!("extraction failed: {}", error)
            }
            SessionIssue::MalformedBaseline { error, .. } => {
                format!("malformed catalog, starting fresh: {}", error)
            }
        }
    }
}
