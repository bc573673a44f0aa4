//! Aggregated per-message state.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Location;

/// The accumulated state for one distinct message text.
///
/// A record is uniquely identified by `text` within one catalog; repeated
/// observations of the same text merge into the location set rather than
/// creating duplicates. `BTreeSet`/`BTreeMap` keep iteration deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    /// The exact message string. Deduplication key, compared byte-for-byte
    /// with no whitespace or case normalization.
    pub text: String,
    /// Deduplicated source references, iterated in (path, line) order.
    pub locations: BTreeSet<Location>,
    /// Translations keyed by locale code. Empty when untranslated.
    pub translations: BTreeMap<String, String>,
}

impl MessageRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locations: BTreeSet::new(),
            translations: BTreeMap::new(),
        }
    }

    /// The translation for `locale`, or `""` when untranslated.
    pub fn translation_for(&self, locale: &str) -> &str {
        self.translations.get(locale).map_or("", String::as_str)
    }
}
