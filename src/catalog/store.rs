//! Observation accumulator and deterministic snapshot construction.

use std::collections::HashMap;

use crate::catalog::{Location, MessageRecord};

/// What happens to baseline messages that were not re-observed in the
/// current scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Drop them from the new catalog (gettext default).
    #[default]
    Drop,
    /// Keep them, with their baseline references and translations.
    Retain,
}

/// One entry of a previously written catalog, used as a merge baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineMessage {
    pub text: String,
    pub translation: String,
    pub locations: Vec<Location>,
}

/// The deterministically ordered, immutable view of a catalog at the
/// moment serialization begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    /// Records sorted by `text` bytes; each record's locations sorted
    /// by (path, line).
    pub messages: Vec<MessageRecord>,
}

impl CatalogSnapshot {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Mutable accumulator for one extraction session.
///
/// `ingest` may be fed observations in any order; the snapshot is a pure
/// function of the *set* of (text, location) pairs received. The store is
/// `Clone` so per-locale merges can run on copies while the session's
/// observation state stays untouched.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: HashMap<String, MessageRecord>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct message texts accumulated so far.
    pub fn message_count(&self) -> usize {
        self.records.len()
    }

    /// Total number of distinct (text, location) pairs.
    pub fn reference_count(&self) -> usize {
        self.records.values().map(|r| r.locations.len()).sum()
    }

    /// Record one observation. Idempotent: ingesting the same
    /// (text, location) pair twice has no additional effect.
    pub fn ingest(&mut self, text: &str, location: Location) {
        self.records
            .entry(text.to_string())
            .or_insert_with(|| MessageRecord::new(text))
            .locations
            .insert(location);
    }

    /// Seed translations from a previously written catalog.
    ///
    /// Baseline messages whose text was observed this run keep their
    /// translation for `locale`. Messages no longer observed are dropped
    /// or re-added per `policy`.
    pub fn merge(&mut self, locale: &str, baseline: Vec<BaselineMessage>, policy: StalePolicy) {
        for message in baseline {
            match self.records.get_mut(&message.text) {
                Some(record) => {
                    if !message.translation.is_empty() {
                        record
                            .translations
                            .insert(locale.to_string(), message.translation);
                    }
                }
                None => {
                    if policy == StalePolicy::Retain {
                        let record = self
                            .records
                            .entry(message.text.clone())
                            .or_insert_with(|| MessageRecord::new(&message.text));
                        record.locations.extend(message.locations);
                        if !message.translation.is_empty() {
                            record
                                .translations
                                .insert(locale.to_string(), message.translation);
                        }
                    }
                }
            }
        }
    }

    /// Close the store and produce the canonical ordering.
    ///
    /// Records are materialized out of the map and sorted by `text` using
    /// plain byte comparison, never locale-aware collation and never the
    /// map's own iteration order. Locations are already held in (path, line)
    /// order by the record's `BTreeSet`.
    pub fn snapshot(self) -> CatalogSnapshot {
        let mut messages: Vec<MessageRecord> = self.records.into_values().collect();
        messages.sort_unstable_by(|a, b| a.text.as_bytes().cmp(b.text.as_bytes()));
        CatalogSnapshot { messages }
    }
}
