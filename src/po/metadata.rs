//! Catalog header metadata.

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// PO timestamp shape, always rendered in UTC so output never depends on
/// the host timezone.
const PO_TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]+0000");

/// Header fields for one rendered catalog.
///
/// Both timestamps are plain strings supplied by the caller; the serializer
/// never consults a clock, which keeps it a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMetadata {
    /// Project-Id-Version header value.
    pub project_id: String,
    /// POT-Creation-Date value.
    pub creation_date: String,
    /// PO-Revision-Date value.
    pub revision_date: String,
}

impl CatalogMetadata {
    pub fn new(
        project_id: impl Into<String>,
        creation_date: impl Into<String>,
        revision_date: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            creation_date: creation_date.into(),
            revision_date: revision_date.into(),
        }
    }
}

/// Current UTC time in PO header form, e.g. `2026-08-27 14:03+0000`.
pub fn po_timestamp_now() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&PO_TIMESTAMP)
        .context("Failed to format catalog timestamp")
}
