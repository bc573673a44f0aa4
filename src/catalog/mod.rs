//! Catalog aggregation: observations in, deterministically ordered
//! snapshots out.
//!
//! The types here carry the determinism contract of the whole tool: the
//! snapshot produced by [`CatalogStore::snapshot`] depends only on the set
//! of ingested (text, location) pairs, never on ingestion order, batch
//! grouping, or scan scheduling.

mod location;
mod record;
mod store;

pub use location::Location;
pub use record::MessageRecord;
pub use store::{BaselineMessage, CatalogSnapshot, CatalogStore, StalePolicy};
