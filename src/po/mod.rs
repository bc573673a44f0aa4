//! The PO catalog text format: rendering, parsing, and escaping.

mod escape;
mod metadata;
mod parser;
mod serializer;

pub use escape::{escape, unescape};
pub use metadata::{CatalogMetadata, po_timestamp_now};
pub use parser::{PoEntry, PoFile, parse};
pub use serializer::{render, strip_timestamps};
