//! xpot - deterministic gettext catalog extraction for JS/TS projects
//!
//! xpot scans a source tree for gettext-style translation calls, aggregates
//! the observed messages into a catalog, and writes one PO file per locale.
//! Output is byte-stable: the same sources produce the same catalog no matter
//! the file order, scan parallelism, or host locale, with the two timestamp
//! header fields as the only permitted variance.
//!
//! ## Module Structure
//!
//! - `catalog`: Observation accumulation and deterministic snapshot ordering
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `extract`: The extractor boundary and the built-in keyword extractor
//! - `issues`: Non-fatal finding types surfaced in the run report
//! - `po`: PO format rendering, parsing, and escaping
//! - `reporter`: Run report printing
//! - `scanner`: Source file discovery
//! - `session`: One extraction run end-to-end

pub mod catalog;
pub mod cli;
pub mod config;
pub mod extract;
pub mod issues;
pub mod po;
pub mod reporter;
pub mod scanner;
pub mod session;
