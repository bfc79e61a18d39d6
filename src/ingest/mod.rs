//! Input loading.
//!
//! Converting PDFs to text happens upstream; this module reads the per-page
//! text that conversion produced and hands `Document`s to the extractor.

pub mod loader;

pub use loader::{load_document, parse_document, split_pages, InputKind, LoadError, PAGE_BREAK};
