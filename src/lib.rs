//! cablegraph - Cable connection extraction from wiring-diagram text
//!
//! Reads the per-page text of vessel wiring diagrams, finds cable IDs,
//! infers the equipment each sighting sits next to, and pairs sightings of
//! the same cable into point-to-point connections. Anything that cannot be
//! paired with confidence lands on a review list instead of being dropped.
//!
//! # Architecture
//!
//! The extraction is a pure, deterministic batch computation:
//! - Pages are scanned for cable IDs and a window of surrounding lines
//! - Each sighting gets an endpoint label and confidence from keyword scoring
//! - Sightings are grouped by cable ID across all documents and paired
//!
//! The same documents and options always produce the same result.
//!
//! # Modules
//!
//! - `extract`: Per-page recognition, windowing and endpoint inference
//! - `core`: Options, pairing and the orchestrator
//! - `domain`: Data structures (Page, Occurrence, Edge, ReviewItem)
//! - `export`: JSON, CSV and Markdown rendering
//! - `ingest`: Loading page text from disk
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Pair cables across two diagrams of the same vessel
//! cablegraph extract bridge.json engine-room.txt --format markdown
//!
//! # Inspect how each sighting was scored
//! cablegraph scan bridge.json
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod export;
pub mod extract;
pub mod ingest;

// Re-export main types at crate root for convenience
pub use crate::core::{extract_documents, ExtractOptions, Extractor, OptionsError};
pub use domain::{
    Document, Edge, EdgeTag, EndpointInference, EnrichedOccurrence, ExtractionResult, Occurrence,
    Page, ReviewItem, Summary,
};
pub use export::OutputFormat;
