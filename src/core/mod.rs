//! Core extraction logic.
//!
//! This module contains:
//! - Options: Extraction options and flag parsing
//! - Pairing: Grouping occurrences by cable ID into edges and review items
//! - Orchestrator: Scanning documents and aggregating the result

pub mod options;
pub mod orchestrator;
pub mod pairing;

// Re-export commonly used types
pub use options::{parse_flag, ExtractOptions, OptionsError};
pub use orchestrator::{extract_documents, Extractor};
pub use pairing::{group_by_cable_id, pair_occurrences, CableGroup, Pairing, DOMINANCE_GAP};
