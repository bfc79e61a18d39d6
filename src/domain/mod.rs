//! Domain types for the cable extractor.
//!
//! This module contains the core data structures:
//! - Page/Document: Per-page text handed in by the caller
//! - Occurrence: One sighting of a cable ID, with its inferred endpoint
//! - Connection: Edges, review items and the aggregated result

pub mod connection;
pub mod occurrence;
pub mod page;

// Re-export commonly used types
pub use connection::{Edge, EdgeTag, ExtractionResult, ReviewItem, Summary};
pub use occurrence::{
    is_unknown_label, EndpointInference, EnrichedOccurrence, Occurrence, UNKNOWN_ENDPOINT,
    UNKNOWN_MEDIA,
};
pub use page::{Document, Page};
