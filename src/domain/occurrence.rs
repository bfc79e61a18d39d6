//! Cable-ID sightings and the endpoint inferred for each one.

use serde::{Deserialize, Serialize};

/// Sentinel endpoint label used when no token in the context scored
pub const UNKNOWN_ENDPOINT: &str = "UNKNOWN";

/// Media label used when the context names no known cable media
pub const UNKNOWN_MEDIA: &str = "Unknown";

/// One sighting of a cable ID on one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Upper-cased cable identifier
    pub cable_id: String,
    /// Page the ID was seen on
    pub page_number: u32,
    /// Surrounding lines joined with their original line breaks
    pub context: String,
    /// Whether the context mentions an ethernet keyword
    pub has_ethernet_hint: bool,
    /// Media label from the fixed vocabulary, or "Unknown"
    pub media: String,
}

/// Endpoint chosen for an occurrence from its context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointInference {
    pub endpoint: String,
    /// Always within [0, 1]
    pub confidence: f64,
    /// The winning token, or empty when the endpoint is UNKNOWN
    pub evidence: Vec<String>,
}

impl EndpointInference {
    /// Inference for a context where nothing scored
    pub fn unknown() -> Self {
        Self {
            endpoint: UNKNOWN_ENDPOINT.to_string(),
            confidence: 0.1,
            evidence: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        is_unknown_label(&self.endpoint)
    }
}

/// An occurrence with its endpoint inference attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedOccurrence {
    #[serde(flatten)]
    pub occurrence: Occurrence,
    #[serde(flatten)]
    pub inference: EndpointInference,
}

impl EnrichedOccurrence {
    pub fn new(occurrence: Occurrence, inference: EndpointInference) -> Self {
        Self {
            occurrence,
            inference,
        }
    }

    pub fn cable_id(&self) -> &str {
        &self.occurrence.cable_id
    }

    pub fn page_number(&self) -> u32 {
        self.occurrence.page_number
    }

    pub fn endpoint(&self) -> &str {
        &self.inference.endpoint
    }

    pub fn confidence(&self) -> f64 {
        self.inference.confidence
    }

    pub fn media(&self) -> &str {
        &self.occurrence.media
    }

    pub fn has_known_media(&self) -> bool {
        self.occurrence.media != UNKNOWN_MEDIA
    }
}

/// Case-insensitive check against the UNKNOWN sentinel
pub fn is_unknown_label(label: &str) -> bool {
    label.eq_ignore_ascii_case(UNKNOWN_ENDPOINT)
}
