//! Pairing output: edges, review items and the aggregated result.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::occurrence::is_unknown_label;

/// Classification of a resolved connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeTag {
    /// Both ends resolved to the same named component
    Internal,
    /// Ends resolved to two distinct named components
    SystemLevel,
    /// At least one end could not be resolved
    Unknown,
}

impl EdgeTag {
    /// Classify a pair of endpoint labels
    pub fn infer(from: &str, to: &str) -> Self {
        if is_unknown_label(from) || is_unknown_label(to) {
            EdgeTag::Unknown
        } else if from.to_uppercase() == to.to_uppercase() {
            EdgeTag::Internal
        } else {
            EdgeTag::SystemLevel
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeTag::Internal => "internal",
            EdgeTag::SystemLevel => "system_level",
            EdgeTag::Unknown => "unknown",
        }
    }
}

/// A resolved point-to-point connection for one cable ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub cable_id: String,
    pub media: String,
    /// Sorted, de-duplicated page numbers
    pub page_refs: Vec<u32>,
    /// Lower of the two endpoint confidences
    pub confidence: f64,
    pub evidence: Vec<String>,
    pub tag: EdgeTag,
}

/// Something the pairer could not turn into an edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ReviewItem {
    /// The cable ID was seen exactly once
    Unpaired {
        cable_id: String,
        page_refs: Vec<u32>,
        endpoint: String,
        confidence: f64,
        evidence: Vec<String>,
        media: String,
    },
    /// Three or more sightings with no clearly dominant pair
    Ambiguous {
        cable_id: String,
        page_refs: Vec<u32>,
        occurrences: usize,
        /// One label per sighting, highest confidence first
        candidates: Vec<String>,
    },
    /// A sighting left over after the dominant pair became an edge
    Extra {
        cable_id: String,
        page_refs: Vec<u32>,
        endpoint: String,
        confidence: f64,
        evidence: Vec<String>,
        media: String,
    },
}

impl ReviewItem {
    pub fn cable_id(&self) -> &str {
        match self {
            ReviewItem::Unpaired { cable_id, .. }
            | ReviewItem::Ambiguous { cable_id, .. }
            | ReviewItem::Extra { cable_id, .. } => cable_id,
        }
    }

    pub fn page_refs(&self) -> &[u32] {
        match self {
            ReviewItem::Unpaired { page_refs, .. }
            | ReviewItem::Ambiguous { page_refs, .. }
            | ReviewItem::Extra { page_refs, .. } => page_refs,
        }
    }

    /// Number of occurrences this item accounts for
    pub fn occurrence_count(&self) -> usize {
        match self {
            ReviewItem::Ambiguous { occurrences, .. } => *occurrences,
            _ => 1,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ReviewItem::Unpaired { .. } => "unpaired",
            ReviewItem::Ambiguous { .. } => "ambiguous",
            ReviewItem::Extra { .. } => "extra",
        }
    }
}

/// Counts over one extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_edges: usize,
    pub total_review: usize,
    pub system_level: usize,
    pub internal: usize,
    pub unknown: usize,
    pub unpaired: usize,
    pub ambiguous: usize,
    pub extra: usize,
    pub documents: usize,
    pub pages: usize,
    /// Every occurrence the recognizer produced
    pub total_occurrences: usize,
    /// Occurrences withheld from pairing by strict-ethernet mode
    pub filtered_occurrences: usize,
}

impl Summary {
    /// Tally edge tags and review types; input counts are filled by the caller
    pub fn tally(edges: &[Edge], review: &[ReviewItem]) -> Self {
        let mut summary = Summary {
            total_edges: edges.len(),
            total_review: review.len(),
            ..Default::default()
        };

        for edge in edges {
            match edge.tag {
                EdgeTag::SystemLevel => summary.system_level += 1,
                EdgeTag::Internal => summary.internal += 1,
                EdgeTag::Unknown => summary.unknown += 1,
            }
        }

        for item in review {
            match item {
                ReviewItem::Unpaired { .. } => summary.unpaired += 1,
                ReviewItem::Ambiguous { .. } => summary.ambiguous += 1,
                ReviewItem::Extra { .. } => summary.extra += 1,
            }
        }

        summary
    }
}

/// Everything one extraction request produces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub edges: Vec<Edge>,
    pub review: Vec<ReviewItem>,
    pub summary: Summary,
}

impl ExtractionResult {
    /// SHA256 over the canonical JSON form, as "sha256:<hex>"
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        format!("sha256:{}", hex::encode(hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: &str, to: &str) -> Edge {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
            cable_id: "N50-001-03-07".to_string(),
            media: "CAT6".to_string(),
            page_refs: vec![1, 2],
            confidence: 0.8,
            evidence: vec![from.to_string(), to.to_string()],
            tag: EdgeTag::infer(from, to),
        }
    }

    #[test]
    fn test_tag_inference() {
        assert_eq!(EdgeTag::infer("RACK-2", "SWITCH-5"), EdgeTag::SystemLevel);
        assert_eq!(EdgeTag::infer("RACK-2", "rack-2"), EdgeTag::Internal);
        assert_eq!(EdgeTag::infer("UNKNOWN", "RACK-2"), EdgeTag::Unknown);
        assert_eq!(EdgeTag::infer("RACK-2", "unknown"), EdgeTag::Unknown);
        assert_eq!(EdgeTag::infer("UNKNOWN", "UNKNOWN"), EdgeTag::Unknown);
    }

    #[test]
    fn test_review_item_serializes_with_type_tag() {
        let item = ReviewItem::Ambiguous {
            cable_id: "A01-001-15-02".to_string(),
            page_refs: vec![1, 3],
            occurrences: 3,
            candidates: vec!["RACK-1".into(), "SW-2".into(), "PANEL-3".into()],
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "ambiguous");
        assert_eq!(json["cableId"], "A01-001-15-02");
        assert_eq!(json["pageRefs"], serde_json::json!([1, 3]));
        assert_eq!(item.occurrence_count(), 3);
    }

    #[test]
    fn test_edge_serializes_camel_case() {
        let json = serde_json::to_value(edge("RACK-2", "SWITCH-5")).unwrap();
        assert_eq!(json["cableId"], "N50-001-03-07");
        assert_eq!(json["tag"], "system_level");
    }

    #[test]
    fn test_summary_tally() {
        let edges = vec![edge("RACK-2", "SWITCH-5"), edge("RACK-2", "RACK-2"), edge("UNKNOWN", "PC1")];
        let review = vec![ReviewItem::Unpaired {
            cable_id: "X".into(),
            page_refs: vec![4],
            endpoint: "UNKNOWN".into(),
            confidence: 0.1,
            evidence: vec![],
            media: "Unknown".into(),
        }];
        let summary = Summary::tally(&edges, &review);
        assert_eq!(summary.total_edges, 3);
        assert_eq!(summary.total_review, 1);
        assert_eq!(summary.system_level, 1);
        assert_eq!(summary.internal, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.unpaired, 1);
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let result = ExtractionResult {
            edges: vec![edge("RACK-2", "SWITCH-5")],
            review: vec![],
            summary: Summary::default(),
        };
        let a = result.fingerprint();
        let b = result.clone().fingerprint();
        assert_eq!(a, b);
        assert!(a.starts_with("sha256:"));
        assert_eq!(a.len(), 7 + 64);
    }
}
