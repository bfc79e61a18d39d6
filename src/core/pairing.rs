//! Connection pairing.
//!
//! Occurrences are grouped by cable ID across every page and document of a
//! request. Within a group, sightings are ranked by confidence (stable, so
//! earlier sightings win ties) and the group resolves as:
//!
//! - **1 sighting**: `unpaired` review item
//! - **2 sightings**: one edge
//! - **3+ sightings**: one edge plus an `extra` item per leftover sighting
//!   when the top two lead the rest by at least [`DOMINANCE_GAP`];
//!   otherwise a single `ambiguous` item and no edge
//!
//! Every occurrence ends up in exactly one edge or review item.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Edge, EdgeTag, EnrichedOccurrence, ReviewItem};

/// Minimum confidence lead of rank 1 over rank 2 to resolve a 3+ group
pub const DOMINANCE_GAP: f64 = 0.3;

const GAP_EPSILON: f64 = 1e-9;

/// Edges and review items produced by one pairing pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pairing {
    pub edges: Vec<Edge>,
    pub review: Vec<ReviewItem>,
}

/// A cable ID with its sightings
#[derive(Debug, Clone)]
pub struct CableGroup {
    pub cable_id: String,
    pub occurrences: Vec<EnrichedOccurrence>,
}

/// Group occurrences by upper-cased cable ID, in order of first sighting
pub fn group_by_cable_id(occurrences: Vec<EnrichedOccurrence>) -> Vec<CableGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<CableGroup> = Vec::new();

    for occ in occurrences {
        let key = occ.cable_id().to_uppercase();
        match index.get(&key) {
            Some(&i) => groups[i].occurrences.push(occ),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(CableGroup {
                    cable_id: key,
                    occurrences: vec![occ],
                });
            }
        }
    }

    groups
}

/// Pair all occurrences of one extraction request
pub fn pair_occurrences(occurrences: Vec<EnrichedOccurrence>) -> Pairing {
    let mut pairing = Pairing::default();

    for group in group_by_cable_id(occurrences) {
        resolve_group(group, &mut pairing);
    }

    pairing
}

fn resolve_group(group: CableGroup, pairing: &mut Pairing) {
    let CableGroup {
        cable_id,
        occurrences: mut ranked,
    } = group;

    // sort_by is stable: equal confidences keep sighting order
    ranked.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));

    match ranked.as_slice() {
        [] => {}
        [lone] => {
            debug!(%cable_id, "Single sighting, unpaired");
            pairing.review.push(ReviewItem::Unpaired {
                cable_id: cable_id.clone(),
                page_refs: vec![lone.page_number()],
                endpoint: lone.endpoint().to_string(),
                confidence: lone.confidence(),
                evidence: lone.inference.evidence.clone(),
                media: lone.media().to_string(),
            });
        }
        [a, b] => {
            let edge = build_edge(&cable_id, a, b, page_refs(&ranked));
            debug!(%cable_id, tag = edge.tag.as_str(), "Paired");
            pairing.edges.push(edge);
        }
        [a, b, rest @ ..] => {
            let gap = a.confidence() - b.confidence();
            if gap + GAP_EPSILON >= DOMINANCE_GAP {
                let edge = build_edge(&cable_id, a, b, page_refs(&ranked));
                debug!(%cable_id, gap, extras = rest.len(), tag = edge.tag.as_str(), "Dominant pair");
                pairing.edges.push(edge);

                for extra in rest {
                    pairing.review.push(ReviewItem::Extra {
                        cable_id: cable_id.clone(),
                        page_refs: vec![extra.page_number()],
                        endpoint: extra.endpoint().to_string(),
                        confidence: extra.confidence(),
                        evidence: extra.inference.evidence.clone(),
                        media: extra.media().to_string(),
                    });
                }
            } else {
                debug!(%cable_id, gap, sightings = ranked.len(), "Ambiguous");
                pairing.review.push(ReviewItem::Ambiguous {
                    cable_id: cable_id.clone(),
                    page_refs: page_refs(&ranked),
                    occurrences: ranked.len(),
                    candidates: ranked.iter().map(|o| o.endpoint().to_string()).collect(),
                });
            }
        }
    }
}

/// Build the edge for a ranked pair; `page_refs` comes from the caller
fn build_edge(
    cable_id: &str,
    a: &EnrichedOccurrence,
    b: &EnrichedOccurrence,
    page_refs: Vec<u32>,
) -> Edge {
    let media = if a.has_known_media() { a.media() } else { b.media() };

    let mut evidence = a.inference.evidence.clone();
    evidence.extend(b.inference.evidence.iter().cloned());

    Edge {
        from: a.endpoint().to_string(),
        to: b.endpoint().to_string(),
        cable_id: cable_id.to_string(),
        media: media.to_string(),
        page_refs,
        confidence: a.confidence().min(b.confidence()),
        evidence,
        tag: EdgeTag::infer(a.endpoint(), b.endpoint()),
    }
}

/// Sorted, de-duplicated page numbers of a group
fn page_refs(occurrences: &[EnrichedOccurrence]) -> Vec<u32> {
    let mut pages: Vec<u32> = occurrences.iter().map(|o| o.page_number()).collect();
    pages.sort_unstable();
    pages.dedup();
    pages
}
