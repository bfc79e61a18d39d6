//! Per-page occurrence extraction.
//!
//! Turns one page of diagram text into enriched occurrences:
//! - `recognizer`: find cable IDs
//! - `window`: cut the surrounding lines
//! - `media`: ethernet hints and media labels
//! - `endpoint`: score tokens to pick an endpoint label
//!
//! All functions here are pure; the same page always yields the same
//! occurrences in the same order.

pub mod endpoint;
pub mod media;
pub mod recognizer;
pub mod window;

pub use endpoint::{infer_endpoint, score_token, ENDPOINT_KEYWORDS};
pub use media::{detect_media, has_ethernet_hint};
pub use recognizer::{find_cable_ids, CableMatch};
pub use window::{context_window, line_of_offset, ContextWindow, WINDOW_RADIUS};

use crate::domain::{EnrichedOccurrence, Occurrence, Page};

/// Extract every cable-ID occurrence on a page, with its inferred endpoint
pub fn scan_page(page: &Page, strict_ethernet: bool) -> Vec<EnrichedOccurrence> {
    find_cable_ids(&page.text)
        .into_iter()
        .map(|m| {
            let context = context_window(&page.text, m.offset).text();
            let inference = infer_endpoint(&context, strict_ethernet);
            let occurrence = Occurrence {
                cable_id: m.cable_id,
                page_number: page.page_number,
                has_ethernet_hint: has_ethernet_hint(&context),
                media: detect_media(&context).to_string(),
                context,
            };
            EnrichedOccurrence::new(occurrence, inference)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_page_builds_occurrences() {
        let page = Page::new(4, "RACK-2\nN50-001-03-07 CAT6\nspare");
        let found = scan_page(&page, false);
        assert_eq!(found.len(), 1);

        let occ = &found[0];
        assert_eq!(occ.cable_id(), "N50-001-03-07");
        assert_eq!(occ.page_number(), 4);
        assert_eq!(occ.occurrence.context, "RACK-2\nN50-001-03-07 CAT6\nspare");
        assert!(occ.occurrence.has_ethernet_hint);
        assert_eq!(occ.media(), "CAT6");
        assert_eq!(occ.endpoint(), "RACK-2");
    }

    #[test]
    fn test_scan_empty_page() {
        assert!(scan_page(&Page::new(1, ""), false).is_empty());
        assert!(scan_page(&Page::new(1, "no identifiers here"), true).is_empty());
    }
}
