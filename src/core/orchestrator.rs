//! Extraction orchestrator.
//!
//! Scans every page of every document, then pairs the combined occurrences
//! in a single pass so a cable split across two uploaded diagrams still
//! pairs. Document scanning is independent per document and runs on rayon
//! when the feature is enabled; results are joined in document order before
//! pairing.

use tracing::{debug, info, instrument};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::domain::{Document, EnrichedOccurrence, ExtractionResult, Summary};
use crate::extract::scan_page;

use super::options::ExtractOptions;
use super::pairing::pair_occurrences;

/// Runs the full extraction for a set of documents
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create a new extractor
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    /// All occurrences in one document, in page order
    pub fn scan_document(&self, document: &Document) -> Vec<EnrichedOccurrence> {
        let occurrences: Vec<EnrichedOccurrence> = document
            .pages
            .iter()
            .flat_map(|page| scan_page(page, self.options.strict_ethernet))
            .collect();

        debug!(
            document = %document.name,
            pages = document.pages.len(),
            occurrences = occurrences.len(),
            "Scanned document"
        );

        occurrences
    }

    /// Extract edges and review items across all documents
    #[instrument(skip(self, documents), fields(documents = documents.len(), strict = self.options.strict_ethernet))]
    pub fn extract(&self, documents: &[Document]) -> ExtractionResult {
        let scanned = self.scan_all(documents);
        let total_occurrences = scanned.len();

        let admitted: Vec<EnrichedOccurrence> = if self.options.strict_ethernet {
            scanned
                .into_iter()
                .filter(|occ| {
                    let keep = occ.occurrence.has_ethernet_hint;
                    if !keep {
                        debug!(
                            cable_id = occ.cable_id(),
                            page = occ.page_number(),
                            "Withheld from pairing: no ethernet hint"
                        );
                    }
                    keep
                })
                .collect()
        } else {
            scanned
        };
        let filtered_occurrences = total_occurrences - admitted.len();

        let pairing = pair_occurrences(admitted);

        let mut summary = Summary::tally(&pairing.edges, &pairing.review);
        summary.documents = documents.len();
        summary.pages = documents.iter().map(|d| d.pages.len()).sum();
        summary.total_occurrences = total_occurrences;
        summary.filtered_occurrences = filtered_occurrences;

        info!(
            edges = summary.total_edges,
            review = summary.total_review,
            system_level = summary.system_level,
            internal = summary.internal,
            unknown = summary.unknown,
            occurrences = total_occurrences,
            filtered = filtered_occurrences,
            "Extraction complete"
        );

        ExtractionResult {
            edges: pairing.edges,
            review: pairing.review,
            summary,
        }
    }

    #[cfg(feature = "rayon")]
    fn scan_all(&self, documents: &[Document]) -> Vec<EnrichedOccurrence> {
        documents
            .par_iter()
            .map(|doc| self.scan_document(doc))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn scan_all(&self, documents: &[Document]) -> Vec<EnrichedOccurrence> {
        documents
            .iter()
            .flat_map(|doc| self.scan_document(doc))
            .collect()
    }
}

/// Convenience wrapper: extract with the given options
pub fn extract_documents(documents: &[Document], options: ExtractOptions) -> ExtractionResult {
    Extractor::new(options).extract(documents)
}
