//! Cable-ID recognition.
//!
//! Cable IDs look like `A01-001-15-02` or `N50-001-03A-X7`: up to two
//! letters, 2-3 digits, 3 digits, 2 digits with an optional letter, then an
//! alphanumeric tail. The pattern is permissive on purpose; stray numbers
//! that happen to match get low endpoint confidence later instead of being
//! filtered here.
//!
//! Matching is unanchored so IDs run together with neighbouring text are
//! still found, and ASCII-only.

use std::sync::LazyLock;

use regex::Regex;

static CABLE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)[A-Z]{0,2}\d{2,3}-\d{3}-\d{2}[A-Z]?-[A-Z0-9]+").unwrap()
});

/// A cable ID found in page text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CableMatch {
    /// Upper-cased identifier
    pub cable_id: String,
    /// Byte offset of the match start within the page text
    pub offset: usize,
}

/// Find every cable ID in `text`, left to right.
///
/// Matches never overlap. Empty text yields nothing.
pub fn find_cable_ids(text: &str) -> Vec<CableMatch> {
    CABLE_ID_RE
        .find_iter(text)
        .map(|m| CableMatch {
            cable_id: m.as_str().to_uppercase(),
            offset: m.start(),
        })
        .collect()
}
