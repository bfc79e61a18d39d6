//! Ethernet hints and cable media detection.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::UNKNOWN_MEDIA;

static ETHERNET_HINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:CAT5E?|CAT6A?|RJ-?45|LAN|ETH|ETHERNET|UTP|FTP|POE)\b").unwrap()
});

/// Media vocabulary, checked in order; the first hit names the media.
static MEDIA_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("CAT6A", r"(?i)\bCAT-?6A\b"),
        ("CAT6", r"(?i)\bCAT-?6\b"),
        ("CAT5e", r"(?i)\bCAT-?5E\b"),
        ("CAT5", r"(?i)\bCAT-?5\b"),
        ("Fiber", r"(?i)\b(?:FIBER|FIBRE|OM3|OM4|OS2|SMF|MMF)\b"),
        ("Coax", r"(?i)\b(?:COAX|RG-?\d{1,3})\b"),
    ]
    .into_iter()
    .map(|(label, pattern)| (label, Regex::new(pattern).unwrap()))
    .collect()
});

/// Whether the text mentions any ethernet keyword
pub fn has_ethernet_hint(text: &str) -> bool {
    ETHERNET_HINT_RE.is_match(text)
}

/// Media label for the text, or "Unknown"
pub fn detect_media(text: &str) -> &'static str {
    MEDIA_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(label, _)| *label)
        .unwrap_or(UNKNOWN_MEDIA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ethernet_hints() {
        assert!(has_ethernet_hint("patch via CAT6 to rack"));
        assert!(has_ethernet_hint("rj-45 socket"));
        assert!(has_ethernet_hint("Ethernet"));
        assert!(has_ethernet_hint("PoE injector"));
        assert!(has_ethernet_hint("ship LAN"));
        assert!(!has_ethernet_hint("BLANKET"));
        assert!(!has_ethernet_hint("power cable 3x2.5mm"));
        assert!(!has_ethernet_hint(""));
    }

    #[test]
    fn test_media_prefers_specific_labels() {
        assert_eq!(detect_media("CAT6A S/FTP"), "CAT6A");
        assert_eq!(detect_media("cat6 patch"), "CAT6");
        assert_eq!(detect_media("CAT5e"), "CAT5e");
        assert_eq!(detect_media("old CAT5 run"), "CAT5");
        assert_eq!(detect_media("OM3 fibre trunk"), "Fiber");
        assert_eq!(detect_media("RG-58 coax"), "Coax");
        assert_eq!(detect_media("RJ45 only"), "Unknown");
    }
}
