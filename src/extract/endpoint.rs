//! Endpoint inference from an occurrence's context.
//!
//! Every token in the window is scored against a lexicon of shipboard
//! equipment keywords. The best-scoring token becomes the endpoint label and
//! its score drives the confidence.
//!
//! # Scoring
//!
//! - **+2** for each keyword the upper-cased token contains
//! - **+1** when the token looks like a label (`RACK-4`, `SW12`, `PANEL_A`)
//! - **+0.5** for a plausible label length (3..=30 chars), only on tokens
//!   that already scored
//!
//! Ties keep the first token seen.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::EndpointInference;

use super::media::has_ethernet_hint;

/// Equipment keywords matched as substrings of upper-cased tokens
pub const ENDPOINT_KEYWORDS: &[&str] = &[
    "RACK", "SWITCH", "SW", "HUB", "FW", "FIREWALL", "PC", "SERVER", "CONSOLE", "PANEL", "VDR",
    "ECDIS", "RADAR", "VSAT", "SMS", "IAS", "CCTV", "NVR", "CAM", "ROUTER", "AP", "TERMINAL",
    "DISPLAY", "MIMIC", "PLC", "UPS", "BMS", "GMDSS", "AIS", "GPS",
];

const KEYWORD_WEIGHT: f64 = 2.0;
const LABEL_SHAPE_WEIGHT: f64 = 1.0;
const LENGTH_WEIGHT: f64 = 0.5;

const BASE_CONFIDENCE: f64 = 0.3;
const SCORE_CONFIDENCE_STEP: f64 = 0.2;
const NO_SCORE_CONFIDENCE: f64 = 0.2;
const ETHERNET_BONUS: f64 = 0.15;
const UNCONFIRMED_ETHERNET_FACTOR: f64 = 0.9;

static LABEL_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^(?:RACK|SW|PANEL|CONSOLE)[-\w]*$").unwrap());

/// Score a single (already punctuation-stripped) token
pub fn score_token(token: &str) -> f64 {
    let upper = token.to_uppercase();

    let mut score = ENDPOINT_KEYWORDS
        .iter()
        .filter(|kw| upper.contains(*kw))
        .count() as f64
        * KEYWORD_WEIGHT;

    if LABEL_SHAPE_RE.is_match(&upper) {
        score += LABEL_SHAPE_WEIGHT;
    }

    // Deliberately narrower than a plain length rule: the bonus is only
    // given on top of a keyword or label-shape hit, otherwise any ordinary
    // word would outrank UNKNOWN.
    if score > 0.0 && (3..=30).contains(&token.chars().count()) {
        score += LENGTH_WEIGHT;
    }

    score
}

/// Candidate tokens: trailing `,;:.` stripped, at least two chars, not all digits
fn candidate_tokens(context: &str) -> impl Iterator<Item = &str> {
    context
        .split_whitespace()
        .map(|t| t.trim_end_matches([',', ';', ':', '.']))
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
}

/// Pick the most likely endpoint label for a context window.
///
/// In non-strict mode a context without any ethernet keyword has its
/// confidence scaled by 0.9, after the ethernet bonus would have applied.
pub fn infer_endpoint(context: &str, strict_ethernet: bool) -> EndpointInference {
    let mut best: Option<&str> = None;
    let mut best_score = 0.0_f64;

    for token in candidate_tokens(context) {
        let score = score_token(token);
        if score > best_score {
            best = Some(token);
            best_score = score;
        }
    }

    let Some(label) = best else {
        return EndpointInference::unknown();
    };

    let mut confidence = if best_score <= 0.0 {
        NO_SCORE_CONFIDENCE
    } else {
        (BASE_CONFIDENCE + best_score * SCORE_CONFIDENCE_STEP).min(1.0)
    };

    let hint = has_ethernet_hint(context);
    if hint {
        confidence = (confidence + ETHERNET_BONUS).min(1.0);
    }
    if !strict_ethernet && !hint {
        confidence *= UNCONFIRMED_ETHERNET_FACTOR;
    }

    EndpointInference {
        endpoint: label.to_string(),
        confidence,
        evidence: vec![label.to_string()],
    }
}
