//! Core data model for trust analysis.
//!
//! Every tier of the resolution pipeline produces the same canonical
//! [`AnalysisResult`]. Callers never see a partial record: each field is
//! guaranteed present and well-typed, with defaults filled in by the
//! formatting step when a provider omits or mangles something.

use serde::{Deserialize, Serialize};

/// Maximum number of evidence URIs surfaced to the caller.
pub const MAX_SOURCES: usize = 4;

/// Score assigned when the URL matches a known major retailer.
pub const TRUSTED_SCORE: u8 = 92;

/// Score assigned when scam-signal keywords are detected.
pub const SCAM_SCORE: u8 = 25;

/// Score assigned when neither rule table matches.
pub const NEUTRAL_SCORE: u8 = 65;

/// An immutable analysis request: the product URL plus its derived hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// The URL as supplied by the caller. Assumed to look like a URL but
    /// not required to be well-formed.
    pub url: String,

    /// Best-effort hostname. Falls back to the raw URL string when parsing
    /// fails; derivation never errors.
    pub hostname: String,
}

impl AnalysisRequest {
    /// Build a request from a raw URL string.
    ///
    /// Hostname extraction is best-effort: anything `url::Url` cannot parse
    /// (or that parses without a host, like `mailto:` forms) keeps the raw
    /// input as its hostname.
    pub fn new(raw_url: impl Into<String>) -> Self {
        let url = raw_url.into();
        let hostname = url::Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| url.clone());

        Self { url, hostname }
    }
}

/// The three-way trust classification exposed to the end user.
///
/// This is the only verdict surface in the system: whatever label a
/// provider returns is forced onto one of these variants before anything
/// downstream sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Genuine,
    Suspicious,
    Fake,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Genuine => write!(f, "Genuine"),
            Verdict::Suspicious => write!(f, "Suspicious"),
            Verdict::Fake => write!(f, "Fake"),
        }
    }
}

/// Structured five-category explanation accompanying a verdict.
///
/// Each slot is non-empty; the formatting step inserts a placeholder when
/// the provider has nothing for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub reviews: Vec<String>,
    pub sentiment: Vec<String>,
    pub price: Vec<String>,
    pub seller: Vec<String>,
    pub description: Vec<String>,
}

impl Breakdown {
    /// A breakdown with the same placeholder in every slot.
    pub fn placeholder(text: &str) -> Self {
        let slot = || vec![text.to_string()];
        Self {
            reviews: slot(),
            sentiment: slot(),
            price: slot(),
            seller: slot(),
            description: slot(),
        }
    }

    /// True when every slot holds at least one entry.
    pub fn is_fully_populated(&self) -> bool {
        !self.reviews.is_empty()
            && !self.sentiment.is_empty()
            && !self.price.is_empty()
            && !self.seller.is_empty()
            && !self.description.is_empty()
    }
}

/// The canonical output record, produced by every tier.
///
/// Lifecycle is create-once: the record is finalized, stamped, and returned
/// directly to the caller. Nothing persists beyond the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Trust score in 0-100.
    pub trust_score: u8,

    /// Three-way classification. Never any other value, regardless of what
    /// the underlying provider returned.
    pub verdict: Verdict,

    /// Ordered, non-empty list of short reason strings.
    pub reasons: Vec<String>,

    /// Single human-readable recommendation. Never empty.
    pub advice: String,

    /// Five-category explanation, every slot non-empty.
    pub breakdown: Breakdown,

    /// Evidence URIs, at most [`MAX_SOURCES`]. May be empty.
    pub sources: Vec<String>,

    /// Echo of the input URL.
    pub url: String,

    /// RFC 3339 instant at which the result was finalized.
    pub timestamp: String,
}

impl AnalysisResult {
    /// Check the structural invariants every tier must uphold.
    ///
    /// Scores are `u8` so the 0-100 upper bound is the only range check
    /// needed here.
    pub fn upholds_invariants(&self) -> bool {
        self.trust_score <= 100
            && !self.reasons.is_empty()
            && !self.advice.is_empty()
            && self.breakdown.is_fully_populated()
            && self.sources.len() <= MAX_SOURCES
            && !self.timestamp.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_from_well_formed_url() {
        let request = AnalysisRequest::new("https://www.amazon.com/deal-xyz");
        assert_eq!(request.hostname, "www.amazon.com");
        assert_eq!(request.url, "https://www.amazon.com/deal-xyz");
    }

    #[test]
    fn test_hostname_falls_back_to_raw_input() {
        let request = AnalysisRequest::new("not a url at all");
        assert_eq!(request.hostname, "not a url at all");
    }

    #[test]
    fn test_hostname_falls_back_when_no_host_component() {
        // Parses as a URL but carries no host
        let request = AnalysisRequest::new("mailto:shop@example.com");
        assert_eq!(request.hostname, "mailto:shop@example.com");
    }

    #[test]
    fn test_breakdown_placeholder_populates_all_slots() {
        let breakdown = Breakdown::placeholder("data unavailable");
        assert!(breakdown.is_fully_populated());
        assert_eq!(breakdown.seller, vec!["data unavailable".to_string()]);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = AnalysisResult {
            trust_score: 65,
            verdict: Verdict::Suspicious,
            reasons: vec!["reason".to_string()],
            advice: "advice".to_string(),
            breakdown: Breakdown::placeholder("n/a"),
            sources: vec![],
            url: "http://shop.example".to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["trustScore"], 65);
        assert_eq!(json["verdict"], "Suspicious");
        assert!(json["breakdown"]["reviews"].is_array());
    }
}
