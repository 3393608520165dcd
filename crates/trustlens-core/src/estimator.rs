//! Deterministic offline estimator.
//!
//! The last tier of the resolution pipeline: given only the URL, produce a
//! best-effort verdict from static pattern rules. No I/O, no failure modes,
//! same input always yields the same output.

use crate::types::{
    AnalysisRequest, AnalysisResult, Breakdown, Verdict, NEUTRAL_SCORE, SCAM_SCORE, TRUSTED_SCORE,
};

/// Substrings of major retailers treated as trusted.
const TRUSTED_PATTERNS: &[&str] = &[
    "amazon",
    "ebay",
    "walmart",
    "target",
    "bestbuy",
    "etsy",
    "flipkart",
    "myntra",
    "aliexpress",
    "shopify",
];

/// Promotional/urgency substrings treated as scam signals.
const SCAM_PATTERNS: &[&str] = &[
    "free-",
    "-free",
    "giveaway",
    "winner",
    "claim-now",
    "limited-offer",
    "flash-sale",
    "90-off",
    "lottery",
    "prize",
];

/// Breakdown placeholder shown when the live tiers were unavailable.
const OFFLINE_NOTE: &str = "Not available in offline mode";

/// Produce a best-effort verdict for a URL using static pattern rules.
///
/// Trusted-retailer matching runs before scam-signal matching, so a URL
/// containing both kinds of substring resolves to the trusted branch.
pub fn estimate(request: &AnalysisRequest) -> AnalysisResult {
    let haystack = request.url.to_lowercase();

    let (trust_score, verdict, reason, advice) =
        if TRUSTED_PATTERNS.iter().any(|p| haystack.contains(p)) {
            (
                TRUSTED_SCORE,
                Verdict::Genuine,
                "Domain matches a known major retailer",
                "This appears to be a listing on an established marketplace. Standard buyer protections should apply.",
            )
        } else if SCAM_PATTERNS.iter().any(|p| haystack.contains(p)) {
            (
                SCAM_SCORE,
                Verdict::Fake,
                "Suspicious promotional keywords detected in the URL",
                "High risk of fraud. Avoid entering payment or personal details on this site.",
            )
        } else {
            (
                NEUTRAL_SCORE,
                Verdict::Suspicious,
                "Couldn't fully verify this domain against known patterns",
                "Proceed with caution and verify the seller independently before purchasing.",
            )
        };

    tracing::debug!(url = %request.url, score = trust_score, verdict = %verdict, "offline estimate");

    AnalysisResult {
        trust_score,
        verdict,
        reasons: vec![reason.to_string()],
        advice: advice.to_string(),
        breakdown: Breakdown::placeholder(OFFLINE_NOTE),
        sources: Vec::new(),
        url: request.url.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn estimate_url(url: &str) -> AnalysisResult {
        estimate(&AnalysisRequest::new(url))
    }

    #[test]
    fn test_trusted_retailer() {
        let result = estimate_url("https://www.amazon.com/deal-xyz");
        assert_eq!(result.trust_score, 92);
        assert_eq!(result.verdict, Verdict::Genuine);
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_scam_signals() {
        let result = estimate_url("http://free-giveaway-winner.biz/claim-now");
        assert_eq!(result.trust_score, 25);
        assert_eq!(result.verdict, Verdict::Fake);
    }

    #[test]
    fn test_unknown_domain_is_neutral() {
        let result = estimate_url("http://unknown-shop.example/item");
        assert_eq!(result.trust_score, 65);
        assert_eq!(result.verdict, Verdict::Suspicious);
    }

    #[test]
    fn test_trusted_wins_over_scam() {
        // Both rule tables match; the trusted branch returns first.
        let result = estimate_url("https://amazon.com/free-giveaway-winner");
        assert_eq!(result.verdict, Verdict::Genuine);
        assert_eq!(result.trust_score, 92);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = estimate_url("HTTPS://WWW.AMAZON.COM/ITEM");
        assert_eq!(result.verdict, Verdict::Genuine);
    }

    #[test]
    fn test_breakdown_carries_offline_placeholders() {
        let result = estimate_url("http://unknown-shop.example/item");
        assert!(result.breakdown.is_fully_populated());
        assert_eq!(result.breakdown.reviews[0], OFFLINE_NOTE);
    }

    proptest! {
        /// Same URL yields the same score/verdict/reasons across calls.
        #[test]
        fn prop_estimator_deterministic(url in ".{0,80}") {
            let first = estimate_url(&url);
            let second = estimate_url(&url);
            prop_assert_eq!(first.trust_score, second.trust_score);
            prop_assert_eq!(first.verdict, second.verdict);
            prop_assert_eq!(first.reasons, second.reasons);
        }

        /// Every estimate satisfies the structural invariants.
        #[test]
        fn prop_estimator_upholds_invariants(url in ".{0,80}") {
            prop_assert!(estimate_url(&url).upholds_invariants());
        }
    }
}
