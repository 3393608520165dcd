//! # trustlens-core
//!
//! Deterministic trust-verdict engine for e-commerce product URLs.
//!
//! This crate holds the pure parts of the resolution pipeline:
//! - The offline [`estimator`] that turns a URL into a verdict using
//!   static pattern rules.
//! - The [`normalizer`] that extracts a JSON object from noisy provider
//!   text and formats it into the canonical result shape.
//! - The [`classifier`] that forces arbitrary provider labels onto the
//!   three-way [`Verdict`].
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces the same verdict
//!    (timestamps aside).
//! 2. **No I/O**: Provider calls live in `trustlens-runtime`; nothing in
//!    this crate touches the network.
//! 3. **Total outputs**: [`normalizer::format_result`] and
//!    [`estimator::estimate`] always yield a fully-populated
//!    [`AnalysisResult`] — callers never see partial records.
//!
//! ## Example
//!
//! ```rust
//! use trustlens_core::{estimator, AnalysisRequest, Verdict};
//!
//! let request = AnalysisRequest::new("https://www.amazon.com/deal-xyz");
//! let result = estimator::estimate(&request);
//! assert_eq!(result.verdict, Verdict::Genuine);
//! assert_eq!(result.trust_score, 92);
//! ```

pub mod classifier;
pub mod estimator;
pub mod normalizer;
pub mod types;

// Re-export main types at crate root
pub use classifier::classify;
pub use normalizer::{extract_json, format_result, NormalizeError, RawAnalysis, RawBreakdown};
pub use types::{AnalysisRequest, AnalysisResult, Breakdown, Verdict, MAX_SOURCES};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_text_to_final_result() {
        let text = r#"```json
{"trustScore": 30, "verdict": "Likely fake storefront", "reasons": ["Domain registered last week"]}
```"#;

        let request = AnalysisRequest::new("http://deal-island.example/tv");
        let raw = extract_json(text).unwrap();
        let result = format_result(raw, &request, vec!["https://whois.example".to_string()]);

        assert_eq!(result.trust_score, 30);
        assert_eq!(result.verdict, Verdict::Fake);
        assert_eq!(result.reasons, vec!["Domain registered last week".to_string()]);
        assert_eq!(result.url, "http://deal-island.example/tv");
        assert!(result.upholds_invariants());
    }
}
