//! Response normalization and result formatting.
//!
//! Providers are asked for a bare JSON object but routinely wrap it in
//! markdown fences or pad it with prose. [`extract_json`] locates and parses
//! the object into the loosely-typed [`RawAnalysis`]; [`format_result`] then
//! forces that into a fully-populated [`AnalysisResult`], defaulting every
//! missing or malformed field. Extraction can fail (the caller treats that
//! as a tier failure); formatting cannot.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::classifier::classify;
use crate::types::{AnalysisRequest, AnalysisResult, Breakdown, MAX_SOURCES};

/// Default reason when the provider supplied none.
pub const DEFAULT_REASON: &str = "Analysis based on domain patterns";

/// Default advice when the provider supplied none.
pub const DEFAULT_ADVICE: &str = "Proceed with caution";

/// Default breakdown entry when a category is missing or empty.
pub const DATA_UNAVAILABLE: &str = "Data unavailable";

lazy_static! {
    /// Code-fence markers, with or without a language tag.
    static ref FENCE_PATTERN: Regex = Regex::new(r"```[a-zA-Z0-9_-]*").unwrap();
}

/// Errors locating or parsing the JSON object in provider text.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("no JSON object found in provider text")]
    NoJsonObject,

    #[error("provider text is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The provider's analysis as it actually arrived, before defaulting.
///
/// Every field is optional: all "might be missing" decisions are pushed
/// into [`format_result`] so downstream code only ever sees the defaulted
/// [`AnalysisResult`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnalysis {
    #[serde(default, alias = "trust_score")]
    pub trust_score: Option<f64>,

    #[serde(default)]
    pub verdict: Option<String>,

    #[serde(default)]
    pub reasons: Option<Vec<String>>,

    #[serde(default)]
    pub advice: Option<String>,

    #[serde(default)]
    pub breakdown: Option<RawBreakdown>,
}

/// Loosely-typed counterpart of [`Breakdown`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBreakdown {
    #[serde(default)]
    pub reviews: Option<Vec<String>>,

    #[serde(default)]
    pub sentiment: Option<Vec<String>>,

    #[serde(default)]
    pub price: Option<Vec<String>>,

    #[serde(default)]
    pub seller: Option<Vec<String>>,

    #[serde(default)]
    pub description: Option<Vec<String>>,
}

/// Locate and parse the JSON object embedded in raw provider text.
///
/// 1. Strip code-fence markers.
/// 2. Slice from the first `{` to the last `}` — tolerates leading and
///    trailing commentary the provider may emit despite instructions.
/// 3. Parse the slice into [`RawAnalysis`].
pub fn extract_json(raw: &str) -> Result<RawAnalysis, NormalizeError> {
    let stripped = FENCE_PATTERN.replace_all(raw, "");
    let text: &str = stripped.as_ref();

    let start = text.find('{');
    let end = text.rfind('}');

    let slice = match (start, end) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => return Err(NormalizeError::NoJsonObject),
    };

    Ok(serde_json::from_str(slice)?)
}

fn or_default_list(values: Option<Vec<String>>, default: &str) -> Vec<String> {
    match values {
        Some(v) if !v.is_empty() => v,
        _ => vec![default.to_string()],
    }
}

fn or_default_text(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Force a parsed provider record into a well-formed [`AnalysisResult`].
///
/// Total by construction: every missing or malformed field has a defined
/// default, the score is clamped into 0-100, the verdict goes through the
/// classifier rather than being taken verbatim, and `sources` is truncated
/// to [`MAX_SOURCES`].
pub fn format_result(
    raw: RawAnalysis,
    request: &AnalysisRequest,
    mut sources: Vec<String>,
) -> AnalysisResult {
    sources.truncate(MAX_SOURCES);

    let trust_score = raw
        .trust_score
        .map(|score| score.clamp(0.0, 100.0).round() as u8)
        .unwrap_or(0);

    let verdict = classify(raw.verdict.as_deref().unwrap_or(""));

    let breakdown_raw = raw.breakdown.unwrap_or_default();
    let breakdown = Breakdown {
        reviews: or_default_list(breakdown_raw.reviews, DATA_UNAVAILABLE),
        sentiment: or_default_list(breakdown_raw.sentiment, DATA_UNAVAILABLE),
        price: or_default_list(breakdown_raw.price, DATA_UNAVAILABLE),
        seller: or_default_list(breakdown_raw.seller, DATA_UNAVAILABLE),
        description: or_default_list(breakdown_raw.description, DATA_UNAVAILABLE),
    };

    AnalysisResult {
        trust_score,
        verdict,
        reasons: or_default_list(raw.reasons, DEFAULT_REASON),
        advice: or_default_text(raw.advice, DEFAULT_ADVICE),
        breakdown,
        sources,
        url: request.url.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    const WELL_FORMED: &str = r#"{
        "trustScore": 88,
        "verdict": "Genuine",
        "reasons": ["Established retailer", "Positive review history"],
        "advice": "Safe to purchase",
        "breakdown": {
            "reviews": ["4.6 average"],
            "sentiment": ["Mostly positive"],
            "price": ["In line with market"],
            "seller": ["Verified storefront"],
            "description": ["Matches product photos"]
        }
    }"#;

    fn request() -> AnalysisRequest {
        AnalysisRequest::new("https://shop.example/item")
    }

    #[test]
    fn test_extract_plain_object() {
        let raw = extract_json(WELL_FORMED).unwrap();
        assert_eq!(raw.trust_score, Some(88.0));
        assert_eq!(raw.verdict.as_deref(), Some("Genuine"));
    }

    #[test]
    fn test_fenced_and_plain_normalize_identically() {
        let fenced = format!("Here is my analysis:\n```json\n{WELL_FORMED}\n```\nHope that helps!");

        let from_plain = extract_json(WELL_FORMED).unwrap();
        let from_fenced = extract_json(&fenced).unwrap();

        let plain_result = format_result(from_plain, &request(), vec![]);
        let fenced_result = format_result(from_fenced, &request(), vec![]);

        assert_eq!(plain_result.trust_score, fenced_result.trust_score);
        assert_eq!(plain_result.verdict, fenced_result.verdict);
        assert_eq!(plain_result.reasons, fenced_result.reasons);
        assert_eq!(plain_result.breakdown, fenced_result.breakdown);
    }

    #[test]
    fn test_no_braces_is_an_error() {
        let err = extract_json("the model refused to answer").unwrap_err();
        assert!(matches!(err, NormalizeError::NoJsonObject));
    }

    #[test]
    fn test_mismatched_braces_is_an_error() {
        assert!(matches!(
            extract_json("} nothing here {"),
            Err(NormalizeError::NoJsonObject)
        ));
    }

    #[test]
    fn test_garbage_between_braces_is_malformed() {
        let err = extract_json("{ this is not json }").unwrap_err();
        assert!(matches!(err, NormalizeError::Malformed(_)));
    }

    #[test]
    fn test_empty_object_gets_full_defaults() {
        let raw = extract_json("{}").unwrap();
        let result = format_result(raw, &request(), vec![]);

        assert_eq!(result.trust_score, 0);
        assert_eq!(result.verdict, Verdict::Suspicious);
        assert_eq!(result.reasons, vec![DEFAULT_REASON.to_string()]);
        assert_eq!(result.advice, DEFAULT_ADVICE);
        assert!(result.upholds_invariants());
    }

    #[test]
    fn test_score_clamped_into_range() {
        let raw = extract_json(r#"{"trustScore": 180}"#).unwrap();
        assert_eq!(format_result(raw, &request(), vec![]).trust_score, 100);

        let raw = extract_json(r#"{"trustScore": -5}"#).unwrap();
        assert_eq!(format_result(raw, &request(), vec![]).trust_score, 0);
    }

    #[test]
    fn test_snake_case_score_accepted() {
        let raw = extract_json(r#"{"trust_score": 42}"#).unwrap();
        assert_eq!(format_result(raw, &request(), vec![]).trust_score, 42);
    }

    #[test]
    fn test_verdict_goes_through_classifier() {
        let raw = extract_json(r#"{"verdict": "definitely a SCAM site"}"#).unwrap();
        assert_eq!(format_result(raw, &request(), vec![]).verdict, Verdict::Fake);
    }

    #[test]
    fn test_sources_truncated_to_cap() {
        let raw = extract_json("{}").unwrap();
        let sources: Vec<String> = (0..7).map(|i| format!("https://ref.example/{i}")).collect();
        let result = format_result(raw, &request(), sources);
        assert_eq!(result.sources.len(), MAX_SOURCES);
        assert_eq!(result.sources[0], "https://ref.example/0");
    }

    #[test]
    fn test_empty_breakdown_slots_defaulted() {
        let raw = extract_json(r#"{"breakdown": {"reviews": [], "price": ["cheap"]}}"#).unwrap();
        let result = format_result(raw, &request(), vec![]);
        assert_eq!(result.breakdown.reviews, vec![DATA_UNAVAILABLE.to_string()]);
        assert_eq!(result.breakdown.price, vec!["cheap".to_string()]);
    }
}
