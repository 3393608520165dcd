//! Prompt and response-contract construction.
//!
//! The provider request is assembled here once per URL and reused verbatim
//! across live tiers. The declared response schema biases the provider
//! toward emitting the right fields; the normalizer still treats whatever
//! comes back as untrusted.

use trustlens_core::AnalysisRequest;

use crate::providers::ProviderRequest;

/// System instruction shared by every live tier.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are an e-commerce trust analyst. Given a product URL, assess whether
the listing is trustworthy for a shopper.

## Constraints
1. Judge only the URL and what can be found about its domain and listing.
2. Cite concrete signals (domain age, review patterns, pricing anomalies,
   seller history, description quality) rather than general impressions.
3. If signals conflict or are missing, say so in the reasons - do not guess.

## Output Format (JSON)
Respond with a single JSON object and nothing else:
{
  "trustScore": 0-100,
  "verdict": "Genuine" | "Suspicious" | "Fake",
  "reasons": ["short reason", ...],
  "advice": "one-sentence recommendation for the shopper",
  "breakdown": {
    "reviews": ["finding", ...],
    "sentiment": ["finding", ...],
    "price": ["finding", ...],
    "seller": ["finding", ...],
    "description": ["finding", ...]
  }
}
"#;

/// Build the user prompt embedding the URL and its derived hostname.
pub fn build_analysis_prompt(request: &AnalysisRequest) -> String {
    format!(
        "Analyze this e-commerce product URL for trustworthiness.\n\
         URL: {}\n\
         Hostname: {}\n\n\
         Evaluate the domain reputation, typical review and pricing signals \
         for listings like this, the seller's standing, and whether the \
         product description pattern suggests a legitimate listing.",
        request.url, request.hostname
    )
}

/// Declared response-shape contract sent to the provider.
///
/// Mirrors the Output Format section of [`SYSTEM_INSTRUCTION`] in the
/// provider's schema dialect.
pub fn response_schema() -> serde_json::Value {
    let string_list = serde_json::json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    });

    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "trustScore": { "type": "INTEGER" },
            "verdict": { "type": "STRING" },
            "reasons": string_list,
            "advice": { "type": "STRING" },
            "breakdown": {
                "type": "OBJECT",
                "properties": {
                    "reviews": string_list,
                    "sentiment": string_list,
                    "price": string_list,
                    "seller": string_list,
                    "description": string_list
                }
            }
        },
        "required": ["trustScore", "verdict", "reasons", "advice"]
    })
}

/// Assemble the full provider request for a URL.
pub fn build_provider_request(request: &AnalysisRequest) -> ProviderRequest {
    ProviderRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        prompt: build_analysis_prompt(request),
        response_schema: response_schema(),
        search_grounding: true,
    }
}
