//! Intelligence-provider abstractions for trustlens-runtime.
//!
//! A provider is an opaque capability: given a prompt and a declared
//! response-shape contract, return text, possibly annotated with evidence
//! citations. The resolver never deals with transport details; it sees
//! this trait and the [`ProviderError`] taxonomy only.
//!
//! ## Security
//!
//! Providers hold their API key through [`secrets::ApiCredential`], which
//! cannot be accidentally logged and is zeroed on drop.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub mod secrets;

#[cfg(feature = "gemini")]
mod gemini;

pub use secrets::{ApiCredential, CredentialSource};

#[cfg(feature = "gemini")]
pub use gemini::{GeminiProvider, GEMINI_API_KEY_ENV};

/// Errors from intelligence providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Rate limit exceeded, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    ParseError(String),

    #[error("Provider returned no usable candidate: {0}")]
    EmptyResponse(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// A provider-agnostic analysis request.
///
/// Built once per URL by the resolver and reused verbatim across live
/// tiers; only the model identifier changes between attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// System instruction establishing the analyst role.
    pub system_instruction: String,

    /// User prompt embedding the URL and derived hostname.
    pub prompt: String,

    /// Declared output-shape contract, used to bias the provider toward
    /// emitting the right fields. Advisory only: the normalizer still
    /// treats the reply as untrusted.
    pub response_schema: serde_json::Value,

    /// Whether to enable the provider's search-grounding capability so
    /// citations can be attached to the reply.
    pub search_grounding: bool,
}

/// A provider's reply: free-form text plus any citation URIs it attached.
#[derive(Debug, Clone, Default)]
pub struct ProviderReply {
    /// Raw text, expected (but not guaranteed) to embed a JSON object.
    pub text: String,

    /// Evidence URIs from citation/grounding metadata, in provider order.
    pub citations: Vec<String>,
}

/// Provider abstraction allows swapping intelligence backends.
///
/// The resolver treats the model identifier purely as a configuration
/// value distinguishing tier 1 from tier 2; both tiers go through the
/// same provider instance.
#[async_trait]
pub trait IntelProvider: Send + Sync {
    /// Execute one analysis completion against the named model.
    async fn complete(
        &self,
        request: &ProviderRequest,
        model: &str,
    ) -> Result<ProviderReply, ProviderError>;

    /// Check if the provider is usable.
    async fn health_check(&self) -> bool;

    /// Provider name for logs and metrics.
    fn name(&self) -> &str;
}
