//! Tiered trust resolution.
//!
//! The resolver drives the attempt sequence: primary provider tier,
//! secondary provider tier, then the deterministic offline estimator.
//! It implements:
//! - One provider request built per URL, reused across live tiers
//! - A bounded timeout per live tier
//! - Uniform failure containment: every tier error becomes a
//!   [`TierFailure`] value and advances the sequence
//! - An estimator fallback with no error path
//!
//! The caller-facing contract is total: [`TrustResolver::analyze`] returns
//! a fully-populated result for every input, by construction.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use trustlens_core::{
    estimator, extract_json, format_result, AnalysisRequest, AnalysisResult, NormalizeError,
    MAX_SOURCES,
};

use crate::config::ResolverConfig;
use crate::prompts;
use crate::providers::{IntelProvider, ProviderError, ProviderRequest};

#[cfg(feature = "gemini")]
use crate::providers::{ApiCredential, GeminiProvider};

/// Why a single tier attempt failed.
///
/// Internal to the resolver: these values are logged and consumed by the
/// tier sequence, never surfaced to the caller.
#[derive(Error, Debug)]
pub enum TierFailure {
    #[error("no usable credential configured")]
    CredentialMissing,

    #[error("provider call failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("tier timed out after {0:?}")]
    Timeout(Duration),

    #[error("response normalization failed: {0}")]
    Normalize(#[from] NormalizeError),
}

/// The tiered resolver.
///
/// # Degradation sequence
/// `Init -> Tier1Attempt -> Tier2Attempt -> Fallback -> Done`, driven as a
/// plain loop over the live tiers followed by the estimator. Transitions
/// occur only on failure; a successful tier short-circuits the rest; the
/// fallback cannot fail.
pub struct TrustResolver {
    /// Live provider. `None` means no usable credential was supplied and
    /// every analysis goes straight to the estimator.
    provider: Option<Arc<dyn IntelProvider>>,

    /// Configuration
    config: ResolverConfig,
}

impl TrustResolver {
    /// Create a resolver backed by the Gemini provider.
    ///
    /// The credential is an explicit input rather than an ambient env
    /// read; a missing, blank, or placeholder credential yields a
    /// resolver that serves offline estimates only.
    #[cfg(feature = "gemini")]
    pub fn new(credential: Option<ApiCredential>, config: ResolverConfig) -> Self {
        let provider: Option<Arc<dyn IntelProvider>> = match credential {
            Some(credential) if credential.is_usable() => {
                Some(Arc::new(GeminiProvider::new(credential)))
            }
            Some(_) => {
                tracing::info!("credential is blank or a placeholder, live tiers disabled");
                None
            }
            None => None,
        };

        Self { provider, config }
    }

    /// Create a resolver over an arbitrary provider implementation.
    pub fn with_provider(provider: Arc<dyn IntelProvider>, config: ResolverConfig) -> Self {
        Self {
            provider: Some(provider),
            config,
        }
    }

    /// Create a resolver with no live capability at all.
    pub fn offline(config: ResolverConfig) -> Self {
        Self {
            provider: None,
            config,
        }
    }

    /// Analyze a product URL and return a trust verdict.
    ///
    /// Total: never errors, never panics on provider misbehavior. Any
    /// failure inside a live tier advances the degradation sequence, and
    /// the final estimator tier always produces a result.
    pub async fn analyze(&self, url: &str) -> AnalysisResult {
        let request = AnalysisRequest::new(url);

        match self.live_provider() {
            Ok(provider) => {
                // Built once, reused across tiers
                let payload = prompts::build_provider_request(&request);

                let tiers = [
                    ("tier-1", self.config.primary_model.as_str()),
                    ("tier-2", self.config.secondary_model.as_str()),
                ];

                for (tier, model) in tiers {
                    match self.attempt_live(provider.as_ref(), &payload, model, &request).await {
                        Ok(result) => {
                            tracing::info!(
                                tier,
                                model,
                                score = result.trust_score,
                                verdict = %result.verdict,
                                "live tier produced verdict"
                            );
                            return result;
                        }
                        Err(failure) => {
                            tracing::warn!(tier, model, error = %failure, "tier failed, degrading");
                        }
                    }
                }
            }
            Err(failure) => {
                tracing::info!(url = %request.url, reason = %failure, "skipping live tiers");
            }
        }

        self.fallback(&request).await
    }

    fn live_provider(&self) -> Result<&Arc<dyn IntelProvider>, TierFailure> {
        self.provider.as_ref().ok_or(TierFailure::CredentialMissing)
    }

    /// Run one live tier: provider call under a bounded timeout, then
    /// normalization and formatting into the canonical result.
    async fn attempt_live(
        &self,
        provider: &dyn IntelProvider,
        payload: &ProviderRequest,
        model: &str,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, TierFailure> {
        let timeout = self.config.request_timeout;

        let reply = match tokio::time::timeout(timeout, provider.complete(payload, model)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => return Err(TierFailure::Provider(e)),
            Err(_) => return Err(TierFailure::Timeout(timeout)),
        };

        let mut sources = reply.citations;
        sources.truncate(MAX_SOURCES);

        let raw = extract_json(&reply.text)?;
        Ok(format_result(raw, request, sources))
    }

    /// The terminal tier. Applies the configured pacing delay so UI
    /// loading states behave consistently with live calls, then returns
    /// the deterministic estimate.
    async fn fallback(&self, request: &AnalysisRequest) -> AnalysisResult {
        if !self.config.estimator_delay.is_zero() {
            tokio::time::sleep(self.config.estimator_delay).await;
        }
        estimator::estimate(request)
    }
}
