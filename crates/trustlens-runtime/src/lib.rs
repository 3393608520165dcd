//! # trustlens-runtime
//!
//! Tiered provider resolution for TrustLens.
//!
//! This crate owns everything that touches the network: the intelligence
//! provider abstraction, the Gemini implementation (behind the `gemini`
//! feature), prompt construction, and the [`TrustResolver`] that degrades
//! from primary model to secondary model to the offline estimator in
//! `trustlens-core`.
//!
//! ## Key Guarantees
//!
//! 1. **Total entry point**: [`TrustResolver::analyze`] always resolves to
//!    a fully-populated result; no tier error escapes the resolver.
//! 2. **Strictly sequential tiers**: at most one outstanding provider call;
//!    a successful tier short-circuits the rest.
//! 3. **Bounded attempts**: each live tier runs under a configurable
//!    timeout so a hung transport reads as a tier failure.
//!
//! ## Example
//!
//! ```rust,ignore
//! use trustlens_runtime::{ApiCredential, ResolverConfig, TrustResolver};
//!
//! let credential = ApiCredential::from_env("GEMINI_API_KEY").ok();
//! let resolver = TrustResolver::new(credential, ResolverConfig::default());
//!
//! let verdict = resolver.analyze("https://www.amazon.com/deal-xyz").await;
//! println!("{}: {}", verdict.verdict, verdict.trust_score);
//! ```

pub mod config;
pub mod prompts;
pub mod providers;
pub mod resolver;

// Re-export main types at crate root
pub use config::ResolverConfig;
pub use providers::{
    ApiCredential, CredentialSource, IntelProvider, ProviderError, ProviderReply, ProviderRequest,
};
pub use resolver::{TierFailure, TrustResolver};

#[cfg(feature = "gemini")]
pub use providers::{GeminiProvider, GEMINI_API_KEY_ENV};
