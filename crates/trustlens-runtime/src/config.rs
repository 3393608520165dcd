//! Resolver configuration.
//!
//! Tier model identifiers and timing knobs. Serde support lets
//! deployments tune tiers from a config file without code changes.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the tiered resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Model identifier for the first live tier.
    pub primary_model: String,

    /// Model identifier for the second live tier.
    pub secondary_model: String,

    /// Bound on each live tier's provider call (in seconds). A tier that
    /// exceeds this reads as failed and the state machine advances.
    #[serde(with = "duration_secs")]
    pub request_timeout: Duration,

    /// Fixed delay applied before the offline estimate (in milliseconds)
    /// so UI loading states pace consistently with live-tier calls.
    /// Tests set this to zero.
    #[serde(with = "duration_millis")]
    pub estimator_delay: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            primary_model: "gemini-2.5-flash".to_string(),
            secondary_model: "gemini-2.0-flash".to_string(),
            request_timeout: Duration::from_secs(15),
            estimator_delay: Duration::from_millis(1200),
        }
    }
}

impl ResolverConfig {
    /// Configuration for tests: default models, no pacing delay.
    pub fn without_delay() -> Self {
        Self {
            estimator_delay: Duration::ZERO,
            ..Default::default()
        }
    }
}
