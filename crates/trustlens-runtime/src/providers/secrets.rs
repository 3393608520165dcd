//! Secure credential handling for intelligence providers.
//!
//! The API key is an opaque string supplied by deployment configuration.
//! Wrapping it here ensures:
//!
//! - **No accidental logging**: the key cannot appear in Debug/Display output
//! - **Memory safety**: the key is zeroed on drop
//! - **Placeholder detection**: deployment templates that ship a literal
//!   placeholder value are treated as "no live capability"

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use super::ProviderError;

/// Placeholder values commonly left behind by deployment templates.
/// A credential matching any of these routes the resolver straight to
/// the offline estimator.
const PLACEHOLDER_VALUES: &[&str] = &["YOUR_API_KEY", "PLACEHOLDER_API_KEY", "changeme"];

/// Where a credential was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable
    Environment,
    /// Provided programmatically
    Programmatic,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// A securely-stored API credential.
///
/// Debug and Display both render `[REDACTED]`; the value is only
/// reachable through an explicit [`ApiCredential::expose`] call at the
/// point of use.
pub struct ApiCredential {
    value: SecretString,
    source: CredentialSource,
}

impl ApiCredential {
    /// Create a new credential from a string value.
    pub fn new(value: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            value: SecretString::from(value.into()),
            source,
        }
    }

    /// Load a credential from an environment variable.
    pub fn from_env(env_var: &str) -> Result<Self, ProviderError> {
        std::env::var(env_var)
            .map(|v| Self::new(v, CredentialSource::Environment))
            .map_err(|_| {
                ProviderError::NotConfigured(format!(
                    "API key not set: configure '{}' environment variable",
                    env_var
                ))
            })
    }

    /// Expose the credential value for use in an API call.
    ///
    /// Only call this where the key is actually needed (an HTTP header);
    /// never store the exposed value.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    /// Check if the credential is blank.
    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().trim().is_empty()
    }

    /// Check if the credential is a known template placeholder.
    pub fn is_placeholder(&self) -> bool {
        let value = self.value.expose_secret().trim();
        PLACEHOLDER_VALUES.iter().any(|p| value.eq_ignore_ascii_case(p))
    }

    /// A credential is usable when it is neither blank nor a placeholder.
    pub fn is_usable(&self) -> bool {
        !self.is_empty() && !self.is_placeholder()
    }

    /// Get the source of this credential.
    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API key from {} [REDACTED]", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_redacted_in_debug() {
        let secret = "ai-super-secret-key-12345";
        let cred = ApiCredential::new(secret, CredentialSource::Programmatic);

        let debug = format!("{:?}", cred);
        assert!(!debug.contains(secret), "Secret exposed in Debug!");
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_credential_redacted_in_display() {
        let secret = "ai-super-secret-key-12345";
        let cred = ApiCredential::new(secret, CredentialSource::Environment);

        let display = format!("{}", cred);
        assert!(!display.contains(secret), "Secret exposed in Display!");
        assert!(display.contains("[REDACTED]"));
        assert!(display.contains("environment"));
    }

    #[test]
    fn test_credential_expose() {
        let secret = "ai-super-secret-key-12345";
        let cred = ApiCredential::new(secret, CredentialSource::Programmatic);
        assert_eq!(cred.expose(), secret);
    }

    #[test]
    fn test_blank_credential_unusable() {
        assert!(!ApiCredential::new("", CredentialSource::Programmatic).is_usable());
        assert!(!ApiCredential::new("   ", CredentialSource::Programmatic).is_usable());
    }

    #[test]
    fn test_placeholder_credential_unusable() {
        let cred = ApiCredential::new("YOUR_API_KEY", CredentialSource::Environment);
        assert!(cred.is_placeholder());
        assert!(!cred.is_usable());

        let cred = ApiCredential::new("your_api_key", CredentialSource::Environment);
        assert!(cred.is_placeholder());
    }

    #[test]
    fn test_real_credential_usable() {
        let cred = ApiCredential::new("ai-real-key", CredentialSource::Environment);
        assert!(cred.is_usable());
    }

    #[test]
    fn test_from_env_missing_is_error() {
        let result = ApiCredential::from_env("TRUSTLENS_NONEXISTENT_VAR_12345");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("TRUSTLENS_NONEXISTENT_VAR_12345"));
    }
}
