//! # Stripe Configuration
//!
//! Configuration for the Stripe integration. The secret key is loaded from
//! the environment once at startup and is never logged or echoed; the
//! `Debug` impl redacts it.

use checkout_core::{CheckoutError, CheckoutResult};
use std::env;
use std::fmt;

/// Stripe API configuration
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,

    /// API base URL (overridable for tests)
    pub api_base_url: String,

    /// Pinned API version sent with every request
    pub api_version: String,
}

impl StripeConfig {
    /// Load configuration from the environment.
    ///
    /// Required env var: `STRIPE_SECRET_KEY`. Absence yields
    /// [`CheckoutError::Misconfigured`], never a silent default.
    pub fn from_env() -> CheckoutResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let secret_key =
            env::var("STRIPE_SECRET_KEY").map_err(|_| CheckoutError::Misconfigured)?;

        if secret_key.trim().is_empty() {
            return Err(CheckoutError::Misconfigured);
        }

        Ok(Self::new(secret_key))
    }

    /// Create config with an explicit key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: "https://api.stripe.com".to_string(),
            api_version: "2024-12-18.acacia".to_string(),
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.auth_header(), "Bearer sk_test_abc123");
    }

    #[test]
    fn test_base_url_override() {
        let config = StripeConfig::new("sk_test_abc123").with_api_base_url("http://127.0.0.1:9");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = StripeConfig::new("sk_live_very_secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk_live_very_secret"));
        assert!(printed.contains("[redacted]"));
    }
}
