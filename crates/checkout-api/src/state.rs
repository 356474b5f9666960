//! # Application State
//!
//! Shared state for the Axum application: server settings and the
//! (optionally configured) payment gateway.

use checkout_core::SharedGateway;
use checkout_stripe::StripeClient;
use std::sync::Arc;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Present only when the Stripe credential is configured. Checked at
    /// the top of every checkout request, so a missing key surfaces as a
    /// structured 500 instead of a startup crash.
    pub gateway: Option<SharedGateway>,
}

impl AppState {
    /// Create state from the environment, with the Stripe gateway attached
    /// when `STRIPE_SECRET_KEY` is set.
    pub fn from_env() -> Self {
        let config = AppConfig::from_env();

        let gateway = match StripeClient::from_env() {
            Ok(client) => Some(Arc::new(client) as SharedGateway),
            Err(err) => {
                warn!("{} Checkout requests will be rejected until it is set.", err);
                None
            }
        };

        Self { config, gateway }
    }

    /// Create state with an explicit gateway (for testing)
    pub fn with_gateway(config: AppConfig, gateway: Option<SharedGateway>) -> Self {
        Self { config, gateway }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        // Clear env vars for test
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_state_without_gateway() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "test".to_string(),
        };

        let state = AppState::with_gateway(config, None);
        assert!(state.gateway.is_none());
    }
}
