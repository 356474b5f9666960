//! # Stripe Checkout Sessions
//!
//! Implementation of the checkout gateway against Stripe's Checkout
//! Sessions API. One form-encoded POST per invocation, no retries.

use crate::config::StripeConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutGateway, CheckoutResult, CreatedSession, SessionRequest,
    ALLOWED_SHIPPING_COUNTRY, ROYAL_MAIL_FREE, STILL_TAG,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Stripe implementation of [`CheckoutGateway`]
///
/// Uses Stripe's hosted checkout page. The card never touches this
/// service, which keeps it out of PCI scope.
pub struct StripeClient {
    config: StripeConfig,
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = StripeConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Encode a session request as Stripe form parameters.
    ///
    /// Everything here except the email and the two URLs comes from the
    /// fixed offer constants. The customer email is written to both
    /// `customer_email` and the receipt-email parameter from the same
    /// field, so the receipt recipient can never diverge from the
    /// customer.
    fn form_params(request: &SessionRequest) -> Vec<(&'static str, String)> {
        vec![
            ("mode", "payment".to_string()),
            ("payment_method_types[0]", "card".to_string()),
            ("success_url", request.success_url.clone()),
            ("cancel_url", request.cancel_url.clone()),
            ("customer_email", request.customer_email.to_string()),
            (
                "payment_intent_data[receipt_email]",
                request.customer_email.to_string(),
            ),
            (
                "shipping_address_collection[allowed_countries][0]",
                ALLOWED_SHIPPING_COUNTRY.to_string(),
            ),
            ("line_items[0][quantity]", STILL_TAG.quantity.to_string()),
            (
                "line_items[0][price_data][currency]",
                STILL_TAG.currency.to_string(),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                STILL_TAG.unit_amount_minor.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                STILL_TAG.name.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][description]",
                STILL_TAG.description.to_string(),
            ),
            (
                "shipping_options[0][shipping_rate_data][display_name]",
                ROYAL_MAIL_FREE.display_name.to_string(),
            ),
            (
                "shipping_options[0][shipping_rate_data][type]",
                "fixed_amount".to_string(),
            ),
            (
                "shipping_options[0][shipping_rate_data][fixed_amount][amount]",
                ROYAL_MAIL_FREE.amount_minor.to_string(),
            ),
            (
                "shipping_options[0][shipping_rate_data][fixed_amount][currency]",
                ROYAL_MAIL_FREE.currency.to_string(),
            ),
        ]
    }
}

#[async_trait]
impl CheckoutGateway for StripeClient {
    #[instrument(skip(self, request), fields(success_url = %request.success_url))]
    async fn create_session(&self, request: &SessionRequest) -> CheckoutResult<CreatedSession> {
        let params = Self::form_params(request);
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);
        let idempotency_key = Uuid::new_v4().to_string();

        debug!("Creating Stripe checkout session: {} params", params.len());

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .header("Idempotency-Key", &idempotency_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                error!("Stripe request failed: {}", e);
                CheckoutError::UpstreamUnavailable
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Stripe response: {}", e);
            CheckoutError::UpstreamUnavailable
        })?;

        // Any reply we cannot read as JSON counts as the upstream being
        // unavailable, whatever the status line said.
        let payload: SessionPayload = serde_json::from_str(&body).map_err(|e| {
            error!("Unparseable Stripe response (status {}): {}", status, e);
            CheckoutError::UpstreamUnavailable
        })?;

        if !status.is_success() {
            let message = payload.error.and_then(|e| e.message);
            error!(
                "Stripe rejected checkout session: status={}, message={:?}",
                status, message
            );
            return Err(CheckoutError::rejected(message));
        }

        let session_url = match payload.url {
            Some(session_url) => session_url,
            None => {
                error!("Stripe reported success but returned no session URL");
                return Err(CheckoutError::rejected(None));
            }
        };

        let session_id = payload.id.unwrap_or_default();
        info!("Created Stripe checkout session: id={}", session_id);

        Ok(CreatedSession {
            id: session_id,
            url: session_url,
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SessionPayload {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
}
