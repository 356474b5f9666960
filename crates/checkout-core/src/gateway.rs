//! # Checkout Gateway Trait
//!
//! Seam between the HTTP surface and the payment provider. The API crate
//! talks to `dyn CheckoutGateway`; the Stripe crate provides the one
//! implementation. Tests can substitute their own.

use crate::error::CheckoutResult;
use crate::session::{CreatedSession, SessionRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// A payment provider capable of turning a [`SessionRequest`] into a
/// hosted checkout session.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Create a checkout session and return its redirect URL.
    ///
    /// Exactly one outbound call per invocation; implementations do not
    /// retry.
    async fn create_session(&self, request: &SessionRequest) -> CheckoutResult<CreatedSession>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &'static str;
}

/// Shared handle to a gateway (dynamic dispatch)
pub type SharedGateway = Arc<dyn CheckoutGateway>;
