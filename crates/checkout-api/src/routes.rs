//! # Routes
//!
//! Axum router configuration for the checkout service.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Create the main application router
///
/// Routes:
/// - POST /create-checkout-session - Create a Stripe checkout session
///   (any other method on this path gets a 405 with `Allow: POST`)
/// - GET  /health - Health check
///
/// Every response carries `Cache-Control: no-store`; nothing this service
/// returns is cacheable.
pub fn create_router(state: AppState) -> Router {
    let checkout = post(handlers::create_checkout_session).fallback(handlers::method_not_allowed);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/create-checkout-session", checkout)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
