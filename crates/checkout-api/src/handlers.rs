//! # Request Handlers
//!
//! Axum request handlers for the checkout service. The checkout handler is
//! a strict forward pipeline: method (routed), config, payload, email,
//! origin, build, one upstream call. No step runs twice and nothing loops
//! back.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use checkout_core::{CheckoutError, CheckoutResult, CustomerEmail, Origin, SessionRequest};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Checkout request body. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct CheckoutPayload {
    /// Customer email; validated before use
    #[serde(default)]
    pub email: Option<String>,
}

/// Successful checkout response
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// Stripe-hosted payment page to redirect the customer to
    pub url: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The one place the error taxonomy turns into HTTP.
///
/// Status comes from `CheckoutError::status_code`, the message from its
/// `Display` impl. `MethodNotAllowed` additionally advertises the allowed
/// method.
fn error_response(err: &CheckoutError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response();

    if matches!(err, CheckoutError::MethodNotAllowed) {
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("POST"));
    }

    response
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "still-checkout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for non-POST methods on the checkout route
pub async fn method_not_allowed() -> Response {
    error_response(&CheckoutError::MethodNotAllowed)
}

/// Create a Stripe Checkout session for one Still tag
#[instrument(skip(state, headers, body))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match checkout_pipeline(&state, &headers, &body).await {
        Ok(url) => (StatusCode::OK, Json(CheckoutResponse { url })).into_response(),
        Err(err) => error_response(&err),
    }
}

/// The validate -> build -> call pipeline, short-circuiting on the first
/// failure.
async fn checkout_pipeline(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> CheckoutResult<String> {
    // Config presence first, before touching the body, so a missing key
    // never shows up as a confusing downstream failure.
    let gateway = state.gateway.as_ref().ok_or(CheckoutError::Misconfigured)?;

    let payload: CheckoutPayload =
        serde_json::from_slice(body).map_err(|_| CheckoutError::InvalidPayload)?;

    let email = CustomerEmail::parse(payload.email.as_deref().unwrap_or_default())?;

    let origin = request_origin(headers)?;

    // Construction cannot fail: a constant template with two holes filled.
    let request = SessionRequest::new(&origin, email);

    info!("Creating checkout session from origin {}", origin);

    let session = gateway.create_session(&request).await?;

    Ok(session.url)
}

/// Derive the inbound request's origin from its headers.
///
/// Host comes from the `Host` header. Scheme comes from `X-Forwarded-Proto`
/// when a TLS-terminating proxy sits in front, defaulting to `http`. A
/// request without a host is malformed and rejected before construction.
fn request_origin(headers: &HeaderMap) -> CheckoutResult<Origin> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or(CheckoutError::InvalidPayload)?;

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("http");

    Ok(Origin::new(scheme, host))
}
