//! # Checkout Error Types
//!
//! Typed error handling for the checkout pipeline.
//! All checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// The complete failure taxonomy of the checkout handler.
///
/// Every failure a caller can observe is one of these six outcomes; each
/// maps to exactly one HTTP status via [`CheckoutError::status_code`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Request used a method other than POST
    #[error("Method not allowed. Use POST.")]
    MethodNotAllowed,

    /// The Stripe credential is absent from the environment
    #[error("Stripe secret key is not configured.")]
    Misconfigured,

    /// Request body was not a JSON object we recognize
    #[error("Invalid request payload.")]
    InvalidPayload,

    /// Email was missing, empty, or not email-shaped
    #[error("Please provide a valid email so we can send your receipt.")]
    InvalidEmail,

    /// The upstream call could not complete, or its reply was not JSON
    #[error("Unexpected error creating Stripe Checkout session.")]
    UpstreamUnavailable,

    /// The upstream answered but refused the session or omitted its URL.
    /// Carries the upstream-provided message when one was present.
    #[error("{0}")]
    UpstreamRejected(String),
}

/// Fallback message for `UpstreamRejected` when Stripe gives us nothing usable.
pub const UPSTREAM_REJECTED_FALLBACK: &str = "Unable to create Stripe Checkout session.";

impl CheckoutError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::MethodNotAllowed => 405,
            CheckoutError::Misconfigured => 500,
            CheckoutError::InvalidPayload => 400,
            CheckoutError::InvalidEmail => 400,
            CheckoutError::UpstreamUnavailable => 500,
            CheckoutError::UpstreamRejected(_) => 502,
        }
    }

    /// Build an `UpstreamRejected` from an optional upstream message
    pub fn rejected(message: Option<String>) -> Self {
        CheckoutError::UpstreamRejected(
            message.unwrap_or_else(|| UPSTREAM_REJECTED_FALLBACK.to_string()),
        )
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CheckoutError::MethodNotAllowed.status_code(), 405);
        assert_eq!(CheckoutError::Misconfigured.status_code(), 500);
        assert_eq!(CheckoutError::InvalidPayload.status_code(), 400);
        assert_eq!(CheckoutError::InvalidEmail.status_code(), 400);
        assert_eq!(CheckoutError::UpstreamUnavailable.status_code(), 500);
        assert_eq!(
            CheckoutError::UpstreamRejected("declined".into()).status_code(),
            502
        );
    }

    #[test]
    fn test_rejected_keeps_upstream_message() {
        let err = CheckoutError::rejected(Some("Your card was declined.".into()));
        assert_eq!(err.to_string(), "Your card was declined.");
    }

    #[test]
    fn test_rejected_falls_back_to_generic_message() {
        let err = CheckoutError::rejected(None);
        assert_eq!(err.to_string(), UPSTREAM_REJECTED_FALLBACK);
    }

    #[test]
    fn test_unavailable_message_is_generic() {
        // Transport detail is logged, never surfaced to the caller.
        assert_eq!(
            CheckoutError::UpstreamUnavailable.to_string(),
            "Unexpected error creating Stripe Checkout session."
        );
    }
}
