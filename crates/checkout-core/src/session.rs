//! # Session Request Types
//!
//! The origin-derived redirect URLs and the checkout session request sent
//! to the payment provider.

use crate::email::CustomerEmail;
use serde::Serialize;
use std::fmt;

/// Path of the post-payment landing page, relative to the request origin.
pub const SUCCESS_PATH: &str = "/success.html";

/// Path of the cancelled-checkout landing page, relative to the request origin.
pub const CANCEL_PATH: &str = "/cancel.html";

/// Scheme plus host of the inbound request.
///
/// Redirect targets are rooted at whatever origin the request arrived on,
/// so the same binary behaves correctly on localhost, staging, and
/// production without a configured domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    scheme: String,
    host: String,
}

impl Origin {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Absolute URL of the success page on this origin
    pub fn success_url(&self) -> String {
        format!("{}{}", self, SUCCESS_PATH)
    }

    /// Absolute URL of the cancel page on this origin
    pub fn cancel_url(&self) -> String {
        format!("{}{}", self, CANCEL_PATH)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

/// A fully-specified checkout session request.
///
/// Everything except the customer email and the two redirect URLs is a
/// compile-time constant (see [`crate::offer`]); this value is the constant
/// template with its two holes filled. Immutable once built, and
/// equality-comparable so tests can assert against an expected value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRequest {
    pub success_url: String,
    pub cancel_url: String,
    /// Used both as the checkout customer email and as the payment-intent
    /// receipt recipient. One field on purpose: whoever gets the receipt is
    /// the same customer who checked out.
    pub customer_email: CustomerEmail,
}

impl SessionRequest {
    /// Fill the template for one invocation.
    pub fn new(origin: &Origin, customer_email: CustomerEmail) -> Self {
        Self {
            success_url: origin.success_url(),
            cancel_url: origin.cancel_url(),
            customer_email,
        }
    }
}

/// The upstream's answer, reduced to what the caller needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSession {
    /// Provider session id, kept for logging
    pub id: String,
    /// Hosted payment page the caller should redirect to
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_display() {
        let origin = Origin::new("https", "stillgoods.uk");
        assert_eq!(origin.to_string(), "https://stillgoods.uk");
    }

    #[test]
    fn test_redirect_urls_share_origin_and_differ_only_in_path() {
        let origin = Origin::new("https", "shop.example");
        assert_eq!(origin.success_url(), "https://shop.example/success.html");
        assert_eq!(origin.cancel_url(), "https://shop.example/cancel.html");

        let success = origin.success_url();
        let cancel = origin.cancel_url();
        let shared = "https://shop.example";
        assert!(success.starts_with(shared));
        assert!(cancel.starts_with(shared));
        assert_ne!(success, cancel);
    }

    #[test]
    fn test_session_request_fills_exactly_two_holes() {
        let origin = Origin::new("http", "localhost:8080");
        let email = CustomerEmail::parse("a@b.com").unwrap();
        let request = SessionRequest::new(&origin, email.clone());

        let expected = SessionRequest {
            success_url: "http://localhost:8080/success.html".to_string(),
            cancel_url: "http://localhost:8080/cancel.html".to_string(),
            customer_email: email,
        };
        assert_eq!(request, expected);
    }
}
