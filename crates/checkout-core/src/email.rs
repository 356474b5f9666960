//! # Customer Email
//!
//! Validated customer email for checkout and receipts.

use crate::error::{CheckoutError, CheckoutResult};
use serde::Serialize;
use std::fmt;

/// A customer email that has passed validation.
///
/// The check is intentionally loose: trimmed, non-empty, and containing
/// an `@`. Stripe is the authority on deliverability; rejecting more here
/// would only turn away addresses the upstream accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    /// Validate a raw email value. Surrounding whitespace is trimmed first.
    pub fn parse(raw: &str) -> CheckoutResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.contains('@') {
            return Err(CheckoutError::InvalidEmail);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        let email = CustomerEmail::parse("a@b.com").unwrap();
        assert_eq!(email.as_str(), "a@b.com");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let email = CustomerEmail::parse(" a@b.com ").unwrap();
        assert_eq!(email.as_str(), "a@b.com");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            CustomerEmail::parse("").unwrap_err(),
            CheckoutError::InvalidEmail
        );
    }

    #[test]
    fn test_rejects_whitespace_only() {
        assert_eq!(
            CustomerEmail::parse("   \t").unwrap_err(),
            CheckoutError::InvalidEmail
        );
    }

    #[test]
    fn test_rejects_missing_at_sign() {
        assert_eq!(
            CustomerEmail::parse("not-an-email").unwrap_err(),
            CheckoutError::InvalidEmail
        );
    }

    #[test]
    fn test_loose_check_keeps_odd_but_at_containing_values() {
        // Deliberately permissive; the upstream decides deliverability.
        assert!(CustomerEmail::parse("x@y").is_ok());
    }
}
