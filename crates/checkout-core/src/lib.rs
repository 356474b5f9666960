//! # checkout-core
//!
//! Core types and traits for the still-checkout payment handler.
//!
//! This crate provides:
//! - `CheckoutError` for the six-member failure taxonomy
//! - `CustomerEmail` for validated customer emails
//! - `Origin` and `SessionRequest` for origin-derived redirect URLs and
//!   the fixed-template session request
//! - The fixed offer constants (`STILL_TAG`, `ROYAL_MAIL_FREE`)
//! - `CheckoutGateway` trait for the payment provider seam
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{CustomerEmail, Origin, SessionRequest};
//!
//! let email = CustomerEmail::parse(" a@b.com ")?;
//! let origin = Origin::new("https", "stillgoods.uk");
//! let request = SessionRequest::new(&origin, email);
//!
//! let session = gateway.create_session(&request).await?;
//! // Redirect the customer to session.url
//! ```

pub mod email;
pub mod error;
pub mod gateway;
pub mod offer;
pub mod session;

// Re-exports for convenience
pub use email::CustomerEmail;
pub use error::{CheckoutError, CheckoutResult, UPSTREAM_REJECTED_FALLBACK};
pub use gateway::{CheckoutGateway, SharedGateway};
pub use offer::{Offer, ShippingRate, ALLOWED_SHIPPING_COUNTRY, ROYAL_MAIL_FREE, STILL_TAG};
pub use session::{CreatedSession, Origin, SessionRequest, CANCEL_PATH, SUCCESS_PATH};
