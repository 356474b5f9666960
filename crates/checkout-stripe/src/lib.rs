//! # checkout-stripe
//!
//! Stripe gateway for still-checkout-rs.
//!
//! This crate provides:
//! - `StripeConfig` for environment-sourced configuration
//! - `StripeClient` implementing `checkout_core::CheckoutGateway` against
//!   the Checkout Sessions API

pub mod checkout;
pub mod config;

pub use checkout::StripeClient;
pub use config::StripeConfig;
