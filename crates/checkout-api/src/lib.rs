//! # checkout-api
//!
//! HTTP surface for still-checkout-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The checkout session endpoint
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/create-checkout-session` | Create a Stripe checkout session |
//! | GET | `/health` | Health check |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
