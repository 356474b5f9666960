//! # Still Checkout
//!
//! Single-purpose checkout service for the Still tag.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//!
//! # Run the server
//! still-checkout
//! ```

use checkout_api::{routes, state::AppState};
use checkout_core::CheckoutGateway as _;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::from_env();

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!(
        "Payment gateway: {}",
        state
            .gateway
            .as_ref()
            .map(|g| g.provider_name())
            .unwrap_or("none (credential missing)")
    );

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 Still checkout starting on http://{}", addr);

    if !is_prod {
        info!("💳 Checkout: POST http://{}/create-checkout-session", addr);
        info!("🩺 Health: GET http://{}/health", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
