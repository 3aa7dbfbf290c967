//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Honor RUST_LOG when set, fall back to the configured filter
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Connection and dispatch events carry structured fields
//!   (session_id, peer_addr, target) rather than formatted strings

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber. Call once, before any spans.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
