//! Structured logging.
//!
//! # Design Decisions
//! - `RUST_LOG` always wins; the configured level is the fallback
//! - Structured fields over message interpolation

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `default_directive` is the configured log level (or a full filter
/// directive); it applies only when `RUST_LOG` is unset.
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
