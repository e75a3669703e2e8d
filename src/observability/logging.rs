//! Structured logging.
//!
//! # Responsibilities
//! - Install the tracing subscriber for the process
//! - Honor operator overrides (`RUST_LOG`) over the configured level
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - RUST_LOG wins over the settings file when both are present
//! - Installation is idempotent so repeated bootstraps stay safe

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::schema::ObservabilityConfig;

/// Install the global tracing subscriber.
///
/// Later calls are no-ops once a subscriber is installed.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
