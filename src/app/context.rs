//! Shared application context.
//!
//! Explicit construction replaces ambient process-global state: the
//! context is built once during startup and injected into the factory
//! and the gateway adapter.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::settings::Settings;

/// Process-wide context handed to request handlers as Axum state.
#[derive(Clone)]
pub struct AppContext {
    settings: Arc<Settings>,
    started_at: Instant,
}

impl AppContext {
    /// Build the context from loaded settings.
    pub fn new(settings: Arc<Settings>) -> Self {
        Self {
            settings,
            started_at: Instant::now(),
        }
    }

    /// Get a reference to the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Time elapsed since the context was constructed.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
