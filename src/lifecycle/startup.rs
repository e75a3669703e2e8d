//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve the settings source and load settings
//! - Initialize logging before anything chatty runs
//! - Build the application context and call the factory once
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing retries
//! - Ordered startup: settings first, then logging, then the factory
//! - Listeners bind last, outside this module (traffic only when ready)

use std::sync::Arc;

use crate::app::{AppContext, Application};
use crate::observability::logging;
use crate::settings::{self, ConfigurationError, Settings};

/// Everything the process needs after a successful bootstrap.
#[derive(Debug)]
pub struct Bootstrapped {
    pub settings: Arc<Settings>,
    pub application: Application,
}

/// One-shot process initialization.
///
/// Runs the linear bootstrap sequence and hands back the constructed
/// application together with the settings handle the gateway binds with.
/// Errors are not caught or translated here; a failed bootstrap means
/// the process must not begin accepting requests.
pub fn initialize() -> Result<Bootstrapped, ConfigurationError> {
    let path = settings::resolve_settings_path();
    let settings = Arc::new(settings::load_settings(&path)?);

    logging::init(&settings.observability);

    tracing::info!(
        settings_file = %path.display(),
        bind_address = %settings.server.bind_address,
        request_timeout_secs = settings.timeouts.request_secs,
        "Settings loaded"
    );

    let context = AppContext::new(settings.clone());
    let application = Application::build(context);

    Ok(Bootstrapped {
        settings,
        application,
    })
}
