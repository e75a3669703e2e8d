//! Hosting gateway adapter.
//!
//! # Responsibilities
//! - Bind the constructed application to a TCP listener
//! - Serve until the shutdown trigger, then drain in-flight requests
//! - Force exit when draining exceeds the grace deadline
//!
//! # Design Decisions
//! - The application is built before the listener binds; traffic only when ready
//! - Draining is bounded: the grace deadline forces exit on slow connections

use std::future::IntoFuture;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::app::Application;
use crate::lifecycle::Shutdown;
use crate::settings::Settings;

/// Serves a constructed application on behalf of the process.
pub struct GatewayServer {
    application: Application,
    settings: Arc<Settings>,
}

impl GatewayServer {
    /// Create a new gateway for the given application.
    pub fn new(application: Application, settings: Arc<Settings>) -> Self {
        Self {
            application,
            settings,
        }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once the shutdown trigger has fired and in-flight requests
    /// have drained, or once the grace deadline expires.
    pub async fn run(self, listener: TcpListener, shutdown: &Shutdown) -> io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let grace = Duration::from_secs(self.settings.timeouts.shutdown_grace_secs);
        let mut drain_rx = shutdown.subscribe();
        let mut deadline_rx = shutdown.subscribe();

        let server = axum::serve(listener, self.application.into_router())
            .with_graceful_shutdown(async move {
                let _ = drain_rx.recv().await;
                tracing::info!("Shutdown trigger received, draining connections");
            })
            .into_future();

        tokio::select! {
            result = server => {
                result?;
            }
            () = async {
                let _ = deadline_rx.recv().await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(
                    grace_secs = grace.as_secs(),
                    "Drain deadline exceeded, forcing exit"
                );
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
