//! Web application backend - binary entry point.
//!
//! Bootstraps the process (settings, logging, application factory),
//! binds the listener, and serves until a shutdown signal.

use tokio::net::TcpListener;

use webapp_backend::http::GatewayServer;
use webapp_backend::lifecycle::{self, signals, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let boot = lifecycle::initialize()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "webapp-backend starting"
    );

    let listener = TcpListener::bind(&boot.settings.server.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = GatewayServer::new(boot.application, boot.settings.clone());
    server.run(listener, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
