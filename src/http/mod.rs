//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (gateway adapter: bind, serve, drain)
//!     → request.rs (request ID minting/propagation)
//!     → application routes (app::factory)
//!     → response to client
//! ```

pub mod request;
pub mod server;

pub use request::{MakeUuidRequestId, X_REQUEST_ID};
pub use server::GatewayServer;
