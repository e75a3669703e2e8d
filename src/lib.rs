//! Web application backend service.
//!
//! # Architecture Overview
//!
//! ```text
//!  WEBAPP_SETTINGS ───▶ settings (resolve → load → validate)
//!                            │
//!                            ▼
//!                   lifecycle::startup (one-shot bootstrap)
//!                            │
//!               ┌────────────┴────────────┐
//!               ▼                         ▼
//!         observability           app (context + factory)
//!         (tracing init)                  │
//!                                         ▼
//!                                http::GatewayServer
//!                            (bind, serve, drain, exit)
//! ```
//!
//! Startup is a single linear sequence: the settings source is resolved
//! from the environment (defaulted when unset, never overridden when
//! set), settings are loaded and validated, logging comes up, and the
//! application factory runs exactly once. The gateway adapter then
//! binds a listener and serves the constructed application until the
//! shutdown trigger, draining within a bounded grace period. Any
//! failure before the listener binds is fatal; the process never
//! accepts traffic with a half-built application.

// Core subsystems
pub mod app;
pub mod http;
pub mod settings;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use app::{AppContext, Application};
pub use http::GatewayServer;
pub use lifecycle::{initialize, Shutdown};
pub use settings::{ConfigurationError, Settings};
