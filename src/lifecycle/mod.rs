//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve settings source → Load & validate → Init logging
//!     → Build context → Application factory
//!
//! Shutdown (shutdown.rs):
//!     Trigger fired → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Fire shutdown trigger
//! ```
//!
//! # Design Decisions
//! - Ordered startup: settings first, then core, then listeners
//! - Startup runs exactly once per process; any failure is fatal
//! - Shutdown has a deadline: forced exit after the grace period

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{initialize, Bootstrapped};
