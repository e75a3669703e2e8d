//! Application construction subsystem.
//!
//! # Data Flow
//! ```text
//! Settings (Arc, validated)
//!     → context.rs (AppContext, built once at startup)
//!     → factory.rs (Application::build, the single factory call)
//!     → http::server (gateway serves the application)
//! ```
//!
//! # Design Decisions
//! - Context is passed explicitly; handlers never reach into process globals
//! - The factory runs exactly once per process, during startup

pub mod context;
pub mod factory;

pub use context::AppContext;
pub use factory::Application;
