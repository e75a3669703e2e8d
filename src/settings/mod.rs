//! Settings management subsystem.
//!
//! # Data Flow
//! ```text
//! WEBAPP_SETTINGS env var
//!     → env.rs (resolve path, default if absent)
//!     → loader.rs (read & deserialize TOML)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//!     → shared via Arc to the factory and the gateway
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once loaded; changing them requires a restart
//! - All fields have defaults to allow minimal settings files
//! - Validation separates syntactic (serde) from semantic checks
//! - An explicit operator-supplied WEBAPP_SETTINGS value is never overridden

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::{resolve_settings_path, DEFAULT_SETTINGS_PATH, SETTINGS_ENV};
pub use loader::{load_settings, ConfigurationError};
pub use schema::{ObservabilityConfig, ServerConfig, Settings, TimeoutConfig};
