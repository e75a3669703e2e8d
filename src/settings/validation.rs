//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: Settings → Result<(), Vec<ValidationError>>
//! - Runs before settings are accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::settings::schema::Settings;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in the settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("server.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate loaded settings, collecting every problem found.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            settings.server.bind_address.clone(),
        ));
    }

    if settings.server.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if settings.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if !LOG_LEVELS.contains(&settings.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            settings.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_unparseable_bind_address() {
        let mut settings = Settings::default();
        settings.server.bind_address = "not-an-address".to_string();

        let errors = validate_settings(&settings).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBindAddress("not-an-address".to_string())]
        );
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.observability.log_level = "verbose".to_string();

        let errors = validate_settings(&settings).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnknownLogLevel("verbose".to_string())]
        );
    }

    #[test]
    fn test_collects_every_error() {
        let mut settings = Settings::default();
        settings.server.bind_address = String::new();
        settings.server.max_body_bytes = 0;
        settings.timeouts.request_secs = 0;
        settings.observability.log_level = "loud".to_string();

        let errors = validate_settings(&settings).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
