//! Settings loading from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::settings::schema::Settings;
use crate::settings::validation::{validate_settings, ValidationError};

/// Startup failure raised when the settings file is missing, malformed,
/// or semantically invalid.
///
/// Never recovered from locally; it propagates to the entry point and
/// the process fails to start.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read settings file {}: {}", .path.display(), .source)]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse settings file {}: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid settings in {}: {}", .path.display(), join_errors(.errors))]
    Invalid {
        path: PathBuf,
        errors: Vec<ValidationError>,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigurationError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let settings: Settings =
        toml::from_str(&content).map_err(|source| ConfigurationError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    validate_settings(&settings).map_err(|errors| ConfigurationError::Invalid {
        path: path.to_path_buf(),
        errors,
    })?;

    Ok(settings)
}
