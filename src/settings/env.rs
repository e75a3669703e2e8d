//! Settings source resolution.
//!
//! # Responsibilities
//! - Decide which settings file the process boots from
//! - Apply the default path when the operator supplied none
//! - Never override an explicit operator-supplied value
//!
//! # Design Decisions
//! - Resolution works on `OsString` so unusual paths pass through verbatim
//! - The variable is written at most once, before any dependent init
//! - Repeating resolution yields the same result

use std::env;
use std::path::PathBuf;

/// Environment variable naming the settings file to boot from.
pub const SETTINGS_ENV: &str = "WEBAPP_SETTINGS";

/// Settings file used when `WEBAPP_SETTINGS` is unset.
pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.toml";

/// Resolve the settings file path, defaulting the environment variable
/// when it is absent.
///
/// An operator-supplied value is respected verbatim, whatever it is;
/// only its absence triggers the default.
pub fn resolve_settings_path() -> PathBuf {
    match env::var_os(SETTINGS_ENV) {
        Some(value) => PathBuf::from(value),
        None => {
            env::set_var(SETTINGS_ENV, DEFAULT_SETTINGS_PATH);
            PathBuf::from(DEFAULT_SETTINGS_PATH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // The process environment is shared across harness threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_unset_applies_default() {
        let _guard = lock_env();
        env::remove_var(SETTINGS_ENV);

        let path = resolve_settings_path();

        assert_eq!(path, PathBuf::from(DEFAULT_SETTINGS_PATH));
        assert_eq!(env::var(SETTINGS_ENV).unwrap(), DEFAULT_SETTINGS_PATH);
        env::remove_var(SETTINGS_ENV);
    }

    #[test]
    fn test_operator_value_untouched() {
        let _guard = lock_env();
        env::set_var(SETTINGS_ENV, "/etc/webapp/production.toml");

        let path = resolve_settings_path();

        assert_eq!(path, PathBuf::from("/etc/webapp/production.toml"));
        assert_eq!(env::var(SETTINGS_ENV).unwrap(), "/etc/webapp/production.toml");
        env::remove_var(SETTINGS_ENV);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let _guard = lock_env();
        env::remove_var(SETTINGS_ENV);

        let first = resolve_settings_path();
        let second = resolve_settings_path();

        assert_eq!(first, second);
        assert_eq!(env::var(SETTINGS_ENV).unwrap(), DEFAULT_SETTINGS_PATH);
        env::remove_var(SETTINGS_ENV);
    }
}
