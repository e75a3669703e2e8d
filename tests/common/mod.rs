//! Shared utilities for bootstrap integration tests.

use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use tempfile::NamedTempFile;

// The process environment is shared across harness threads; every test
// touching WEBAPP_SETTINGS must hold this lock while it does.
static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write a settings file with the given contents.
///
/// The returned handle keeps the file alive for the test's duration.
pub fn settings_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
