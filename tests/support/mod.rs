//! Shared test utilities.

use camino::Utf8PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for export tests.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Returns `relative` inside `dir` as a UTF-8 path.
///
/// # Panics
///
/// Panics if the temporary directory path is not valid UTF-8.
pub fn utf8_path(dir: &TempDir, relative: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join(relative))
        .unwrap_or_else(|path| panic!("temporary path is not UTF-8: {}", path.display()))
}
