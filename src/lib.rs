//! bcdc: locate the browser-compat-data and collector results directories.

pub mod app;
pub mod domain;

pub use app::config::CollectorPaths;
pub use domain::AppError;

/// Resolve the collector directories against the running executable's directory.
///
/// Honors the `BCD_DIR` and `RESULTS_DIR` environment overrides; neither
/// resolved path is checked for existence.
pub fn collector_paths() -> Result<CollectorPaths, AppError> {
    CollectorPaths::from_executable()
}
