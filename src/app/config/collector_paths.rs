//! Collector directory resolution from environment and base directory.

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::paths;

/// The two collector directories, resolved once at startup.
///
/// Values are immutable after construction and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectorPaths {
    /// Root of the browser-compat-data tree.
    pub bcd_dir: PathBuf,
    /// Root of the directory collector results are written into.
    pub results_dir: PathBuf,
}

impl CollectorPaths {
    /// Resolve both directories against `base_dir`.
    ///
    /// Each directory honors its environment override (`BCD_DIR`,
    /// `RESULTS_DIR`) when set to a non-empty value, verbatim; otherwise the
    /// default two levels above `base_dir` applies. Neither path is checked
    /// for existence.
    pub fn resolve(base_dir: &Path) -> Self {
        Self {
            bcd_dir: resolve_dir(paths::BCD_DIR_VAR, base_dir, paths::BCD_DIR_DEFAULT),
            results_dir: resolve_dir(paths::RESULTS_DIR_VAR, base_dir, paths::RESULTS_DIR_DEFAULT),
        }
    }

    /// Resolve both directories against the running executable's directory.
    pub fn from_executable() -> Result<Self, AppError> {
        let exe = env::current_exe()?;
        let base_dir = exe.parent().ok_or(AppError::ExecutableDirUnavailable)?;
        Ok(Self::resolve(base_dir))
    }
}

/// Resolve one directory: non-empty environment override verbatim, default
/// relative to `base_dir` otherwise.
///
/// An unset variable and one set to the empty string are treated alike; both
/// fall through to the default.
fn resolve_dir(var: &str, base_dir: &Path, default_relative: &str) -> PathBuf {
    match env::var(var) {
        Ok(value) if !value.is_empty() => PathBuf::from(value),
        _ => paths::resolve_lexical(base_dir, default_relative),
    }
}
