use std::path::{Component, Path, PathBuf};

/// Environment variable overriding the compat-data directory.
pub const BCD_DIR_VAR: &str = "BCD_DIR";

/// Environment variable overriding the results directory.
pub const RESULTS_DIR_VAR: &str = "RESULTS_DIR";

/// Default compat-data location, relative to the base directory.
pub const BCD_DIR_DEFAULT: &str = "../../browser-compat-data";

/// Default results location, relative to the base directory.
pub const RESULTS_DIR_DEFAULT: &str = "../../mdn-bcd-results";

/// Resolve `relative` against `base` lexically, without touching the filesystem.
///
/// `..` pops the deepest retained component; the root is never popped.
/// Neither path is required to exist.
pub fn resolve_lexical(base: &Path, relative: &str) -> PathBuf {
    let mut resolved = base.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            other => resolved.push(other),
        }
    }
    resolved
}
