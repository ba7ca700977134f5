//! Centralized path definitions for testmapper
//!
//! ## Project Layout
//!
//! ```text
//! workspace/
//! ├── .testmapper.toml          # Mapping rules (committed)
//! └── packages/app/             # Optional `root_path` the rules resolve against
//!     ├── src/...
//!     └── tests/...
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const CONFIG_FILE: &str = ".testmapper.toml";

/// Get path to the `.testmapper.toml` config file in `workspace`
#[must_use]
pub fn project_config(workspace: &Path) -> PathBuf {
    workspace.join(CONFIG_FILE)
}

/// Make `path` absolute by joining it onto `cwd` when it is relative
///
/// No normalization happens here; `..` and `.` are left to the path algebra.
#[must_use]
pub fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Lossy string form of a filesystem path
#[must_use]
pub fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
