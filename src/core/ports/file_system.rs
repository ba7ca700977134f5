//! Filesystem port
//!
//! The only places the open workflows touch the disk.

/// Filesystem probe and directory creation
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Check whether `path` exists
    fn exists(&self, path: &str) -> bool;

    /// Create `path` and any missing parent directories
    fn create_dir_all(&self, path: &str) -> anyhow::Result<()>;
}
