//! Local filesystem adapter
//!
//! Implements `FileSystem` with `std::fs`.

use std::fs;
use std::path::Path;

use log::debug;

use crate::core::ports::FileSystem;

/// Filesystem backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a new local filesystem adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn create_dir_all(&self, path: &str) -> anyhow::Result<()> {
        debug!("creating directory {path}");
        fs::create_dir_all(path)?;
        Ok(())
    }
}
