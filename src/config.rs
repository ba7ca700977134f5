//! Project configuration
//!
//! Mapping rules live in `.testmapper.toml` at the workspace root:
//!
//! ```toml
//! # Optional, relative to the workspace
//! root_path = "packages/app"
//!
//! [[mapping]]
//! src_root = "src"
//! test_root = "__tests__"
//! test_suffix = ".test"
//! sibling = true
//! ```
//!
//! camelCase keys (`srcRoot`, `testRoot`, `testSuffix`, `testRootAtSrc`,
//! `rootPath`) are accepted as well.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::MappingRule;
use crate::core::path::PathStyle;

/// Errors that can occur when loading a project configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A rule has an empty test suffix
    #[error("mapping #{index}: test_suffix must not be empty")]
    EmptySuffix {
        /// Zero-based rule index
        index: usize,
    },

    /// A sibling rule's test root names no directory
    #[error("mapping #{index}: sibling test_root {test_root:?} names no directory")]
    EmptySiblingTestRoot {
        /// Zero-based rule index
        index: usize,
        /// The configured test root
        test_root: String,
    },
}

/// Contents of `.testmapper.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project root, relative to the workspace (defaults to the workspace)
    #[serde(default, alias = "rootPath", skip_serializing_if = "Option::is_none")]
    pub root_path: Option<String>,

    /// Ordered mapping rules
    #[serde(default, alias = "mappings")]
    pub mapping: Vec<MappingRule>,
}

impl ProjectConfig {
    /// Load and validate the config at `path`
    ///
    /// A missing file yields the default, rule-less configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        debug!("loaded {} mapping rule(s) from {}", config.mapping.len(), path.display());
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate(PathStyle::native())?;
        Ok(config)
    }

    /// Check every rule under `style`
    pub fn validate(&self, style: PathStyle) -> Result<(), ConfigError> {
        for (index, rule) in self.mapping.iter().enumerate() {
            if rule.test_suffix.is_empty() {
                return Err(ConfigError::EmptySuffix { index });
            }
            if rule.sibling && style.segments(&rule.test_root).is_empty() {
                return Err(ConfigError::EmptySiblingTestRoot {
                    index,
                    test_root: rule.test_root.clone(),
                });
            }
        }
        Ok(())
    }

    /// Append `rule` after the configured ones
    #[must_use]
    pub fn with_rule(mut self, rule: MappingRule) -> Self {
        self.mapping.push(rule);
        self
    }

    /// Absolute project root for the absolute `workspace`
    #[must_use]
    pub fn project_root(&self, workspace: &str, style: PathStyle) -> String {
        match &self.root_path {
            Some(root) => style.resolve(workspace, root),
            None => style.normalize(workspace),
        }
    }
}

/// Commented starter config written by `testmapper init`
pub const STARTER_CONFIG: &str = r#"# testmapper mapping rules
#
# Rules are tried in order. Source files under `src_root` map to test files
# named `<stem><test_suffix><ext>` under `test_root`.

# Project root, relative to this file's directory
# root_path = "packages/app"

# Centralized: src/utils/a.ts <-> tests/utils/a.test.ts
[[mapping]]
src_root = "src"
test_root = "tests"
test_suffix = ".test"

# Sibling: src/utils/a.ts <-> src/utils/__tests__/a.spec.ts
# [[mapping]]
# src_root = "src"
# test_root = "__tests__"
# test_suffix = ".spec"
# sibling = true
"#;
