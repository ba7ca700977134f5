//! Mapping rule model
//!
//! A mapping rule declares: "source files under here have their tests there,
//! marked with this suffix."

use serde::{Deserialize, Serialize};

use crate::core::path::PathOps;

/// A rule mapping source files to test files
///
/// Two layouts are supported:
///
/// - **Centralized** (`sibling = false`): `test_root` is resolved once against
///   the project root and mirrors the structure below `src_root`.
///   `src/utils/helper.js` maps to `tests/utils/helper.test.js`.
/// - **Sibling** (`sibling = true`): `test_root` is resolved against each source
///   file's own directory. `src/utils/helper.js` maps to
///   `src/utils/__tests__/helper.test.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    /// Source root, relative to the project root (e.g. "src", "packages/client/src")
    #[serde(alias = "srcRoot")]
    pub src_root: String,

    /// Test root, relative to the project root or to each source file's directory
    #[serde(alias = "testRoot")]
    pub test_root: String,

    /// Suffix placed before the extension of test files (e.g. ".test", ".spec")
    #[serde(alias = "testSuffix")]
    pub test_suffix: String,

    /// Resolve `test_root` next to each source file instead of at the project root
    #[serde(default, alias = "testRootAtSrc")]
    pub sibling: bool,
}

impl MappingRule {
    /// Create a rule with a centralized test tree
    pub fn centralized(
        src_root: impl Into<String>,
        test_root: impl Into<String>,
        test_suffix: impl Into<String>,
    ) -> Self {
        Self {
            src_root: src_root.into(),
            test_root: test_root.into(),
            test_suffix: test_suffix.into(),
            sibling: false,
        }
    }

    /// Create a rule with tests next to each source file
    pub fn sibling(
        src_root: impl Into<String>,
        test_root: impl Into<String>,
        test_suffix: impl Into<String>,
    ) -> Self {
        Self {
            src_root: src_root.into(),
            test_root: test_root.into(),
            test_suffix: test_suffix.into(),
            sibling: true,
        }
    }
}

impl std::fmt::Display for MappingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let layout = if self.sibling { "sibling" } else { "centralized" };
        write!(f, "{} -> {} (*{}, {layout})", self.src_root, self.test_root, self.test_suffix)
    }
}

/// Where a rule's test files live once resolved against a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestLocation {
    /// Absolute root of a centralized test tree
    Centralized(String),
    /// Segments of the sub-path searched for below each source directory
    ///
    /// A rule whose test root has no segments never recognizes a test file.
    Sibling(Vec<String>),
}

/// A mapping rule with its roots resolved to absolute paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRule {
    /// The configured rule
    pub rule: MappingRule,

    /// Absolute source root
    pub abs_src_root: String,

    /// Resolved test location
    pub tests: TestLocation,
}

impl ResolvedRule {
    /// Resolve `rule` against the absolute `project_root`
    pub fn new(rule: MappingRule, project_root: &str, ops: &impl PathOps) -> Self {
        let abs_src_root = ops.join(project_root, &rule.src_root);
        let tests = if rule.sibling {
            TestLocation::Sibling(ops.style().segments(&rule.test_root))
        } else {
            TestLocation::Centralized(ops.join(project_root, &rule.test_root))
        };

        Self {
            rule,
            abs_src_root,
            tests,
        }
    }

    /// Absolute test root, only known for centralized rules
    #[must_use]
    pub fn abs_test_root(&self) -> Option<&str> {
        match &self.tests {
            TestLocation::Centralized(root) => Some(root),
            TestLocation::Sibling(_) => None,
        }
    }

    /// The configured test suffix
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.rule.test_suffix
    }
}
