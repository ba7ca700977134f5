//! Source ↔ test path resolver
//!
//! The resolver maps a source file to the candidate locations of its tests and
//! a test file back to its source, using nothing but path algebra over the
//! configured [`MappingRule`]s. It never looks at the filesystem.
//!
//! # Examples
//!
//! ```
//! use testmapper::core::models::MappingRule;
//! use testmapper::core::path::PathStyle;
//! use testmapper::core::services::PathResolver;
//!
//! let rules = [MappingRule::centralized("src", "tests", ".test")];
//! let mut resolver = PathResolver::new(PathStyle::Posix, "/workspace", rules);
//!
//! let tests = resolver.test_candidates("/workspace/src/utils/helper.js");
//! assert_eq!(tests, Some(vec!["/workspace/tests/utils/helper.test.js".to_string()]));
//!
//! let source = resolver.source_file("/workspace/tests/utils/helper.test.js");
//! assert_eq!(source.as_deref(), Some("/workspace/src/utils/helper.js"));
//! ```

use log::debug;

use super::cache::LookupCache;
use super::containment::{find_segment_sequence, is_within};
use crate::core::models::{MappingRule, ResolvedRule, TestLocation};
use crate::core::path::{FileParts, PathOps, PathStyle};

/// Resolves source files to test files and back, memoizing every lookup
///
/// Rule order matters: forward candidates come out in rule order and the first
/// rule that produces a source path wins in reverse. Results are cached per
/// normalized absolute path for the lifetime of the resolver, including "no
/// match" outcomes.
#[derive(Debug)]
pub struct PathResolver<P: PathOps = PathStyle> {
    ops: P,
    project_root: String,
    rules: Vec<ResolvedRule>,
    test_cache: LookupCache<Vec<String>>,
    source_cache: LookupCache<String>,
}

impl<P: PathOps> PathResolver<P> {
    /// Create a resolver for `project_root` (absolute) and the ordered `rules`
    pub fn new(ops: P, project_root: &str, rules: impl IntoIterator<Item = MappingRule>) -> Self {
        let project_root = ops.style().normalize(project_root);
        let rules: Vec<ResolvedRule> =
            rules.into_iter().map(|rule| ResolvedRule::new(rule, &project_root, &ops)).collect();

        debug!("resolver for {project_root} with {} rule(s)", rules.len());

        Self {
            ops,
            project_root,
            rules,
            test_cache: LookupCache::new(),
            source_cache: LookupCache::new(),
        }
    }

    /// The normalized project root
    #[must_use]
    pub fn project_root(&self) -> &str {
        &self.project_root
    }

    /// The resolved rules, in configured order
    #[must_use]
    pub fn rules(&self) -> &[ResolvedRule] {
        &self.rules
    }

    /// The path style used for every computation
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.ops.style()
    }

    /// Normalize `path` to an absolute path, resolving relative paths against
    /// the project root
    #[must_use]
    pub fn absolutize(&self, path: &str) -> String {
        self.ops.resolve(&self.project_root, path)
    }

    /// Candidate test files for the source file `path`
    ///
    /// Returns `None` when `path` already looks like a test file or no rule's
    /// source root contains it. Otherwise there is one candidate per matching
    /// rule, in rule order. Candidates may not exist on disk.
    pub fn test_candidates(&mut self, path: &str) -> Option<Vec<String>> {
        let key = self.absolutize(path);
        if let Some(cached) = self.test_cache.get(&key) {
            debug!("test candidates cache hit: {key}");
            return cached.clone().into_option();
        }

        let result = self.compute_test_candidates(&key);
        debug!("test candidates for {key}: {result:?}");
        self.test_cache.insert(key, result.clone());
        result
    }

    /// Source file for the test file `path`
    ///
    /// Returns `None` unless `path` is strictly a test file (suffix and location
    /// both match one rule) and some rule can map it back.
    pub fn source_file(&mut self, path: &str) -> Option<String> {
        let key = self.absolutize(path);
        if let Some(cached) = self.source_cache.get(&key) {
            debug!("source file cache hit: {key}");
            return cached.clone().into_option();
        }

        let result = self.compute_source_file(&key);
        debug!("source file for {key}: {result:?}");
        self.source_cache.insert(key, result.clone());
        result
    }

    /// Whether `path` looks like a test file under any rule: its stem ends with
    /// the rule's suffix OR it sits in the rule's test location
    #[must_use]
    pub fn looks_like_test(&self, path: &str) -> bool {
        let file = self.absolutize(path);
        let parts = self.ops.parse(&file);
        self.rules.iter().any(|rule| {
            self.has_test_suffix(rule, &parts.stem) || self.in_test_location(rule, &file, &parts)
        })
    }

    /// Whether `path` is a test file under some rule: its stem ends with the
    /// rule's suffix AND it sits in that rule's test location
    #[must_use]
    pub fn is_test_file(&self, path: &str) -> bool {
        let file = self.absolutize(path);
        let parts = self.ops.parse(&file);
        self.rules.iter().any(|rule| {
            self.strip_test_suffix(rule, &parts.stem).is_some()
                && self.in_test_location(rule, &file, &parts)
        })
    }

    fn compute_test_candidates(&self, file: &str) -> Option<Vec<String>> {
        if self.looks_like_test(file) {
            debug!("{file} already looks like a test file");
            return None;
        }

        let parts = self.ops.parse(file);
        let candidates: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| is_within(&self.ops, file, &rule.abs_src_root))
            .map(|rule| {
                let test_dir = match &rule.tests {
                    TestLocation::Sibling(_) => self.ops.join(&parts.dir, &rule.rule.test_root),
                    TestLocation::Centralized(test_root) => {
                        let relative = self.ops.relative(&rule.abs_src_root, file);
                        self.ops.join(test_root, &self.ops.dirname(&relative))
                    },
                };
                let name = format!("{}{}{}", parts.stem, rule.suffix(), parts.ext);
                self.ops.join(&test_dir, &name)
            })
            .collect();

        (!candidates.is_empty()).then_some(candidates)
    }

    fn compute_source_file(&self, file: &str) -> Option<String> {
        if !self.is_test_file(file) {
            debug!("{file} is not a test file");
            return None;
        }

        let parts = self.ops.parse(file);
        self.rules.iter().find_map(|rule| self.source_for_rule(rule, file, &parts))
    }

    fn source_for_rule(&self, rule: &ResolvedRule, file: &str, parts: &FileParts) -> Option<String> {
        let base = self.strip_test_suffix(rule, &parts.stem)?;
        let name = format!("{base}{}", parts.ext);

        match &rule.tests {
            TestLocation::Centralized(test_root) => {
                if !is_within(&self.ops, file, test_root) {
                    return None;
                }
                let relative = self.ops.relative(test_root, file);
                let src_dir = self.ops.join(&rule.abs_src_root, &self.ops.dirname(&relative));
                Some(self.ops.join(&src_dir, &name))
            },
            TestLocation::Sibling(segments) => {
                if !is_within(&self.ops, file, &rule.abs_src_root) {
                    return None;
                }
                let components = self.ops.components(file);
                let start = depth(&self.ops.components(&rule.abs_src_root));
                let dir_end = components.len().saturating_sub(1);
                let below_root = components.get(start..dir_end)?;

                let offset = find_segment_sequence(below_root, segments.as_slice(), |a, b| {
                    self.style().segments_eq(a, b)
                })?;
                let index = start + offset;
                if index < 1 {
                    return None;
                }

                let src_dir = self.style().from_components(&components[..index]);
                Some(self.ops.join(&src_dir, &name))
            },
        }
    }

    /// Suffix check for the loose classification; a stem equal to the suffix counts
    fn has_test_suffix(&self, rule: &ResolvedRule, stem: &str) -> bool {
        self.style().strip_suffix(stem, rule.suffix()).is_some()
    }

    /// Stem with the rule's suffix removed, if something remains
    fn strip_test_suffix<'a>(&self, rule: &ResolvedRule, stem: &'a str) -> Option<&'a str> {
        self.style().strip_suffix(stem, rule.suffix()).filter(|base| !base.is_empty())
    }

    /// Whether the file sits where `rule` keeps its tests
    ///
    /// Sibling rules look for their test-root segments anywhere in the file's
    /// directory below the source root, so extra nesting above or below the
    /// matched run is fine.
    fn in_test_location(&self, rule: &ResolvedRule, file: &str, parts: &FileParts) -> bool {
        match &rule.tests {
            TestLocation::Centralized(test_root) => is_within(&self.ops, file, test_root),
            TestLocation::Sibling(segments) => {
                let relative_dir = self.ops.relative(&rule.abs_src_root, &parts.dir);
                let dir_segments = self.style().segments(&relative_dir);
                find_segment_sequence(dir_segments.as_slice(), segments.as_slice(), |a, b| {
                    self.style().segments_eq(a, b)
                })
                .is_some()
            },
        }
    }
}

/// Number of leading components a directory occupies, ignoring the empty tail
/// a bare root (`/`, `C:\`) splits into
fn depth(components: &[String]) -> usize {
    components.iter().rposition(|c| !c.is_empty()).map_or(1, |last| last + 1)
}
