//! Path string algebra for POSIX and Windows conventions
//!
//! Every path the resolver touches is a plain string computed under an explicit
//! [`PathStyle`], so both conventions behave identically on any host. The rules
//! follow what editors hand us for workspace files:
//!
//! - `.` segments are dropped and `..` pops the previous segment (never above a root)
//! - repeated and trailing separators collapse
//! - Windows accepts both `\` and `/` on input and always emits `\`
//! - Windows compares roots, segments and suffixes ignoring ASCII case, but
//!   never rewrites the case of an input (a `C:` drive stays `C:`)
//!
//! # Examples
//!
//! ```
//! use testmapper::core::path::PathStyle;
//!
//! let posix = PathStyle::Posix;
//! assert_eq!(posix.join("/workspace", "src/../tests"), "/workspace/tests");
//! assert_eq!(posix.relative("/workspace/src", "/workspace/src/a/b.js"), "a/b.js");
//!
//! let win = PathStyle::Windows;
//! assert_eq!(win.join("c:\\workspace", "/something/__tests__"), "c:\\workspace\\something\\__tests__");
//! assert_eq!(win.relative("c:\\workspace", "C:\\Workspace\\src"), "src");
//! ```

use serde::{Deserialize, Serialize};

/// Separator and case-folding convention used for path computations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `/` separated, case-sensitive
    Posix,
    /// `\` separated (accepting `/`), drive letters, ASCII case-insensitive
    Windows,
}

/// A file path split into directory, stem and extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileParts {
    /// Containing directory
    pub dir: String,
    /// File name without its last extension (`helper.test` for `helper.test.js`)
    pub stem: String,
    /// Last extension including the dot, or empty
    pub ext: String,
}

impl PathStyle {
    /// The style of the host platform
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Posix }
    }

    /// Separator emitted by this style
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates segments on input
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '\\' || c == '/',
        }
    }

    /// Whether paths compare ignoring case
    #[must_use]
    pub const fn is_case_insensitive(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Compare two path segments under this style's case rules
    #[must_use]
    pub fn segments_eq(self, a: &str, b: &str) -> bool {
        if self.is_case_insensitive() { a.eq_ignore_ascii_case(b) } else { a == b }
    }

    /// Strip `suffix` from the end of `s` under this style's case rules
    #[must_use]
    pub fn strip_suffix<'a>(self, s: &'a str, suffix: &str) -> Option<&'a str> {
        let cut = s.len().checked_sub(suffix.len())?;
        if !s.is_char_boundary(cut) {
            return None;
        }
        let (head, tail) = s.split_at(cut);
        self.segments_eq(tail, suffix).then_some(head)
    }

    /// Whether `path` is absolute
    #[must_use]
    pub fn is_absolute(self, path: &str) -> bool {
        match self {
            Self::Posix => path.starts_with('/'),
            Self::Windows => {
                path.starts_with(|c: char| self.is_separator(c))
                    || drive_prefix(path)
                        .is_some_and(|_| path[2..].starts_with(|c: char| self.is_separator(c)))
            },
        }
    }

    /// Split `path` into its (rewritten) root and the remainder
    ///
    /// The root is `/` for absolute POSIX paths, `C:\`, `C:`, `\\server\share\`
    /// or `\` on Windows, and empty for relative paths.
    fn split_root(self, path: &str) -> (String, &str) {
        let trim = |rest: &str| rest.trim_start_matches(|c: char| self.is_separator(c)).len();
        if let Some((root, len)) = self.unc_root(path) {
            let rest = &path[len..];
            return (root, &rest[rest.len() - trim(rest)..]);
        }
        match self {
            Self::Posix => {
                if path.starts_with('/') {
                    let start = path.len() - trim(path);
                    ("/".to_string(), &path[start..])
                } else {
                    (String::new(), path)
                }
            },
            Self::Windows => {
                if let Some(drive) = drive_prefix(path) {
                    let rest = &path[2..];
                    if rest.starts_with(|c: char| self.is_separator(c)) {
                        let start = rest.len() - trim(rest);
                        (format!("{drive}\\"), &rest[start..])
                    } else {
                        (drive.to_string(), rest)
                    }
                } else if path.starts_with(|c: char| self.is_separator(c)) {
                    let start = path.len() - trim(path);
                    ("\\".to_string(), &path[start..])
                } else {
                    (String::new(), path)
                }
            },
        }
    }

    /// `\\server\share\` root of a Windows UNC path and the length it spans
    fn unc_root(self, path: &str) -> Option<(String, usize)> {
        let mut lead = path.chars();
        let doubled = self == Self::Windows
            && lead.next().is_some_and(|c| self.is_separator(c))
            && lead.next().is_some_and(|c| self.is_separator(c));
        if !doubled {
            return None;
        }
        let mut parts = path[2..].splitn(3, |c: char| self.is_separator(c));
        let server = parts.next().filter(|s| !s.is_empty())?;
        let share = parts.next().filter(|s| !s.is_empty())?;
        Some((format!("\\\\{server}\\{share}\\"), 2 + server.len() + 1 + share.len()))
    }

    /// Non-empty, non-`.` segments below the root
    fn raw_segments(self, rest: &str) -> impl Iterator<Item = &str> {
        rest.split(move |c: char| self.is_separator(c)).filter(|s| !s.is_empty() && *s != ".")
    }

    /// Collapse separators and `.`/`..` segments
    #[must_use]
    pub fn normalize(self, path: &str) -> String {
        let (root, rest) = self.split_root(path);
        let rooted = root.ends_with(self.separator());

        let mut segments: Vec<&str> = Vec::new();
        for part in self.raw_segments(rest) {
            if part == ".." {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push(part);
                }
            } else {
                segments.push(part);
            }
        }

        let body = segments.join(&self.separator().to_string());
        match (root.is_empty(), body.is_empty()) {
            (true, true) => ".".to_string(),
            (true, false) => body,
            (false, _) => root + &body,
        }
    }

    /// Join `tail` under `base` and normalize
    ///
    /// A leading separator on `tail` does not make it absolute; it is appended
    /// like any other segment.
    #[must_use]
    pub fn join(self, base: &str, tail: &str) -> String {
        match (base.is_empty(), tail.is_empty()) {
            (true, true) => ".".to_string(),
            (true, false) => self.normalize(tail),
            (false, true) => self.normalize(base),
            (false, false) => self.normalize(&format!("{base}{}{tail}", self.separator())),
        }
    }

    /// Resolve `path` against the absolute `base`
    ///
    /// Absolute inputs are only normalized. A Windows path rooted without a
    /// drive (`\foo`) takes the drive of `base`; UNC paths keep their share.
    #[must_use]
    pub fn resolve(self, base: &str, path: &str) -> String {
        if !self.is_absolute(path) {
            return self.join(base, path);
        }
        if self == Self::Windows && drive_prefix(path).is_none() && self.unc_root(path).is_none() {
            if let Some(drive) = drive_prefix(base) {
                return self.normalize(&format!("{drive}{path}"));
            }
        }
        self.normalize(path)
    }

    /// Relative path leading from `from` to `to`
    ///
    /// Returns an empty string when both name the same location and `to`
    /// unchanged (normalized, still absolute) when the roots differ.
    #[must_use]
    pub fn relative(self, from: &str, to: &str) -> String {
        let from = self.normalize(from);
        let to = self.normalize(to);
        let (from_root, from_rest) = self.split_root(&from);
        let (to_root, to_rest) = self.split_root(&to);

        if !self.segments_eq(&from_root, &to_root) {
            return to;
        }

        let from_segments: Vec<&str> = self.raw_segments(from_rest).collect();
        let to_segments: Vec<&str> = self.raw_segments(to_rest).collect();
        let common = from_segments
            .iter()
            .zip(&to_segments)
            .take_while(|(a, b)| self.segments_eq(a, b))
            .count();

        let ups = std::iter::repeat_n("..", from_segments.len() - common);
        ups.chain(to_segments[common..].iter().copied())
            .collect::<Vec<_>>()
            .join(&self.separator().to_string())
    }

    /// Containing directory of `path`
    #[must_use]
    pub fn dirname(self, path: &str) -> String {
        let normalized = self.normalize(path);
        let (root, rest) = self.split_root(&normalized);
        let segments: Vec<&str> = self.raw_segments(rest).collect();

        match segments.split_last() {
            Some((_, parents)) if !parents.is_empty() => {
                root + &parents.join(&self.separator().to_string())
            },
            _ if root.is_empty() => ".".to_string(),
            _ => root,
        }
    }

    /// Split `path` into directory, stem and extension
    ///
    /// A leading dot belongs to the stem, so `.eslintrc` has no extension.
    #[must_use]
    pub fn parse(self, path: &str) -> FileParts {
        let normalized = self.normalize(path);
        let (_, rest) = self.split_root(&normalized);
        let base = self.raw_segments(rest).last().unwrap_or_default();

        let (stem, ext) = match base.rfind('.') {
            Some(idx) if idx > 0 => base.split_at(idx),
            _ => (base, ""),
        };

        FileParts {
            dir: self.dirname(&normalized),
            stem: stem.to_string(),
            ext: ext.to_string(),
        }
    }

    /// Components of the normalized path, root included
    ///
    /// `/workspace/src` yields `["", "workspace", "src"]`, `C:\workspace`
    /// yields `["C:", "workspace"]` and `\\server\share\ws` yields
    /// `["", "", "server", "share", "ws"]`, so joining them with the separator
    /// gives the path back.
    #[must_use]
    pub fn components(self, path: &str) -> Vec<String> {
        let normalized = self.normalize(path);
        normalized.split(self.separator()).map(str::to_string).collect()
    }

    /// Join components produced by [`PathStyle::components`] back into a path
    ///
    /// A lone empty root component stands for the separator itself, so `[""]`
    /// gives `/` rather than an empty relative path.
    #[must_use]
    pub fn from_components(self, components: &[String]) -> String {
        match components {
            [root] if root.is_empty() => self.separator().to_string(),
            _ => components.join(&self.separator().to_string()),
        }
    }

    /// Segments of a path fragment, ignoring roots and empty or `.` segments
    ///
    /// Used for configured sub-paths such as `something/__tests__`, where a
    /// leading separator carries no meaning.
    #[must_use]
    pub fn segments(self, fragment: &str) -> Vec<String> {
        let normalized = self.normalize(fragment);
        let (_, rest) = self.split_root(&normalized);
        self.raw_segments(rest).map(str::to_string).collect()
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl std::fmt::Display for PathStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// `C:`-style drive prefix of `path`, if any
fn drive_prefix(path: &str) -> Option<&str> {
    let bytes = path.as_bytes();
    (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':').then(|| &path[..2])
}

/// Path operations used by the resolver
///
/// Every method defaults to the behavior of [`PathOps::style`], so an
/// implementation only overrides what it needs to observe. Tests wrap a style
/// to count `join` calls and verify cache hits.
pub trait PathOps {
    /// The style these operations follow
    fn style(&self) -> PathStyle;

    /// See [`PathStyle::join`]
    fn join(&self, base: &str, tail: &str) -> String {
        self.style().join(base, tail)
    }

    /// See [`PathStyle::resolve`]
    fn resolve(&self, base: &str, path: &str) -> String {
        self.style().resolve(base, path)
    }

    /// See [`PathStyle::relative`]
    fn relative(&self, from: &str, to: &str) -> String {
        self.style().relative(from, to)
    }

    /// See [`PathStyle::dirname`]
    fn dirname(&self, path: &str) -> String {
        self.style().dirname(path)
    }

    /// See [`PathStyle::parse`]
    fn parse(&self, path: &str) -> FileParts {
        self.style().parse(path)
    }

    /// See [`PathStyle::components`]
    fn components(&self, path: &str) -> Vec<String> {
        self.style().components(path)
    }
}

impl PathOps for PathStyle {
    fn style(&self) -> PathStyle {
        *self
    }
}
