//! Containment checks between paths and path segment sequences
//!
//! Pure functions with no I/O. Separator and case rules come in through the
//! [`PathOps`] implementation or an explicit segment comparison, so the same
//! logic runs under both path styles.

use crate::core::path::PathOps;

/// Check if `file` is `dir` itself or lies somewhere below it
///
/// Both paths are expected to be absolute. The check goes through the relative
/// path from `dir` to `file`: it must be empty, or neither climb out with `..`
/// nor be absolute (which is what a different drive or volume produces).
pub fn is_within(ops: &impl PathOps, file: &str, dir: &str) -> bool {
    if file.is_empty() || dir.is_empty() {
        return false;
    }

    let style = ops.style();
    let relative = ops.relative(dir, file);
    if relative.is_empty() {
        return true;
    }

    let climbs_out = relative.split(style.separator()).next() == Some("..");
    !climbs_out && !style.is_absolute(&relative)
}

/// Find where `needle` occurs as a contiguous run inside `haystack`
///
/// Returns the index of the first segment of the earliest occurrence. An empty
/// needle never matches: a configured sub-path with no segments names no
/// directory to look for.
pub fn find_segment_sequence<S, F>(haystack: &[S], needle: &[S], eq: F) -> Option<usize>
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> bool,
{
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    haystack.windows(needle.len()).position(|window| {
        window.iter().zip(needle).all(|(a, b)| eq(a.as_ref(), b.as_ref()))
    })
}
