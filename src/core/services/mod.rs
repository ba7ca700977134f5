//! Business logic services
//!
//! - [`resolver`] - Map source files to test files and back
//! - [`navigator`] - Open the mapped file through the editor
//! - [`containment`] - Path and segment containment checks
//! - [`cache`] - Memoization of lookups

pub mod cache;
pub mod containment;
pub mod navigator;
pub mod resolver;

pub use containment::{find_segment_sequence, is_within};
pub use navigator::{Direction, Navigator, OpenOutcome, Step};
pub use resolver::PathResolver;
