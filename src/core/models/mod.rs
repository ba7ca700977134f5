//! Domain models for testmapper
//!
//! - [`MappingRule`] - "Sources under here have their tests there"
//! - [`ResolvedRule`] - A rule anchored to a project root

mod mapping;

pub use mapping::{MappingRule, ResolvedRule, TestLocation};
