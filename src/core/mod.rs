//! Core domain logic for testmapper
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `path` - Path algebra under POSIX or Windows rules
//! - `models/` - Domain types (`MappingRule`, `ResolvedRule`)
//! - `services/` - Resolution, caching and the open workflows
//! - `ports/` - Trait definitions for the editor and the filesystem

pub mod models;
pub mod path;
pub mod ports;
pub mod services;
