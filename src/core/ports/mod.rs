//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the resolver workflows and the
//! outside world (the editor shell and the filesystem).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete implementations.
//! This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Drive the same workflow from a terminal or an editor plugin
//! - **Clarity**: Path algebra stays free of I/O

mod editor;
mod file_system;

pub use editor::Editor;
pub use file_system::FileSystem;

#[cfg(test)]
pub use editor::MockEditor;
#[cfg(test)]
pub use file_system::MockFileSystem;
