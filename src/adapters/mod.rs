//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `fs/` - Local filesystem
//! - `terminal/` - Line-based prompts standing in for an editor shell

pub mod fs;
pub mod terminal;

pub use fs::LocalFileSystem;
pub use terminal::TerminalEditor;
