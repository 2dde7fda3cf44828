// Rust guideline compliant 2026-10-18

//! jira-util CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod context;
pub mod logging;
pub mod output;
pub mod progress;
pub mod terminal;

pub use context::{GlobalOptions, Session};
pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;
