//! Presentation layer for debate-arena
//!
//! This crate contains CLI definitions, the console formatter for final
//! results, and the console progress reporter.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, StyleArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleProgress;
