//! Presentation layer for gitgen
//!
//! This crate contains the CLI definition, terminal feedback input,
//! progress reporting and the clipboard sink.

pub mod cli;
pub mod feedback;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, ThreadKindArg};
pub use feedback::console::ConsoleFeedback;
pub use output::clipboard::ClipboardSink;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleProgress;
