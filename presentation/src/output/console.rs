//! Console formatting for run banners and configuration issues

use colored::Colorize;
use gitgen_domain::{ConfigIssue, Severity, Thread};

/// Formats the non-streamed console lines
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off (or back to terminal detection) for all output
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// `Processing: issue #42 for octo/hello`
    pub fn banner(thread: &Thread) -> String {
        format!(
            "{} {} #{} for {}",
            "Processing:".cyan().bold(),
            thread.kind(),
            thread.number(),
            thread.repository()
        )
    }

    pub fn config_issue(issue: &ConfigIssue) -> String {
        let label = match issue.severity {
            Severity::Error => "error:".red().bold(),
            Severity::Warning => "warning:".yellow().bold(),
        };
        format!("{} {}", label, issue.message)
    }

    pub fn error(message: impl std::fmt::Display) -> String {
        format!("{} {}", "error:".red().bold(), message)
    }
}
