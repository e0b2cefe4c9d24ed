//! Output configuration from TOML (`[output]` and `[logging]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Copy the accepted draft to the system clipboard
    pub clipboard: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            clipboard: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Append every turn to this JSONL file
    pub conversation_log: Option<PathBuf>,
}
