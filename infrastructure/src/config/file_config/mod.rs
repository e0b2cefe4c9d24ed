//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into adapter settings and
//! domain types on demand.

mod github;
mod model;
mod output;
mod pipeline;
mod providers;

pub use github::FileGitHubConfig;
pub use model::FileModelConfig;
pub use output::{FileLoggingConfig, FileOutputConfig};
pub use pipeline::FilePipelineConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};

use gitgen_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub model: FileModelConfig,
    /// LLM endpoint settings
    pub providers: FileProvidersConfig,
    pub github: FileGitHubConfig,
    /// Per-stage visibility
    pub pipeline: FilePipelineConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.model.parse_model().1);
        issues.extend(self.providers.openai.validate());
        issues.extend(self.github.validate());
        issues.extend(self.pipeline.validate());
        issues
    }
}
