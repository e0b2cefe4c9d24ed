//! Configuration file loading for gitgen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GITGEN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./gitgen.toml` or `./.gitgen.toml`
//! 4. Global: `$XDG_CONFIG_HOME/gitgen/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGitHubConfig, FileLoggingConfig, FileModelConfig, FileOpenAiConfig,
    FileOutputConfig, FilePipelineConfig, FileProvidersConfig,
};
pub use loader::ConfigLoader;
