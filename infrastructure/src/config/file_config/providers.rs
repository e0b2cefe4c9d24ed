//! Provider configuration from TOML (`[providers]` section)

use crate::openai::{DEFAULT_BASE_URL, OpenAiSettings};
use gitgen_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// OpenAI-compatible API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; the environment variable is preferred.
    pub api_key: Option<String>,
    /// Base URL, up to and including the version segment.
    pub base_url: String,
    /// Max tokens per response; the endpoint default when unset.
    pub max_tokens: Option<u32>,
    /// Ask the model again after tool calls instead of returning the tool output.
    pub reflect_on_tool_use: bool,
    /// Upper bound on tool rounds per turn when reflecting.
    pub max_tool_rounds: u32,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        let settings = OpenAiSettings::default();
        Self {
            api_key_env: settings.api_key_env,
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: None,
            reflect_on_tool_use: settings.reflect_on_tool_use,
            max_tool_rounds: settings.max_tool_rounds,
        }
    }
}

impl FileOpenAiConfig {
    /// Resolve into gateway settings, reading the key from the environment
    /// variable named by `api_key_env` before falling back to `api_key`.
    pub fn to_settings(&self) -> OpenAiSettings {
        self.to_settings_with(|name| std::env::var(name).ok())
    }

    pub fn to_settings_with(&self, lookup: impl Fn(&str) -> Option<String>) -> OpenAiSettings {
        let api_key = lookup(&self.api_key_env)
            .filter(|key| !key.is_empty())
            .or_else(|| self.api_key.clone());
        OpenAiSettings {
            base_url: self.base_url.clone(),
            api_key,
            api_key_env: self.api_key_env.clone(),
            max_tokens: self.max_tokens,
            reflect_on_tool_use: self.reflect_on_tool_use,
            max_tool_rounds: self.max_tool_rounds,
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if let Some(issue) = check_url("providers.openai.base_url", &self.base_url) {
            issues.push(issue);
        }
        if self.max_tokens == Some(0) {
            issues.push(zero_limit("providers.openai.max_tokens"));
        }
        if self.reflect_on_tool_use && self.max_tool_rounds == 0 {
            issues.push(zero_limit("providers.openai.max_tool_rounds"));
        }
        issues
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI-compatible API settings.
    pub openai: FileOpenAiConfig,
}

pub(super) fn check_url(field: &str, value: &str) -> Option<ConfigIssue> {
    if value.starts_with("http://") || value.starts_with("https://") {
        return None;
    }
    Some(ConfigIssue::error(
        ConfigIssueCode::InvalidUrl {
            field: field.to_string(),
            value: value.to_string(),
        },
        format!("{}: '{}' is not an http(s) URL", field, value),
    ))
}

fn zero_limit(field: &str) -> ConfigIssue {
    ConfigIssue::warning(
        ConfigIssueCode::ZeroLimit {
            field: field.to_string(),
        },
        format!("{}: 0 disables every response", field),
    )
}
