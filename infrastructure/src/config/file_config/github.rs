//! GitHub API configuration from TOML (`[github]` section)

use super::providers::check_url;
use crate::github::{DEFAULT_API_BASE_URL, GitHubSettings};
use gitgen_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGitHubConfig {
    /// REST endpoint; change for GitHub Enterprise
    pub api_base_url: String,
    /// Environment variable holding an optional token (default: "GITHUB_TOKEN")
    pub token_env: String,
    /// Overrides the default `gitgen/<version>` User-Agent
    pub user_agent: Option<String>,
}

impl Default for FileGitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            user_agent: None,
        }
    }
}

impl FileGitHubConfig {
    pub fn to_settings(&self) -> GitHubSettings {
        self.to_settings_with(|name| std::env::var(name).ok())
    }

    pub fn to_settings_with(&self, lookup: impl Fn(&str) -> Option<String>) -> GitHubSettings {
        let defaults = GitHubSettings::default();
        GitHubSettings {
            api_base_url: self.api_base_url.clone(),
            token: lookup(&self.token_env).filter(|token| !token.is_empty()),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        check_url("github.api_base_url", &self.api_base_url)
            .into_iter()
            .collect()
    }
}
