//! GitHub REST thread fetcher.
//!
//! Reads an issue and its comments with two plain `GET`s and flattens them
//! into the text blob the model works from. Any failure is folded into that
//! blob as an error string; nothing here returns `Err`.

use async_trait::async_trait;
use gitgen_application::ports::thread_content::ThreadContentPort;
use gitgen_domain::thread::content::{
    IssueComment, IssueSnapshot, comments_fetch_error, format_thread_content, issue_fetch_error,
};
use reqwest::StatusCode;
use tracing::{debug, info, warn};

/// Default GitHub API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Connection settings for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubSettings {
    pub api_base_url: String,
    /// Sent as `Authorization: Bearer` when present
    pub token: Option<String>,
    /// GitHub rejects requests without a User-Agent
    pub user_agent: String,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            user_agent: format!("gitgen/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Fetches issue threads over the GitHub REST API.
pub struct GitHubContentFetcher {
    client: reqwest::Client,
    settings: GitHubSettings,
}

impl GitHubContentFetcher {
    pub fn new(settings: GitHubSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.api_base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.settings.user_agent)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.settings.token {
            request = request.bearer_auth(token);
        }
        request.send().await
    }

    async fn fetch_issue(&self, base: &str) -> Result<IssueSnapshot, String> {
        let response = self.get(base).await.map_err(issue_fetch_error)?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Issue request failed");
            return Err(issue_fetch_error(status.as_u16()));
        }
        response
            .json::<IssueSnapshot>()
            .await
            .map_err(issue_fetch_error)
    }

    async fn fetch_comments(&self, base: &str) -> Result<Vec<IssueComment>, String> {
        let url = format!("{}/comments", base);
        let response = self.get(&url).await.map_err(comments_fetch_error)?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Comments request failed");
            return Err(comments_fetch_error(status.as_u16()));
        }
        response
            .json::<Vec<IssueComment>>()
            .await
            .map_err(comments_fetch_error)
    }
}

#[async_trait]
impl ThreadContentPort for GitHubContentFetcher {
    async fn fetch(&self, owner: &str, repo: &str, number: u64) -> String {
        let base = self.url(&format!("/repos/{}/{}/issues/{}", owner, repo, number));
        debug!("Fetching {}", base);

        let issue = match self.fetch_issue(&base).await {
            Ok(issue) => issue,
            Err(message) => return message,
        };
        // First page only
        let comments = match self.fetch_comments(&base).await {
            Ok(comments) => comments,
            Err(message) => return message,
        };

        info!(
            owner,
            repo,
            number,
            comments = comments.len(),
            "Fetched issue thread"
        );
        format_thread_content(&issue, &comments)
    }
}
