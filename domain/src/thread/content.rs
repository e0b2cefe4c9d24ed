//! Thread content as returned by the GitHub issues API, and the flattened
//! text blob handed to the model.
//!
//! Every field is optional on the wire: missing or `null` values fall back to
//! placeholder text instead of failing, because the blob is read by a model,
//! not a parser.

use serde::Deserialize;

const UNKNOWN_USER: &str = "Unknown user";
const UNKNOWN_ID: &str = "Unknown ID";
const NO_CONTENT: &str = "No content";

/// Author of an issue or comment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueAuthor {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
}

/// Issue metadata (`GET /repos/{owner}/{repo}/issues/{number}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueSnapshot {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<IssueAuthor>,
}

/// One entry of `GET /repos/{owner}/{repo}/issues/{number}/comments`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueComment {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<IssueAuthor>,
}

impl IssueSnapshot {
    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.login.as_deref())
            .unwrap_or(UNKNOWN_USER)
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or(NO_CONTENT)
    }
}

impl IssueComment {
    /// `login (ID: id): body`
    pub fn render(&self) -> String {
        let login = self
            .user
            .as_ref()
            .and_then(|u| u.login.as_deref())
            .unwrap_or(UNKNOWN_USER);
        let id = self
            .user
            .as_ref()
            .and_then(|u| u.id)
            .map(|id| id.to_string())
            .unwrap_or_else(|| UNKNOWN_ID.to_string());
        let body = self.body.as_deref().unwrap_or(NO_CONTENT);
        format!("{} (ID: {}): {}", login, id, body)
    }
}

/// Flatten an issue and its comments into the text blob fed to the model.
///
/// Comments keep API order and are separated by a blank line.
pub fn format_thread_content(issue: &IssueSnapshot, comments: &[IssueComment]) -> String {
    let comments_content = comments
        .iter()
        .map(IssueComment::render)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Issue Content by {}:\n{}\n\nComments:\n{}",
        issue.author(),
        issue.body(),
        comments_content
    )
}

/// Error blob for a failed metadata read
pub fn issue_fetch_error(status: impl std::fmt::Display) -> String {
    format!("Error fetching issue: {}", status)
}

/// Error blob for a failed comments read
pub fn comments_fetch_error(status: impl std::fmt::Display) -> String {
    format!("Error fetching comments: {}", status)
}
