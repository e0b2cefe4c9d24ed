//! Thread content port.
//!
//! Defines how the content of an issue thread is fetched. Infrastructure
//! adapters implement this against the GitHub REST API.

use async_trait::async_trait;

/// Port for fetching an issue thread as one flattened text blob.
///
/// Never fails: a non-success status or a transport problem comes back as a
/// descriptive string (`"Error fetching issue: 404 Not Found"`), because the
/// result is handed to the model as a tool output either way.
#[async_trait]
pub trait ThreadContentPort: Send + Sync {
    async fn fetch(&self, owner: &str, repo: &str, number: u64) -> String;
}
