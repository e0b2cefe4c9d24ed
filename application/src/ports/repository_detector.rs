//! Repository detection port.
//!
//! Resolves the `owner/repo` of the current working directory when the user
//! did not pass one explicitly.

use async_trait::async_trait;
use gitgen_domain::RepositoryId;
use thiserror::Error;

/// Errors that can occur while detecting the repository.
#[derive(Error, Debug)]
pub enum RepositoryDetectionError {
    /// The detector's tool is not installed (e.g. `gh` missing from PATH)
    #[error("{0} not found in PATH; pass --repo owner/repo instead")]
    NotAvailable(String),

    /// The detector ran but did not produce a repository
    #[error("Could not detect the repository: {0}")]
    DetectionFailed(String),

    /// The detector produced something that is not `owner/repo`
    #[error("Detected an invalid repository identifier '{0}'")]
    Invalid(String),
}

#[async_trait]
pub trait RepositoryDetectorPort: Send + Sync {
    async fn detect(&self) -> Result<RepositoryId, RepositoryDetectionError>;
}

/// Detector that always answers with a fixed repository.
pub struct FixedRepository(pub RepositoryId);

#[async_trait]
impl RepositoryDetectorPort for FixedRepository {
    async fn detect(&self) -> Result<RepositoryId, RepositoryDetectionError> {
        Ok(self.0.clone())
    }
}
