//! Repository detection using the `gh` CLI.
//!
//! Runs `gh repo view --json owner,name -q '.owner.login + "/" + .name'` in
//! the working directory and parses its single line of output.

use async_trait::async_trait;
use gitgen_application::ports::repository_detector::{
    RepositoryDetectionError, RepositoryDetectorPort,
};
use gitgen_domain::RepositoryId;
use tokio::process::Command;
use tracing::{debug, info};

const REPO_QUERY: &str = r#".owner.login + "/" + .name"#;

/// Detects the repository of the current directory through `gh`.
pub struct GhRepositoryDetector {
    program: String,
}

impl GhRepositoryDetector {
    pub fn new() -> Self {
        Self {
            program: "gh".to_string(),
        }
    }

    /// Use a different executable in place of `gh`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn parse_output(stdout: &str) -> Result<RepositoryId, RepositoryDetectionError> {
        let line = stdout.trim();
        line.parse::<RepositoryId>()
            .map_err(|_| RepositoryDetectionError::Invalid(line.to_string()))
    }
}

impl Default for GhRepositoryDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryDetectorPort for GhRepositoryDetector {
    async fn detect(&self) -> Result<RepositoryId, RepositoryDetectionError> {
        if which::which(&self.program).is_err() {
            return Err(RepositoryDetectionError::NotAvailable(self.program.clone()));
        }

        let mut cmd = Command::new(&self.program);
        cmd.args(["repo", "view", "--json", "owner,name", "-q", REPO_QUERY]);

        debug!("Detecting repository with {}", self.program);
        let output = cmd.output().await.map_err(|e| {
            RepositoryDetectionError::DetectionFailed(format!(
                "Failed to execute {}: {}",
                self.program, e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RepositoryDetectionError::DetectionFailed(
                stderr.trim().to_string(),
            ));
        }

        let repository = Self::parse_output(&String::from_utf8_lossy(&output.stdout))?;
        info!(repository = %repository, "Detected repository");
        Ok(repository)
    }
}
