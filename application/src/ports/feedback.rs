//! Feedback port for the revision loop.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`FeedbackPort`] - defined here in application layer
//! - **Adapter**: `ConsoleFeedback` - implemented in presentation layer
//!
//! # Flow
//!
//! ```text
//! Draft turn completes
//!        ↓
//! FeedbackPort::request_feedback()   ← raw line, untrimmed
//!        ↓
//! FeedbackCommand::parse()           ← "y" / "exit" / "" / feedback
//!        ↓
//! Accept / Exit / re-prompt / revision turn
//! ```

use async_trait::async_trait;
use gitgen_domain::DraftState;
use thiserror::Error;

/// Error type for feedback collection.
///
/// These are failures to read input, not decisions made by the user.
#[derive(Error, Debug, Clone)]
pub enum FeedbackError {
    /// Input closed (e.g. Ctrl+D or stdin at EOF).
    #[error("Input closed")]
    Closed,

    /// Terminal read failure.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Port for collecting the maintainer's reaction to a draft.
///
/// Implementations return the raw line they read; classification is the
/// revision loop's job.
#[async_trait]
pub trait FeedbackPort: Send + Sync {
    async fn request_feedback(&self, draft: &DraftState) -> Result<String, FeedbackError>;
}
