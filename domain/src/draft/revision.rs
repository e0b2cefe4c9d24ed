//! Revision state machine
//!
//! ```text
//!                 ┌──────── "" ───────┐
//!                 ▼                   │
//!        ┌──────────────────┐ ────────┘
//!        │ AwaitingFeedback │ ── "y" ────▶ Accepted
//!        └──────────────────┘ ── "exit" ─▶ Exited
//!          │            ▲
//!    other │            │ revision complete
//!          ▼            │
//!        ┌──────────────────┐
//!        │    Revising      │
//!        └──────────────────┘
//! ```
//!
//! Transitions are pure; the application layer performs the side effects
//! (issuing the revision turn, writing to the sink) that each state implies.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

const ACCEPT: &str = "y";
const EXIT: &str = "exit";

/// One line of human input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackCommand {
    /// `y` in any case
    Accept,
    /// `exit` in any case
    Exit,
    /// Nothing but whitespace
    Empty,
    /// Anything else, trimmed but with its original case
    Revise(String),
}

impl FeedbackCommand {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return FeedbackCommand::Empty;
        }
        match trimmed.to_lowercase().as_str() {
            ACCEPT => FeedbackCommand::Accept,
            EXIT => FeedbackCommand::Exit,
            _ => FeedbackCommand::Revise(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FeedbackCommand::Accept => "accept",
            FeedbackCommand::Exit => "exit",
            FeedbackCommand::Empty => "empty",
            FeedbackCommand::Revise(_) => "revise",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "feedback")]
pub enum RevisionState {
    AwaitingFeedback,
    /// A revision turn carrying this feedback is in flight.
    Revising(String),
    Accepted,
    Exited,
}

impl RevisionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevisionState::AwaitingFeedback => "awaiting_feedback",
            RevisionState::Revising(_) => "revising",
            RevisionState::Accepted => "accepted",
            RevisionState::Exited => "exited",
        }
    }

    pub fn on_feedback(self, command: FeedbackCommand) -> Result<Self, DomainError> {
        match (self, command) {
            (RevisionState::AwaitingFeedback, FeedbackCommand::Accept) => {
                Ok(RevisionState::Accepted)
            }
            (RevisionState::AwaitingFeedback, FeedbackCommand::Exit) => Ok(RevisionState::Exited),
            (RevisionState::AwaitingFeedback, FeedbackCommand::Empty) => {
                Ok(RevisionState::AwaitingFeedback)
            }
            (RevisionState::AwaitingFeedback, FeedbackCommand::Revise(feedback)) => {
                Ok(RevisionState::Revising(feedback))
            }
            (state, command) => Err(DomainError::InvalidTransition {
                state: state.as_str().to_string(),
                event: command.as_str().to_string(),
            }),
        }
    }

    pub fn on_revision_complete(self) -> Result<Self, DomainError> {
        match self {
            RevisionState::Revising(_) => Ok(RevisionState::AwaitingFeedback),
            state => Err(DomainError::InvalidTransition {
                state: state.as_str().to_string(),
                event: "revision_complete".to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RevisionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
