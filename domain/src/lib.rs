//! Domain layer for gitgen
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Thread
//!
//! The GitHub issue (or pull request) a reply is drafted for, together with
//! the flattened text the model reads it through.
//!
//! ## Pipeline
//!
//! Four fixed turns in one conversation: **Fetch** → **Analyze** →
//! **Summarize** → **Draft**. Each turn's streamed events are folded into a
//! single reply by the [`ReplyAccumulator`].
//!
//! ## Revision
//!
//! After the draft, the maintainer accepts it (`y`), leaves (`exit`), or gives
//! feedback that produces a revised [`DraftState`]. The cycle is the pure
//! [`RevisionState`] machine.

pub mod config;
pub mod core;
pub mod draft;
pub mod pipeline;
pub mod prompt;
pub mod session;
pub mod thread;
pub mod tool;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, model::Model};
pub use draft::{DraftState, FeedbackCommand, RevisionState};
pub use pipeline::{Stage, StageVisibility, Turn, TurnLabel};
pub use prompt::ReplyPromptTemplate;
pub use session::{
    entities::{Message, Role, Session},
    reply::{ProtocolViolation, ReplyAccumulator, reduce},
    stream::StreamEvent,
};
pub use thread::{
    IssueAuthor, IssueComment, IssueSnapshot, RepositoryId, Thread, ThreadKind,
    format_thread_content,
};
pub use tool::{
    DefaultToolValidator, ParamType, ToolCall, ToolDefinition, ToolError, ToolParameter,
    ToolResult, ToolSpec, ToolValidator,
};
