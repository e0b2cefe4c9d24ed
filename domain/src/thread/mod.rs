//! Thread domain.
//!
//! - [`entities::Thread`]: the issue or PR a session drafts a reply for
//! - [`entities::RepositoryId`]: `owner/repo`
//! - [`content`]: GitHub issue payloads and the flattened text blob

pub mod content;
pub mod entities;

pub use content::{IssueAuthor, IssueComment, IssueSnapshot, format_thread_content};
pub use entities::{RepositoryId, Thread, ThreadKind};
