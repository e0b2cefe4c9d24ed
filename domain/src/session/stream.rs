//! Streaming events for LLM session communication.
//!
//! [`StreamEvent`] is one message produced by the backend while it works on a
//! single turn. A turn yields a finite, ordered sequence of them; the end of
//! the turn is the end of the sequence, not a dedicated event.
//!
//! # Event kinds
//!
//! - [`PlainText`](StreamEvent::PlainText): text the model wrote
//! - [`ToolResultSummary`](StreamEvent::ToolResultSummary): the string a tool
//!   returned after the model invoked it on its own
//! - [`Unrecognized`](StreamEvent::Unrecognized): a message kind the backend
//!   could not map onto the two above; consumers must treat it as a protocol
//!   violation instead of skipping it

/// An event in a streaming LLM response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Text produced by the model.
    PlainText(String),
    /// Summary of a tool invocation (the tool's return value).
    ToolResultSummary(String),
    /// A message of a kind the orchestration core does not understand.
    Unrecognized {
        /// Backend-specific name of the message kind (e.g. a finish reason).
        kind: String,
    },
}

impl StreamEvent {
    /// Tag name used in diagnostics and transcripts.
    pub fn kind(&self) -> &str {
        match self {
            StreamEvent::PlainText(_) => "text",
            StreamEvent::ToolResultSummary(_) => "tool_result_summary",
            StreamEvent::Unrecognized { kind } => kind,
        }
    }

    /// Returns the content fragment for recognized events.
    pub fn fragment(&self) -> Option<&str> {
        match self {
            StreamEvent::PlainText(s) | StreamEvent::ToolResultSummary(s) => Some(s),
            StreamEvent::Unrecognized { .. } => None,
        }
    }
}
