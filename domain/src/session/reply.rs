//! Reduction of one turn's event sequence into a single reply.
//!
//! [`ReplyAccumulator`] is a left fold over [`StreamEvent`]s: recognized
//! fragments are appended in arrival order, anything else stops the fold with
//! a [`ProtocolViolation`]. The async consumer in the application layer drives
//! it one event at a time; [`reduce`] folds an already collected sequence.

use super::stream::StreamEvent;
use thiserror::Error;

/// The backend emitted an event kind the fold does not accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unexpected message type '{kind}' at event {position}")]
pub struct ProtocolViolation {
    /// Tag of the offending event.
    pub kind: String,
    /// Zero-based position of the event within the turn.
    pub position: usize,
}

/// Running state of the fold for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyAccumulator {
    text: String,
    events: usize,
}

impl ReplyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event in and return the accumulated text so far.
    pub fn apply(&mut self, event: &StreamEvent) -> Result<&str, ProtocolViolation> {
        let position = self.events;
        match event {
            StreamEvent::PlainText(fragment) | StreamEvent::ToolResultSummary(fragment) => {
                self.text.push_str(fragment);
                self.events += 1;
                Ok(&self.text)
            }
            StreamEvent::Unrecognized { kind } => Err(ProtocolViolation {
                kind: kind.clone(),
                position,
            }),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of events folded in so far.
    pub fn event_count(&self) -> usize {
        self.events
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Fold a complete event sequence into the final reply.
pub fn reduce<'a>(
    events: impl IntoIterator<Item = &'a StreamEvent>,
) -> Result<String, ProtocolViolation> {
    let mut acc = ReplyAccumulator::new();
    for event in events {
        acc.apply(event)?;
    }
    Ok(acc.into_text())
}
