//! Drafting transcript port.
//!
//! Every prompt gitgen sends, every reply it folds together and every
//! decision the maintainer makes in the revision loop is handed to a
//! [`ConversationLogger`]. The JSONL adapter writes one line per event;
//! `tracing` output stays separate and is meant for diagnostics.
//!
//! | event | payload |
//! |---|---|
//! | [`TURN_PROMPT`] | `session`, `turn`, `visible`, `prompt` |
//! | [`TURN_REPLY`] | `session`, `turn`, `events`, `text` |
//! | [`REVISION_FEEDBACK`] | `round`, `feedback` |
//! | [`DRAFT_ACCEPTED`] | `revisions`, `delivery`, `text` |
//! | [`DRAFT_EXITED`] | `revisions` |

use serde_json::Value;

pub const TURN_PROMPT: &str = "turn_prompt";
pub const TURN_REPLY: &str = "turn_reply";
pub const REVISION_FEEDBACK: &str = "revision_feedback";
pub const DRAFT_ACCEPTED: &str = "draft_accepted";
pub const DRAFT_EXITED: &str = "draft_exited";

/// One transcript entry: a type tag plus its JSON payload.
pub struct ConversationEvent {
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Receives transcript entries as the run produces them.
///
/// Never fails from the caller's point of view: a transcript that cannot be
/// written is the adapter's problem, not a reason to stop drafting.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Used when `[logging] conversation_log` is unset.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
