//! LLM Session domain.
//!
//! - [`entities::Session`]: the conversation of one drafting run
//! - [`entities::Message`]: a single message within a session
//! - [`stream::StreamEvent`]: one event of a streamed turn
//! - [`reply::ReplyAccumulator`]: fold of a turn's events into the reply

pub mod entities;
pub mod reply;
pub mod stream;
