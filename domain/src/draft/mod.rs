//! Draft domain: the suggested reply and the human revision cycle around it.

pub mod entities;
pub mod revision;

pub use entities::DraftState;
pub use revision::{FeedbackCommand, RevisionState};
