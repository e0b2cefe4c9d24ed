//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod conversation;
pub mod draft_reply;
pub mod revise_reply;

#[cfg(test)]
pub(crate) mod test_support;
