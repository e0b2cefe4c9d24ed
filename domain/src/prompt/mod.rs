//! Prompt domain
//!
//! Templates for the system prompt and for each turn of the drafting flow.

mod template;

pub use template::ReplyPromptTemplate;
