//! Infrastructure layer for gitgen
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod github;
pub mod logging;
pub mod openai;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use github::{GhRepositoryDetector, GitHubContentFetcher, GitHubSettings};
pub use logging::JsonlConversationLogger;
pub use openai::{OpenAiError, OpenAiLlmGateway, OpenAiSession, OpenAiSettings};
pub use tools::{JsonSchemaToolConverter, ThreadToolExecutor};
