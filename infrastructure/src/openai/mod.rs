//! OpenAI-compatible chat completions adapter
//!
//! Implements LlmGateway over `POST {base_url}/chat/completions`.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

pub use error::OpenAiError;
pub use gateway::{DEFAULT_BASE_URL, OpenAiLlmGateway, OpenAiSettings};
pub use session::OpenAiSession;
