//! Error types for the OpenAI-compatible adapter

use gitgen_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for OpenAI operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to a chat completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("No API key configured (set {0} or providers.openai.api_key)")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode completion: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Completion contained no choices")]
    EmptyCompletion,

    #[error("Model kept calling tools after {0} rounds")]
    ToolRoundsExceeded(u32),
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::MissingApiKey(_) => GatewayError::Configuration(err.to_string()),
            OpenAiError::Http(e) if e.is_connect() || e.is_timeout() => {
                GatewayError::ConnectionError(e.to_string())
            }
            OpenAiError::Http(e) => GatewayError::Other(e.to_string()),
            OpenAiError::Status { status, body } => GatewayError::RequestFailed {
                status,
                message: body,
            },
            OpenAiError::Decode(_) | OpenAiError::EmptyCompletion => {
                GatewayError::InvalidResponse(err.to_string())
            }
            OpenAiError::ToolRoundsExceeded(_) => GatewayError::SessionError(err.to_string()),
        }
    }
}
