//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.
//!
//! A session is opened once per drafting run with a system prompt and a tool
//! executor; the backend decides on its own when to call tools. Each turn is
//! answered as a stream of [`StreamEvent`]s behind a [`StreamHandle`].

use super::tool_executor::ToolExecutorPort;
use async_trait::async_trait;
use gitgen_domain::{Model, StreamEvent};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with LLM providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Open a session bound to a system prompt and a fixed tool set.
    async fn create_session(
        &self,
        model: &Model,
        system_prompt: &str,
        tools: Arc<dyn ToolExecutorPort>,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// Item carried by a [`StreamHandle`]: an event, or the transport failure
/// that ended the turn early.
pub type StreamItem = Result<StreamEvent, GatewayError>;

/// Handle for receiving the events of one turn.
///
/// Wraps an `mpsc::Receiver` fed by the backend. The turn is over when the
/// channel closes. Dropping the handle cancels the producer so an abandoned
/// turn does not keep talking to the backend.
pub struct StreamHandle {
    receiver: mpsc::Receiver<StreamItem>,
    cancel: CancellationToken,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamItem>) -> Self {
        Self {
            receiver,
            cancel: CancellationToken::new(),
        }
    }

    /// Attach the token the producer watches for cancellation.
    pub fn with_cancellation(receiver: mpsc::Receiver<StreamItem>, cancel: CancellationToken) -> Self {
        Self { receiver, cancel }
    }

    /// A handle over events that are already known.
    pub fn from_events(events: Vec<StreamEvent>) -> Self {
        let (tx, rx) = mpsc::channel(events.len().max(1));
        for event in events {
            // Capacity covers every event, so this never fails
            let _ = tx.try_send(Ok(event));
        }
        Self::new(rx)
    }

    /// Wait for the next event; `None` once the turn has ended.
    pub async fn next(&mut self) -> Option<StreamItem> {
        self.receiver.recv().await
    }

    /// Drain the stream into a vector, stopping at the first transport error.
    pub async fn collect_events(mut self) -> Result<Vec<StreamEvent>, GatewayError> {
        let mut events = Vec::new();
        while let Some(item) = self.next().await {
            events.push(item?);
        }
        Ok(events)
    }
}

impl Drop for StreamHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// An active LLM session
///
/// The session keeps the conversation history, so every turn sees the
/// replies of the turns before it.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a user message and stream back the events of the turn.
    async fn send_streaming(&self, content: &str) -> Result<StreamHandle, GatewayError>;
}
