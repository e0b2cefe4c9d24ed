//! Conversation driver.
//!
//! Owns the single backend session of a drafting run and turns each prompt
//! into one aggregated reply. The stream of a turn is folded event by event
//! with [`ReplyAccumulator`]; visible turns echo the running text through
//! [`PipelineProgress`] as it grows.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, TURN_PROMPT, TURN_REPLY,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use crate::ports::progress::PipelineProgress;
use crate::ports::tool_executor::ToolExecutorPort;
use gitgen_domain::core::string::preview;
use gitgen_domain::{Model, ProtocolViolation, ReplyAccumulator, Session, Turn};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that end a turn.
#[derive(Error, Debug)]
pub enum RunTurnError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Protocol(#[from] ProtocolViolation),
}

/// A long-lived conversation with the model.
///
/// Context accumulates across turns: the backend session keeps the wire
/// history, [`Session`] keeps the transcript of prompts and aggregated replies.
pub struct ConversationDriver {
    session: Box<dyn LlmSession>,
    transcript: Session,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ConversationDriver {
    /// Open a session bound to `system_prompt` and the tools of `tools`.
    pub async fn open(
        gateway: &dyn LlmGateway,
        model: &Model,
        system_prompt: &str,
        tools: Arc<dyn ToolExecutorPort>,
    ) -> Result<Self, GatewayError> {
        let tool_count = tools.tool_spec().len();
        let session = gateway
            .create_session(model, system_prompt, tools)
            .await?;

        let id = format!("gitgen-{}", chrono::Utc::now().format("%Y%m%dT%H%M%S%.3f"));
        info!(session = %id, model = %model, tools = tool_count, "Opened conversation");

        Ok(Self {
            session,
            transcript: Session::with_system_prompt(id, model.clone(), system_prompt),
            conversation_logger: Arc::new(NoConversationLogger),
        })
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn transcript(&self) -> &Session {
        &self.transcript
    }

    pub fn model(&self) -> &Model {
        self.session.model()
    }

    /// Send one prompt and fold the streamed answer into a single reply.
    ///
    /// Any event the fold does not accept aborts the turn. The reply is only
    /// recorded in the transcript when the whole stream was consumed.
    pub async fn run_turn(
        &mut self,
        turn: &Turn,
        progress: &dyn PipelineProgress,
    ) -> Result<String, RunTurnError> {
        progress.on_turn_start(&turn.label, turn.visible);
        debug!(
            turn = %turn.label,
            visible = turn.visible,
            "Sending prompt: {}",
            preview(&turn.prompt, 80)
        );

        self.conversation_logger.log(ConversationEvent::new(
            TURN_PROMPT,
            serde_json::json!({
                "session": self.transcript.id(),
                "turn": turn.label,
                "visible": turn.visible,
                "prompt": turn.prompt,
            }),
        ));

        self.transcript.add_user_message(turn.prompt.clone());
        let mut stream = self.session.send_streaming(&turn.prompt).await?;

        let mut accumulator = ReplyAccumulator::new();
        while let Some(item) = stream.next().await {
            let event = item?;
            let accumulated = match accumulator.apply(&event) {
                Ok(text) => text,
                Err(violation) => {
                    warn!(turn = %turn.label, "{}", violation);
                    return Err(violation.into());
                }
            };
            if turn.visible {
                progress.on_reply_fragment(
                    &turn.label,
                    event.fragment().unwrap_or_default(),
                    accumulated,
                );
            }
        }

        let events = accumulator.event_count();
        let reply = accumulator.into_text();
        info!(
            turn = %turn.label,
            events,
            bytes = reply.len(),
            "Turn complete"
        );

        self.transcript.add_assistant_message(reply.clone());
        progress.on_turn_complete(&turn.label, turn.visible, &reply);

        self.conversation_logger.log(ConversationEvent::new(
            TURN_REPLY,
            serde_json::json!({
                "session": self.transcript.id(),
                "turn": turn.label,
                "events": events,
                "text": reply,
            }),
        ));

        Ok(reply)
    }
}
