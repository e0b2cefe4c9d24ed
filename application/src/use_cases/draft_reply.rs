//! Draft Reply use case.
//!
//! Runs the fixed four-turn pipeline over one conversation:
//!
//! ```text
//! Fetch ──▶ Analyze ──▶ Summarize ──▶ Draft ──▶ (RevisionLoop)
//! ```
//!
//! Transitions are unconditional. Fetch and Analyze replies only feed the
//! session context; the Summarize reply is shown; the Draft reply becomes the
//! initial [`DraftState`].

use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::PipelineProgress;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::use_cases::conversation::{ConversationDriver, RunTurnError};
use gitgen_domain::{
    DomainError, DraftState, Model, ReplyPromptTemplate, Stage, StageVisibility, Thread, Turn,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while drafting.
#[derive(Error, Debug)]
pub enum DraftReplyError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Failed to open session: {0}")]
    SessionOpen(#[from] GatewayError),

    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: RunTurnError,
    },
}

/// Input for the [`DraftReplyUseCase`].
#[derive(Debug, Clone)]
pub struct DraftReplyInput {
    pub thread: Thread,
    pub model: Model,
    pub visibility: StageVisibility,
}

impl DraftReplyInput {
    pub fn new(thread: Thread, model: Model) -> Self {
        Self {
            thread,
            model,
            visibility: StageVisibility::default(),
        }
    }

    pub fn with_visibility(mut self, visibility: StageVisibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Result of the pipeline: the open conversation and its first draft.
///
/// The conversation is handed on so revision turns share its context.
pub struct DraftReplyOutput {
    pub conversation: ConversationDriver,
    pub summary: String,
    pub draft: DraftState,
}

/// Use case for drafting the first reply to a thread.
pub struct DraftReplyUseCase {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DraftReplyUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, tool_executor: Arc<dyn ToolExecutorPort>) -> Self {
        Self {
            gateway,
            tool_executor,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(
        &self,
        input: DraftReplyInput,
        progress: &dyn PipelineProgress,
    ) -> Result<DraftReplyOutput, DraftReplyError> {
        input.thread.kind().ensure_supported()?;
        info!(thread = %input.thread, model = %input.model, "Drafting reply");

        let mut conversation = ConversationDriver::open(
            self.gateway.as_ref(),
            &input.model,
            ReplyPromptTemplate::system(),
            self.tool_executor.clone(),
        )
        .await?
        .with_conversation_logger(self.conversation_logger.clone());

        let mut summary = String::new();
        let mut draft = String::new();

        for stage in Stage::ALL {
            let turn = Turn::stage(
                stage,
                ReplyPromptTemplate::for_stage(stage, &input.thread),
                &input.visibility,
            );
            let reply = conversation
                .run_turn(&turn, progress)
                .await
                .map_err(|source| DraftReplyError::Stage { stage, source })?;

            match stage {
                Stage::Fetch | Stage::Analyze => {}
                Stage::Summarize => summary = reply,
                Stage::Draft => draft = reply,
            }
        }

        info!(bytes = draft.len(), "Initial draft ready");

        Ok(DraftReplyOutput {
            conversation,
            summary,
            draft: DraftState::initial(draft),
        })
    }
}
