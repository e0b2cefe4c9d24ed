//! Revision loop use case.
//!
//! Drives [`RevisionState`] with the maintainer's input until they accept the
//! draft (`y`) or leave (`exit`). Any other non-empty line becomes one
//! revision turn on the same conversation. The loop has no round limit.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, DRAFT_ACCEPTED, DRAFT_EXITED, REVISION_FEEDBACK,
};
use crate::ports::feedback::{FeedbackError, FeedbackPort};
use crate::ports::progress::PipelineProgress;
use crate::ports::reply_sink::{Delivery, ReplySinkPort};
use crate::use_cases::conversation::{ConversationDriver, RunTurnError};
use gitgen_domain::{
    DomainError, DraftState, FeedbackCommand, ReplyPromptTemplate, RevisionState, Turn,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum RevisionError {
    #[error("Failed to read feedback: {0}")]
    Feedback(#[from] FeedbackError),

    #[error("Revision turn failed: {0}")]
    Turn(#[from] RunTurnError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// How the loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionOutcome {
    /// The draft was accepted.
    Accepted { draft: DraftState, delivery: Delivery },
    /// The maintainer left; nothing was delivered.
    Exited { draft: DraftState },
}

impl RevisionOutcome {
    pub fn draft(&self) -> &DraftState {
        match self {
            RevisionOutcome::Accepted { draft, .. } | RevisionOutcome::Exited { draft } => draft,
        }
    }
}

/// Use case for the human-in-the-loop revision cycle.
pub struct RevisionLoop {
    feedback: Arc<dyn FeedbackPort>,
    sink: Arc<dyn ReplySinkPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RevisionLoop {
    pub fn new(feedback: Arc<dyn FeedbackPort>, sink: Arc<dyn ReplySinkPort>) -> Self {
        Self {
            feedback,
            sink,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn run(
        &self,
        conversation: &mut ConversationDriver,
        draft: DraftState,
        progress: &dyn PipelineProgress,
    ) -> Result<RevisionOutcome, RevisionError> {
        let mut draft = draft;
        let mut state = RevisionState::AwaitingFeedback;

        loop {
            let line = self.feedback.request_feedback(&draft).await?;
            let command = FeedbackCommand::parse(&line);
            debug!(command = command.as_str(), "Feedback received");

            state = match state.on_feedback(command)? {
                RevisionState::AwaitingFeedback => RevisionState::AwaitingFeedback,
                RevisionState::Revising(feedback) => {
                    let round = draft.revision_count() + 1;
                    self.conversation_logger.log(ConversationEvent::new(
                        REVISION_FEEDBACK,
                        serde_json::json!({
                            "round": round,
                            "feedback": feedback,
                        }),
                    ));

                    let turn = Turn::revision(round, ReplyPromptTemplate::revise(&feedback));
                    let reply = conversation.run_turn(&turn, progress).await?;
                    draft = draft.revised(reply);
                    info!(round, "Draft revised");

                    RevisionState::Revising(feedback).on_revision_complete()?
                }
                RevisionState::Accepted => {
                    let delivery = if !self.sink.is_enabled() {
                        Delivery::PrintOnly
                    } else {
                        match self.sink.deliver(draft.text()) {
                            Ok(()) => Delivery::Delivered,
                            Err(e) => {
                                warn!("Could not deliver the accepted reply: {}", e);
                                Delivery::Failed
                            }
                        }
                    };
                    info!(
                        revisions = draft.revision_count(),
                        delivery = delivery.as_str(),
                        "Draft accepted"
                    );
                    self.conversation_logger.log(ConversationEvent::new(
                        DRAFT_ACCEPTED,
                        serde_json::json!({
                            "revisions": draft.revision_count(),
                            "delivery": delivery.as_str(),
                            "text": draft.text(),
                        }),
                    ));
                    progress.on_accepted(&draft, delivery);
                    return Ok(RevisionOutcome::Accepted { draft, delivery });
                }
                RevisionState::Exited => {
                    info!(revisions = draft.revision_count(), "Revision loop exited");
                    self.conversation_logger.log(ConversationEvent::new(
                        DRAFT_EXITED,
                        serde_json::json!({ "revisions": draft.revision_count() }),
                    ));
                    progress.on_exit();
                    return Ok(RevisionOutcome::Exited { draft });
                }
            };
        }
    }
}
