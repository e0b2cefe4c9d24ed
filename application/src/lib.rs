//! Application layer for gitgen
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    feedback::{FeedbackError, FeedbackPort},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, StreamHandle, StreamItem},
    progress::{NoProgress, PipelineProgress},
    reply_sink::{Delivery, PrintOnlySink, ReplySinkPort, SinkError},
    repository_detector::{FixedRepository, RepositoryDetectionError, RepositoryDetectorPort},
    thread_content::ThreadContentPort,
    tool_executor::{NoTools, ToolExecutorPort},
    tool_schema::ToolSchemaPort,
};
pub use use_cases::conversation::{ConversationDriver, RunTurnError};
pub use use_cases::draft_reply::{
    DraftReplyError, DraftReplyInput, DraftReplyOutput, DraftReplyUseCase,
};
pub use use_cases::revise_reply::{RevisionError, RevisionLoop, RevisionOutcome};
