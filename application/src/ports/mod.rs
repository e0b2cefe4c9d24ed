//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod conversation_logger;
pub mod feedback;
pub mod llm_gateway;
pub mod progress;
pub mod reply_sink;
pub mod repository_detector;
pub mod thread_content;
pub mod tool_executor;
pub mod tool_schema;
