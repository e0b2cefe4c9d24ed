//! Tool domain module
//!
//! Tools are the capabilities the model may invoke by itself while answering
//! a turn. In a drafting session there is exactly one: fetching the content of
//! an issue thread. The model decides when to call it, the backend session
//! executes it, and the result string comes back to the orchestrator as a
//! tool-result-summary event.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (output)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! - **Domain** (this module): pure definitions and argument validation
//! - **Application** (`ToolExecutorPort`): port trait for tool execution
//! - **Infrastructure** (`ThreadToolExecutor`): executes against the GitHub API

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult};
