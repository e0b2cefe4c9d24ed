//! Tool Executor port
//!
//! Defines the interface for executing the tools a session offers the model.

use async_trait::async_trait;
use gitgen_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// This port defines how a backend session executes the tools the model
/// asks for. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Execute a tool call.
    ///
    /// Failures are part of the result, never a panic or an `Err`; the model
    /// sees them as text.
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}

/// Executor with no tools, for sessions that should never call out.
pub struct NoTools {
    spec: ToolSpec,
}

impl NoTools {
    pub fn new() -> Self {
        Self {
            spec: ToolSpec::new(),
        }
    }
}

impl Default for NoTools {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for NoTools {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        ToolResult::failure(
            call.tool_name.clone(),
            gitgen_domain::ToolError::not_found(call.tool_name.clone()),
        )
    }
}
