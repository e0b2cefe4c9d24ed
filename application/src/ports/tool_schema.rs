//! Tool schema conversion port.
//!
//! Separates "which tools to offer" (domain) from "how to serialize for API"
//! (infrastructure). The domain layer defines [`ToolDefinition`] and
//! [`ToolSpec`]; this port handles the JSON Schema conversion that the LLM
//! API requires.

use gitgen_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to LLM API format (JSON Schema).
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to the provider's function schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools to a schema array (sorted by name).
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        spec.all()
            .into_iter()
            .map(|tool| self.tool_to_schema(tool))
            .collect()
    }
}
