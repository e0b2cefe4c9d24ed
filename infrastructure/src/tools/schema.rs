//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing the `tools` entries
//! of an OpenAI-compatible chat completions request.

use gitgen_application::ports::tool_schema::ToolSchemaPort;
use gitgen_domain::tool::entities::ToolDefinition;

/// Converts tool definitions into `{"type": "function", "function": {...}}`.
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": param.param_type.as_str(),
                    "description": param.description,
                }),
            );

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }
}
