//! Wire types for the chat completions API.
//!
//! Only the fields gitgen reads or writes are modelled; unknown response
//! fields are ignored by serde.

use gitgen_domain::Model;
use serde::{Deserialize, Serialize};

/// One entry of the `messages` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCallPayload>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    fn plain(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::plain("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::plain("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::plain("assistant", content)
    }

    /// Result of one tool call, answering the call with the same id
    pub fn tool(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: Some(call_id.into()),
            ..Self::plain("tool", content)
        }
    }

    /// Text content, treating an empty string as absent
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    pub fn requested_tools(&self) -> &[ToolCallPayload] {
        self.tool_calls.as_deref().unwrap_or(&[])
    }
}

/// A function call requested by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallPayload {
    pub id: String,
    #[serde(rename = "type", default = "function_kind")]
    pub kind: String,
    pub function: FunctionCall,
}

fn function_kind() -> String {
    "function".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON object encoded as a string
    #[serde(default)]
    pub arguments: String,
}

/// Request body for `POST {base_url}/chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "no_tools")]
    pub tools: &'a [serde_json::Value],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Token cap for reasoning models, which reject `max_tokens`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
}

impl<'a> ChatRequest<'a> {
    /// Build a request, putting the token cap in the field `model` accepts
    pub fn new(
        model: &'a Model,
        messages: &'a [ChatMessage],
        tools: &'a [serde_json::Value],
        token_limit: Option<u32>,
    ) -> Self {
        let (max_tokens, max_completion_tokens) = if model.is_reasoning() {
            (None, token_limit)
        } else {
            (token_limit, None)
        };
        Self {
            model: model.as_str(),
            messages,
            tools,
            max_tokens,
            max_completion_tokens,
        }
    }
}

fn no_tools(tools: &&[serde_json::Value]) -> bool {
    tools.is_empty()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}
