//! Thread tool executor: the concrete implementation of [`ToolExecutorPort`].
//!
//! Offers the model a single tool, `get_github_issue_content`, backed by a
//! [`ThreadContentPort`]. The call is validated against its definition first;
//! a bad call becomes an error result the model can read and correct.

use async_trait::async_trait;
use gitgen_application::ports::thread_content::ThreadContentPort;
use gitgen_application::ports::tool_executor::ToolExecutorPort;
use gitgen_domain::tool::{
    entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Tool name constant
pub const GET_GITHUB_ISSUE_CONTENT: &str = "get_github_issue_content";

/// Get the tool definition for get_github_issue_content
pub fn issue_content_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_GITHUB_ISSUE_CONTENT,
        "Fetch the body and all comments of a GitHub issue as plain text.",
    )
    .with_parameter(ToolParameter::new(
        "owner",
        "Owner of the repository (user or organization)",
        true,
    ))
    .with_parameter(ToolParameter::new("repo", "Name of the repository", true))
    .with_parameter(
        ToolParameter::new("issue_number", "Number of the issue", true)
            .with_type(ParamType::Integer),
    )
}

/// Executor for the thread-fetching tool.
pub struct ThreadToolExecutor {
    tool_spec: ToolSpec,
    fetcher: Arc<dyn ThreadContentPort>,
}

impl ThreadToolExecutor {
    pub fn new(fetcher: Arc<dyn ThreadContentPort>) -> Self {
        Self {
            tool_spec: ToolSpec::new().register(issue_content_definition()),
            fetcher,
        }
    }

    async fn execute_issue_content(&self, call: &ToolCall) -> ToolResult {
        let args = call.require_string("owner").and_then(|owner| {
            let repo = call.require_string("repo")?;
            let number = call.require_u64("issue_number")?;
            Ok((owner, repo, number))
        });
        let (owner, repo, number) = match args {
            Ok(args) => args,
            Err(e) => {
                return ToolResult::failure(GET_GITHUB_ISSUE_CONTENT, ToolError::invalid_argument(e));
            }
        };

        let start = Instant::now();
        let content = self.fetcher.fetch(owner, repo, number).await;
        ToolResult::success(GET_GITHUB_ISSUE_CONTENT, content)
            .with_duration(start.elapsed().as_millis() as u64)
    }
}

#[async_trait]
impl ToolExecutorPort for ThreadToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(definition) = self.tool_spec.get(&call.tool_name) else {
            warn!("Model requested unknown tool '{}'", call.tool_name);
            return ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name));
        };

        if let Err(e) = DefaultToolValidator.validate(call, definition) {
            warn!("Rejected call to '{}': {}", call.tool_name, e);
            return ToolResult::failure(&call.tool_name, e);
        }

        debug!(tool = %call.tool_name, "Executing tool");
        match call.tool_name.as_str() {
            GET_GITHUB_ISSUE_CONTENT => self.execute_issue_content(call).await,
            _ => ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed(format!(
                    "Tool '{}' is not implemented",
                    call.tool_name
                )),
            ),
        }
    }
}
