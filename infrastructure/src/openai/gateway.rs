//! OpenAI-compatible LLM Gateway implementation

use super::error::{OpenAiError, Result};
use super::session::OpenAiSession;
use async_trait::async_trait;
use gitgen_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use gitgen_application::ports::tool_executor::ToolExecutorPort;
use gitgen_domain::Model;
use std::sync::Arc;
use tracing::info;

/// Default chat completions base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Settings shared by every session of one gateway
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Named in the error when no key is configured
    pub api_key_env: String,
    pub max_tokens: Option<u32>,
    /// Keep asking the model after tool calls until it answers in text
    pub reflect_on_tool_use: bool,
    pub max_tool_rounds: u32,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            max_tokens: None,
            reflect_on_tool_use: false,
            max_tool_rounds: 5,
        }
    }
}

/// LLM Gateway for any endpoint speaking the chat completions protocol
pub struct OpenAiLlmGateway {
    client: reqwest::Client,
    settings: Arc<OpenAiSettings>,
    api_key: String,
}

impl std::fmt::Debug for OpenAiLlmGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiLlmGateway")
            .field("base_url", &self.settings.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiLlmGateway {
    /// Create a gateway; fails when no API key is configured.
    pub fn new(settings: OpenAiSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| OpenAiError::MissingApiKey(settings.api_key_env.clone()))?;

        info!(base_url = %settings.base_url, "OpenAiLlmGateway initialized");

        Ok(Self {
            client: reqwest::Client::new(),
            settings: Arc::new(settings),
            api_key,
        })
    }
}

#[async_trait]
impl LlmGateway for OpenAiLlmGateway {
    async fn create_session(
        &self,
        model: &Model,
        system_prompt: &str,
        tools: Arc<dyn ToolExecutorPort>,
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        let session = OpenAiSession::new(
            self.client.clone(),
            Arc::clone(&self.settings),
            self.api_key.clone(),
            model.clone(),
            system_prompt,
            tools,
        );
        Ok(Box::new(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_rejected() {
        let err = OpenAiLlmGateway::new(OpenAiSettings::default()).unwrap_err();
        assert!(matches!(err, OpenAiError::MissingApiKey(ref env) if env == "OPENAI_API_KEY"));
        assert!(matches!(
            GatewayError::from(err),
            GatewayError::Configuration(_)
        ));
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let settings = OpenAiSettings {
            api_key: Some("  ".to_string()),
            ..OpenAiSettings::default()
        };
        assert!(OpenAiLlmGateway::new(settings).is_err());
    }

    #[test]
    fn test_accepts_configured_key() {
        let settings = OpenAiSettings {
            api_key: Some("sk-test".to_string()),
            ..OpenAiSettings::default()
        };
        let gateway = OpenAiLlmGateway::new(settings).unwrap();
        let debug = format!("{gateway:?}");
        assert!(debug.contains(DEFAULT_BASE_URL));
        assert!(!debug.contains("sk-test"));
    }
}
