//! Chat completions session.
//!
//! Provides [`OpenAiSession`], which implements [`LlmSession`] by replaying
//! the full history on every request. Each turn runs in a spawned task that
//! feeds the [`StreamHandle`]; tool calls requested by the model are executed
//! in that task before anything is emitted.

use super::error::{OpenAiError, Result};
use super::gateway::OpenAiSettings;
use super::protocol::{ChatMessage, ChatRequest, ChatResponse, Choice};
use crate::tools::JsonSchemaToolConverter;
use async_trait::async_trait;
use gitgen_application::ports::llm_gateway::{GatewayError, LlmSession, StreamHandle, StreamItem};
use gitgen_application::ports::tool_executor::ToolExecutorPort;
use gitgen_application::ports::tool_schema::ToolSchemaPort;
use gitgen_domain::{Model, StreamEvent, ToolCall};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const CHANNEL_CAPACITY: usize = 16;

/// An open conversation with one model.
pub struct OpenAiSession {
    model: Model,
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: reqwest::Client,
    settings: Arc<OpenAiSettings>,
    api_key: String,
    model: Model,
    tools: Arc<dyn ToolExecutorPort>,
    tool_schemas: Vec<serde_json::Value>,
    /// Committed history, system prompt first
    history: Mutex<Vec<ChatMessage>>,
}

impl OpenAiSession {
    pub fn new(
        client: reqwest::Client,
        settings: Arc<OpenAiSettings>,
        api_key: String,
        model: Model,
        system_prompt: &str,
        tools: Arc<dyn ToolExecutorPort>,
    ) -> Self {
        let tool_schemas = JsonSchemaToolConverter.all_tools_schema(tools.tool_spec());
        info!(
            "Creating session with model: {} ({} tools)",
            model,
            tool_schemas.len()
        );

        Self {
            inner: Arc::new(SessionInner {
                client,
                settings,
                api_key,
                model: model.clone(),
                tools,
                tool_schemas,
                history: Mutex::new(vec![ChatMessage::system(system_prompt)]),
            }),
            model,
        }
    }
}

impl SessionInner {
    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    /// Run one turn against a copy of the history; the copy replaces the
    /// history only when the turn completes.
    async fn run_turn(&self, content: String, tx: &mpsc::Sender<StreamItem>) {
        let mut history = self.history.lock().await;
        let mut pending = history.clone();
        pending.push(ChatMessage::user(content));

        match self.complete_turn(&mut pending, tx).await {
            Ok(()) => *history = pending,
            Err(e) => {
                warn!("Turn failed: {}", e);
                let _ = tx.send(Err(GatewayError::from(e))).await;
            }
        }
    }

    async fn complete_turn(
        &self,
        messages: &mut Vec<ChatMessage>,
        tx: &mpsc::Sender<StreamItem>,
    ) -> Result<()> {
        let mut rounds = 0;
        loop {
            let choice = self.complete(messages).await?;

            if !choice.message.requested_tools().is_empty() {
                rounds += 1;
                let outputs = self.execute_tools(choice.message, messages).await;
                if !self.settings.reflect_on_tool_use {
                    emit(tx, StreamEvent::ToolResultSummary(outputs.join("\n"))).await;
                    return Ok(());
                }
                if rounds >= self.settings.max_tool_rounds {
                    return Err(OpenAiError::ToolRoundsExceeded(rounds));
                }
                continue;
            }

            if let Some(text) = choice.message.text() {
                let text = text.to_string();
                messages.push(ChatMessage::assistant(text.clone()));
                emit(tx, StreamEvent::PlainText(text)).await;
                return Ok(());
            }

            let kind = choice.finish_reason.unwrap_or_else(|| "empty".to_string());
            warn!(kind = %kind, "Completion carried neither text nor tool calls");
            emit(tx, StreamEvent::Unrecognized { kind }).await;
            return Ok(());
        }
    }

    /// Execute every requested call and append the assistant request and the
    /// tool answers to `messages`. Returns the outputs in call order.
    async fn execute_tools(
        &self,
        request: ChatMessage,
        messages: &mut Vec<ChatMessage>,
    ) -> Vec<String> {
        let payloads = request.requested_tools().to_vec();
        messages.push(request);

        let mut outputs = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let call = ToolCall::from_native(
                payload.id.clone(),
                payload.function.name.clone(),
                &payload.function.arguments,
            );
            debug!(tool = %call.tool_name, "Model requested tool");
            let output = self.tools.execute(&call).await.to_content();
            messages.push(ChatMessage::tool(payload.id, output.clone()));
            outputs.push(output);
        }
        outputs
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<Choice> {
        let body = ChatRequest::new(
            &self.model,
            messages,
            &self.tool_schemas,
            self.settings.max_tokens,
        );

        debug!("Requesting completion ({} messages)", messages.len());
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: ChatResponse = serde_json::from_slice(&bytes)?;
        parsed
            .choices
            .into_iter()
            .next()
            .ok_or(OpenAiError::EmptyCompletion)
    }
}

async fn emit(tx: &mpsc::Sender<StreamItem>, event: StreamEvent) {
    if tx.send(Ok(event)).await.is_err() {
        debug!("Stream receiver dropped before the event was delivered");
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send_streaming(&self, content: &str) -> std::result::Result<StreamHandle, GatewayError> {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let inner = Arc::clone(&self.inner);
        let content = content.to_string();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => debug!("Turn cancelled by consumer"),
                _ = inner.run_turn(content, &tx) => {}
            }
        });

        Ok(StreamHandle::with_cancellation(rx, cancel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{GET_GITHUB_ISSUE_CONTENT, ThreadToolExecutor};
    use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
    use gitgen_application::ports::thread_content::ThreadContentPort;
    use gitgen_application::ports::tool_executor::NoTools;
    use serde_json::{Value, json};
    use std::collections::VecDeque;

    #[derive(Clone, Default)]
    struct Stub {
        replies: Arc<std::sync::Mutex<VecDeque<(u16, Value)>>>,
        requests: Arc<std::sync::Mutex<Vec<Value>>>,
    }

    impl Stub {
        fn scripted(replies: Vec<(u16, Value)>) -> Self {
            Self {
                replies: Arc::new(std::sync::Mutex::new(replies.into())),
                ..Self::default()
            }
        }

        fn requests(&self) -> Vec<Value> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn completions(State(stub): State<Stub>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        stub.requests.lock().unwrap().push(body);
        let (status, reply) = stub
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((500, json!({"error": "script exhausted"})));
        (StatusCode::from_u16(status).unwrap(), Json(reply))
    }

    async fn serve(stub: Stub) -> String {
        let app = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(stub);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1", addr)
    }

    fn text_reply(text: &str) -> (u16, Value) {
        (
            200,
            json!({"choices": [{"finish_reason": "stop", "message": {"role": "assistant", "content": text}}]}),
        )
    }

    fn tool_reply(id: &str, number: u64) -> (u16, Value) {
        let arguments = json!({"owner": "octo", "repo": "hello", "issue_number": number}).to_string();
        (
            200,
            json!({"choices": [{"finish_reason": "tool_calls", "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{"id": id, "type": "function", "function": {"name": GET_GITHUB_ISSUE_CONTENT, "arguments": arguments}}]
            }}]}),
        )
    }

    struct FixedThread;

    #[async_trait]
    impl ThreadContentPort for FixedThread {
        async fn fetch(&self, _owner: &str, _repo: &str, number: u64) -> String {
            format!("Issue Content by alice:\nbody of #{number}\n\nComments:\n")
        }
    }

    fn settings(base_url: String, reflect: bool) -> OpenAiSettings {
        OpenAiSettings {
            base_url,
            api_key: Some("sk-test".to_string()),
            reflect_on_tool_use: reflect,
            max_tool_rounds: 2,
            ..OpenAiSettings::default()
        }
    }

    fn session_for(model: Model, settings: OpenAiSettings, tools: Arc<dyn ToolExecutorPort>) -> OpenAiSession {
        OpenAiSession::new(
            reqwest::Client::new(),
            Arc::new(settings),
            "sk-test".to_string(),
            model,
            "You are helpful.",
            tools,
        )
    }

    fn session(base_url: String, reflect: bool, tools: Arc<dyn ToolExecutorPort>) -> OpenAiSession {
        session_for(Model::Gpt4o, settings(base_url, reflect), tools)
    }

    fn thread_tools() -> Arc<dyn ToolExecutorPort> {
        Arc::new(ThreadToolExecutor::new(Arc::new(FixedThread)))
    }

    #[tokio::test]
    async fn test_text_reply_and_history() {
        let stub = Stub::scripted(vec![text_reply("first"), text_reply("second")]);
        let base = serve(stub.clone()).await;
        let session = session(base, false, Arc::new(NoTools::new()));

        let events = session.send_streaming("one").await.unwrap().collect_events().await.unwrap();
        assert_eq!(events, vec![StreamEvent::PlainText("first".to_string())]);
        session.send_streaming("two").await.unwrap().collect_events().await.unwrap();

        let requests = stub.requests();
        assert_eq!(requests[0]["model"], "gpt-4o");
        assert!(requests[0].get("tools").is_none());
        assert_eq!(
            requests[1]["messages"],
            json!([
                {"role": "system", "content": "You are helpful."},
                {"role": "user", "content": "one"},
                {"role": "assistant", "content": "first"},
                {"role": "user", "content": "two"}
            ])
        );
    }

    #[tokio::test]
    async fn test_token_limit_per_model() {
        let stub = Stub::scripted(vec![text_reply("a"), text_reply("b")]);
        let base = serve(stub.clone()).await;
        let limited = OpenAiSettings {
            max_tokens: Some(256),
            ..settings(base, false)
        };

        for model in [Model::Gpt4o, Model::O3Mini] {
            let session = session_for(model, limited.clone(), Arc::new(NoTools::new()));
            session.send_streaming("hi").await.unwrap().collect_events().await.unwrap();
        }

        let requests = stub.requests();
        assert_eq!(requests[0]["model"], "gpt-4o");
        assert_eq!(requests[0]["max_tokens"], 256);
        assert!(requests[0].get("max_completion_tokens").is_none());

        assert_eq!(requests[1]["model"], "o3-mini");
        assert_eq!(requests[1]["max_completion_tokens"], 256);
        assert!(requests[1].get("max_tokens").is_none());
    }

    #[tokio::test]
    async fn test_tool_call_emits_summary() {
        let stub = Stub::scripted(vec![tool_reply("call_1", 42), text_reply("analysis")]);
        let base = serve(stub.clone()).await;
        let session = session(base, false, thread_tools());

        let events = session.send_streaming("fetch it").await.unwrap().collect_events().await.unwrap();
        assert_eq!(
            events,
            vec![StreamEvent::ToolResultSummary(
                "Issue Content by alice:\nbody of #42\n\nComments:\n".to_string()
            )]
        );

        session.send_streaming("analyze").await.unwrap().collect_events().await.unwrap();
        let requests = stub.requests();
        assert_eq!(requests[0]["tools"][0]["function"]["name"], GET_GITHUB_ISSUE_CONTENT);

        let history = requests[1]["messages"].as_array().unwrap();
        assert_eq!(history[2]["tool_calls"][0]["id"], "call_1");
        assert_eq!(history[3]["role"], "tool");
        assert_eq!(history[3]["tool_call_id"], "call_1");
        assert_eq!(history[4], json!({"role": "user", "content": "analyze"}));
    }

    #[tokio::test]
    async fn test_reflection_answers_in_text() {
        let stub = Stub::scripted(vec![tool_reply("call_1", 7), text_reply("It is a bug report.")]);
        let base = serve(stub.clone()).await;
        let session = session(base, true, thread_tools());

        let events = session.send_streaming("fetch it").await.unwrap().collect_events().await.unwrap();
        assert_eq!(events, vec![StreamEvent::PlainText("It is a bug report.".to_string())]);
        assert_eq!(stub.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_reflection_is_bounded() {
        let stub = Stub::scripted(vec![tool_reply("a", 1), tool_reply("b", 1), tool_reply("c", 1)]);
        let base = serve(stub.clone()).await;
        let session = session(base, true, thread_tools());

        let err = session.send_streaming("loop").await.unwrap().collect_events().await.unwrap_err();
        assert!(matches!(err, GatewayError::SessionError(_)));
        assert_eq!(stub.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_content_filter_is_unrecognized() {
        let stub = Stub::scripted(vec![(
            200,
            json!({"choices": [{"finish_reason": "content_filter", "message": {"role": "assistant", "content": null}}]}),
        )]);
        let base = serve(stub).await;
        let session = session(base, false, Arc::new(NoTools::new()));

        let events = session.send_streaming("hi").await.unwrap().collect_events().await.unwrap();
        assert_eq!(
            events,
            vec![StreamEvent::Unrecognized {
                kind: "content_filter".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_http_error_is_stream_error_and_not_recorded() {
        let stub = Stub::scripted(vec![
            (401, json!({"error": {"message": "bad key"}})),
            text_reply("ok"),
        ]);
        let base = serve(stub.clone()).await;
        let session = session(base, false, Arc::new(NoTools::new()));

        let err = session.send_streaming("one").await.unwrap().collect_events().await.unwrap_err();
        assert!(matches!(err, GatewayError::RequestFailed { status: 401, .. }));

        session.send_streaming("two").await.unwrap().collect_events().await.unwrap();
        assert_eq!(
            stub.requests()[1]["messages"],
            json!([
                {"role": "system", "content": "You are helpful."},
                {"role": "user", "content": "two"}
            ])
        );
    }

    #[tokio::test]
    async fn test_empty_choices_is_invalid_response() {
        let stub = Stub::scripted(vec![(200, json!({"choices": []}))]);
        let base = serve(stub).await;
        let session = session(base, false, Arc::new(NoTools::new()));

        let err = session.send_streaming("hi").await.unwrap().collect_events().await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}
