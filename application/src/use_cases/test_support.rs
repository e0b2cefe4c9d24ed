//! Scripted port implementations shared by the use case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::feedback::{FeedbackError, FeedbackPort};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession, StreamHandle};
use crate::ports::progress::PipelineProgress;
use crate::ports::reply_sink::{Delivery, ReplySinkPort, SinkError};
use crate::ports::tool_executor::ToolExecutorPort;
use async_trait::async_trait;
use gitgen_domain::{DraftState, Model, StreamEvent, TurnLabel};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub fn text(s: &str) -> StreamEvent {
    StreamEvent::PlainText(s.to_string())
}

pub fn summary(s: &str) -> StreamEvent {
    StreamEvent::ToolResultSummary(s.to_string())
}

// ==================== LLM ====================

struct ScriptedSession {
    model: Model,
    replies: Arc<Mutex<VecDeque<Vec<StreamEvent>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send_streaming(&self, content: &str) -> Result<StreamHandle, GatewayError> {
        self.prompts.lock().unwrap().push(content.to_string());
        let events = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GatewayError::Other("No more scripted replies".to_string()))?;
        Ok(StreamHandle::from_events(events))
    }
}

/// Gateway whose sessions answer each turn with the next scripted event list.
pub struct ScriptedGateway {
    replies: Arc<Mutex<VecDeque<Vec<StreamEvent>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    system_prompt: Mutex<Option<String>>,
    tool_names: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Vec<StreamEvent>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            prompts: Arc::new(Mutex::new(Vec::new())),
            system_prompt: Mutex::new(None),
            tool_names: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt sent so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn system_prompt(&self) -> Option<String> {
        self.system_prompt.lock().unwrap().clone()
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tool_names.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn create_session(
        &self,
        model: &Model,
        system_prompt: &str,
        tools: Arc<dyn ToolExecutorPort>,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        *self.system_prompt.lock().unwrap() = Some(system_prompt.to_string());
        let mut names: Vec<String> = tools.tool_spec().names().map(String::from).collect();
        names.sort();
        *self.tool_names.lock().unwrap() = names;

        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            replies: self.replies.clone(),
            prompts: self.prompts.clone(),
        }))
    }
}

// ==================== Human side ====================

/// Feedback port that plays back fixed input lines.
pub struct ScriptedFeedback {
    lines: Mutex<VecDeque<String>>,
    seen_drafts: Mutex<Vec<DraftState>>,
}

impl ScriptedFeedback {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: Mutex::new(lines.iter().map(|s| s.to_string()).collect()),
            seen_drafts: Mutex::new(Vec::new()),
        }
    }

    /// The drafts shown at each prompt, in order.
    pub fn seen_drafts(&self) -> Vec<DraftState> {
        self.seen_drafts.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedbackPort for ScriptedFeedback {
    async fn request_feedback(&self, draft: &DraftState) -> Result<String, FeedbackError> {
        self.seen_drafts.lock().unwrap().push(draft.clone());
        self.lines
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(FeedbackError::Closed)
    }
}

/// Sink that records deliveries, optionally failing them.
pub struct RecordingSink {
    delivered: Mutex<Vec<String>>,
    attempts: Mutex<usize>,
    enabled: bool,
    fail: bool,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            attempts: Mutex::new(0),
            enabled: true,
            fail: false,
        }
    }
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn delivered(&self) -> Vec<String> {
        self.delivered.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl ReplySinkPort for RecordingSink {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn deliver(&self, text: &str) -> Result<(), SinkError> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail {
            return Err(SinkError::Unavailable("no display".to_string()));
        }
        self.delivered.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

// ==================== Observers ====================

#[derive(Default)]
pub struct RecordingProgress {
    started: Mutex<Vec<TurnLabel>>,
    accumulated: Mutex<Vec<String>>,
    completed: Mutex<Vec<(TurnLabel, bool)>>,
    exits: Mutex<usize>,
    accepted: Mutex<Vec<Delivery>>,
}

impl RecordingProgress {
    pub fn started(&self) -> Vec<TurnLabel> {
        self.started.lock().unwrap().clone()
    }

    pub fn accumulated(&self) -> Vec<String> {
        self.accumulated.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<(TurnLabel, bool)> {
        self.completed.lock().unwrap().clone()
    }

    pub fn exits(&self) -> usize {
        *self.exits.lock().unwrap()
    }

    pub fn accepted(&self) -> Vec<Delivery> {
        self.accepted.lock().unwrap().clone()
    }
}

impl PipelineProgress for RecordingProgress {
    fn on_turn_start(&self, label: &TurnLabel, _visible: bool) {
        self.started.lock().unwrap().push(*label);
    }

    fn on_reply_fragment(&self, _label: &TurnLabel, _fragment: &str, accumulated: &str) {
        self.accumulated
            .lock()
            .unwrap()
            .push(accumulated.to_string());
    }

    fn on_turn_complete(&self, label: &TurnLabel, visible: bool, _reply: &str) {
        self.completed.lock().unwrap().push((*label, visible));
    }

    fn on_exit(&self) {
        *self.exits.lock().unwrap() += 1;
    }

    fn on_accepted(&self, _draft: &DraftState, delivery: Delivery) {
        self.accepted.lock().unwrap().push(delivery);
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}
