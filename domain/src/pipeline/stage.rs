//! Pipeline stage entities

use serde::{Deserialize, Serialize};

/// Stage of the drafting pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Model fetches the thread through its tool
    Fetch,
    /// Scratch reasoning about the thread
    Analyze,
    /// Status summary shown to the maintainer
    Summarize,
    /// First suggested reply
    Draft,
}

impl Stage {
    /// Execution order; transitions are unconditional.
    pub const ALL: [Stage; 4] = [Stage::Fetch, Stage::Analyze, Stage::Summarize, Stage::Draft];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Fetch => "fetch",
            Stage::Analyze => "analyze",
            Stage::Summarize => "summarize",
            Stage::Draft => "draft",
        }
    }

    /// Header printed before the stage runs, regardless of visibility.
    pub fn header(&self) -> Option<&'static str> {
        match self {
            Stage::Fetch => None,
            Stage::Analyze => Some("Thinking..."),
            Stage::Summarize => Some("Summary:"),
            Stage::Draft => Some("Suggested response:"),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which stages echo their reply to the human as it streams in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageVisibility {
    pub fetch: bool,
    pub analyze: bool,
    pub summarize: bool,
    pub draft: bool,
}

impl Default for StageVisibility {
    fn default() -> Self {
        Self {
            fetch: true,
            analyze: false,
            summarize: true,
            draft: true,
        }
    }
}

impl StageVisibility {
    pub fn is_visible(&self, stage: Stage) -> bool {
        match stage {
            Stage::Fetch => self.fetch,
            Stage::Analyze => self.analyze,
            Stage::Summarize => self.summarize,
            Stage::Draft => self.draft,
        }
    }
}

/// What a turn is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum TurnLabel {
    Stage(Stage),
    /// Revision round, counted from 1
    Revision(u32),
}

impl TurnLabel {
    pub fn header(&self) -> Option<&'static str> {
        match self {
            TurnLabel::Stage(stage) => stage.header(),
            TurnLabel::Revision(_) => Some("Suggested response:"),
        }
    }
}

impl std::fmt::Display for TurnLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnLabel::Stage(stage) => write!(f, "{}", stage),
            TurnLabel::Revision(n) => write!(f, "revision #{}", n),
        }
    }
}

/// One prompt sent through the conversation, and whether its reply is echoed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub label: TurnLabel,
    pub prompt: String,
    pub visible: bool,
}

impl Turn {
    pub fn new(label: TurnLabel, prompt: impl Into<String>, visible: bool) -> Self {
        Self {
            label,
            prompt: prompt.into(),
            visible,
        }
    }

    pub fn stage(stage: Stage, prompt: impl Into<String>, visibility: &StageVisibility) -> Self {
        Self::new(TurnLabel::Stage(stage), prompt, visibility.is_visible(stage))
    }

    /// Revision turns are always echoed.
    pub fn revision(round: u32, prompt: impl Into<String>) -> Self {
        Self::new(TurnLabel::Revision(round), prompt, true)
    }
}
