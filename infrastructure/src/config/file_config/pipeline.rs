//! Stage visibility from TOML (`[pipeline]` section)

use gitgen_domain::{ConfigIssue, ConfigIssueCode, StageVisibility};
use serde::{Deserialize, Serialize};

/// Which stage replies are echoed while they stream in
///
/// # Example
///
/// ```toml
/// [pipeline]
/// show_analysis = true   # print the hidden reasoning turn too
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    pub show_fetch: bool,
    pub show_analysis: bool,
    pub show_summary: bool,
    pub show_draft: bool,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        Self::from(StageVisibility::default())
    }
}

impl From<StageVisibility> for FilePipelineConfig {
    fn from(visibility: StageVisibility) -> Self {
        Self {
            show_fetch: visibility.fetch,
            show_analysis: visibility.analyze,
            show_summary: visibility.summarize,
            show_draft: visibility.draft,
        }
    }
}

impl FilePipelineConfig {
    pub fn to_visibility(&self) -> StageVisibility {
        StageVisibility {
            fetch: self.show_fetch,
            analyze: self.show_analysis,
            summarize: self.show_summary,
            draft: self.show_draft,
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.show_summary || self.show_draft {
            return Vec::new();
        }
        vec![ConfigIssue::warning(
            ConfigIssueCode::NothingVisible,
            "pipeline: show_summary and show_draft are both off; the draft is only shown when you are asked for feedback",
        )]
    }
}
