//! Prompt templates for the drafting pipeline

use crate::pipeline::stage::Stage;
use crate::thread::entities::Thread;

/// Templates for generating the prompt of each turn
pub struct ReplyPromptTemplate;

impl ReplyPromptTemplate {
    /// System prompt bound to the session for its whole lifetime
    pub fn system() -> &'static str {
        "You are a helpful AI assistant whose purpose is to reply to GitHub issues and pull requests. \
Use the content in the thread to generate an auto reply that is technical and helpful to make progress on the issue/pr. \
Your response must be very concise and focus on precision. Just be direct and to the point."
    }

    /// Asks the model to call its fetch tool for this thread
    pub fn fetch(thread: &Thread) -> String {
        format!(
            "Fetch comments for the {} #{} for the {}/{} repository",
            thread.kind().as_str(),
            thread.number(),
            thread.owner(),
            thread.repo_name()
        )
    }

    pub fn analyze() -> &'static str {
        "Answer the following questions: \
1) What facts are known based on the contents of this issue thread? \
2) What is the main issue or problem that needs to be addressed? \
3) What type of a new response from the maintainers would help make progress on this issue? \
Be concise."
    }

    pub fn summarize() -> &'static str {
        "Summarize what is the status of this issue. Be concise."
    }

    pub fn draft() -> &'static str {
        "On behalf of the maintainers, generate a response to the issue/pr that is technical and helpful to make progress. Be concise."
    }

    /// Revision request embedding the maintainer's feedback verbatim
    pub fn revise(feedback: &str) -> String {
        format!(
            "Accommodate the following feedback: {}. Then generate a response to the issue/pr that is technical and helpful to make progress. Be concise.",
            feedback
        )
    }

    /// Prompt for a pipeline stage
    pub fn for_stage(stage: Stage, thread: &Thread) -> String {
        match stage {
            Stage::Fetch => Self::fetch(thread),
            Stage::Analyze => Self::analyze().to_string(),
            Stage::Summarize => Self::summarize().to_string(),
            Stage::Draft => Self::draft().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread::entities::{RepositoryId, ThreadKind};

    fn thread() -> Thread {
        Thread::new(
            RepositoryId::new("octo", "hello").unwrap(),
            ThreadKind::Issue,
            42,
        )
        .unwrap()
    }

    #[test]
    fn test_fetch_prompt() {
        assert_eq!(
            ReplyPromptTemplate::fetch(&thread()),
            "Fetch comments for the issue #42 for the octo/hello repository"
        );
    }

    #[test]
    fn test_revise_embeds_feedback_verbatim() {
        assert_eq!(
            ReplyPromptTemplate::revise("make it shorter"),
            "Accommodate the following feedback: make it shorter. Then generate a response to the issue/pr that is technical and helpful to make progress. Be concise."
        );
    }

    #[test]
    fn test_analyze_asks_three_questions() {
        let prompt = ReplyPromptTemplate::analyze();
        assert!(prompt.contains("1) What facts are known"));
        assert!(prompt.contains("2) What is the main issue"));
        assert!(prompt.contains("3) What type of a new response"));
    }

    #[test]
    fn test_for_stage_matches_individual_templates() {
        let t = thread();
        assert_eq!(
            ReplyPromptTemplate::for_stage(Stage::Summarize, &t),
            "Summarize what is the status of this issue. Be concise."
        );
        assert_eq!(
            ReplyPromptTemplate::for_stage(Stage::Fetch, &t),
            ReplyPromptTemplate::fetch(&t)
        );
    }

    #[test]
    fn test_system_prompt_mentions_concision() {
        assert!(ReplyPromptTemplate::system().starts_with("You are a helpful AI assistant"));
        assert!(ReplyPromptTemplate::system().ends_with("Just be direct and to the point."));
    }
}
