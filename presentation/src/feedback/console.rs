//! Line-based feedback from the terminal

use async_trait::async_trait;
use gitgen_application::ports::feedback::{FeedbackError, FeedbackPort};
use gitgen_domain::DraftState;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Stdin};
use tokio::sync::Mutex;

/// Prompt shown before every feedback line
pub const FEEDBACK_PROMPT: &str = "Provide feedback on the suggested response";

/// Reads one line of feedback per request.
///
/// End of input is reported as [`FeedbackError::Closed`] so a piped or
/// closed stdin cannot spin the revision loop.
pub struct ConsoleFeedback<R = Stdin> {
    reader: Mutex<BufReader<R>>,
}

impl ConsoleFeedback<Stdin> {
    pub fn new() -> Self {
        Self::with_reader(tokio::io::stdin())
    }
}

impl Default for ConsoleFeedback<Stdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncRead + Unpin + Send> ConsoleFeedback<R> {
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader: Mutex::new(BufReader::new(reader)),
        }
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> FeedbackPort for ConsoleFeedback<R> {
    async fn request_feedback(&self, _draft: &DraftState) -> Result<String, FeedbackError> {
        print!("\n>> {}: ", FEEDBACK_PROMPT);
        std::io::stdout()
            .flush()
            .map_err(|e| FeedbackError::IoError(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .reader
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(|e| FeedbackError::IoError(e.to_string()))?;
        if read == 0 {
            return Err(FeedbackError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DraftState {
        DraftState::initial("Thanks for the report!")
    }

    #[tokio::test]
    async fn test_reads_lines_in_order() {
        let feedback = ConsoleFeedback::with_reader(&b"be shorter\r\ny\n"[..]);
        assert_eq!(feedback.request_feedback(&draft()).await.unwrap(), "be shorter");
        assert_eq!(feedback.request_feedback(&draft()).await.unwrap(), "y");
    }

    #[tokio::test]
    async fn test_blank_line_is_returned_as_is() {
        let feedback = ConsoleFeedback::with_reader(&b"   \n"[..]);
        assert_eq!(feedback.request_feedback(&draft()).await.unwrap(), "   ");
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let feedback = ConsoleFeedback::with_reader(&b"exit"[..]);
        assert_eq!(feedback.request_feedback(&draft()).await.unwrap(), "exit");
    }

    #[tokio::test]
    async fn test_end_of_input_is_closed() {
        let feedback = ConsoleFeedback::with_reader(&b""[..]);
        let err = feedback.request_feedback(&draft()).await.unwrap_err();
        assert!(matches!(err, FeedbackError::Closed));
    }
}
