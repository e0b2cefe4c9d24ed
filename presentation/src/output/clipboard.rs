//! System clipboard sink for accepted drafts

use gitgen_application::ports::reply_sink::{ReplySinkPort, SinkError};
use tracing::debug;

/// Copies the accepted draft to the system clipboard.
///
/// A clipboard is opened per delivery; headless sessions without a display
/// fail with [`SinkError::Unavailable`] and the caller falls back to printing.
pub struct ClipboardSink;

impl ReplySinkPort for ClipboardSink {
    fn deliver(&self, text: &str) -> Result<(), SinkError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| SinkError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| SinkError::WriteFailed(e.to_string()))?;
        debug!(bytes = text.len(), "Copied reply to clipboard");
        Ok(())
    }
}
