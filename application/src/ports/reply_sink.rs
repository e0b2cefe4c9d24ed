//! Reply sink port.
//!
//! Where an accepted draft goes. The presentation layer provides a clipboard
//! adapter; with output disabled the draft is only printed.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SinkError {
    #[error("Output sink unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write reply: {0}")]
    WriteFailed(String),
}

/// What became of an accepted draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The sink took the draft.
    Delivered,
    /// No sink is configured; the draft is only printed.
    PrintOnly,
    /// The sink failed; the draft is printed instead.
    Failed,
}

impl Delivery {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delivery::Delivered => "delivered",
            Delivery::PrintOnly => "print_only",
            Delivery::Failed => "failed",
        }
    }
}

/// Port for delivering the accepted reply.
pub trait ReplySinkPort: Send + Sync {
    /// Whether this sink delivers anywhere. A disabled sink is never called.
    fn is_enabled(&self) -> bool {
        true
    }

    fn deliver(&self, text: &str) -> Result<(), SinkError>;
}

/// Sink for when clipboard output is turned off.
pub struct PrintOnlySink;

impl ReplySinkPort for PrintOnlySink {
    fn is_enabled(&self) -> bool {
        false
    }

    fn deliver(&self, _text: &str) -> Result<(), SinkError> {
        Ok(())
    }
}
