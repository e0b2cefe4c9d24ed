//! Draft entities

use serde::{Deserialize, Serialize};

/// The current suggested reply and how many feedback rounds produced it.
///
/// Only ever built from a backend reply: [`DraftState::initial`] after the
/// draft turn, [`DraftState::revised`] after each revision turn. The text is
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftState {
    text: String,
    revision_count: u32,
}

impl DraftState {
    pub fn initial(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revision_count: 0,
        }
    }

    /// Replace the text with a new reply and bump the revision count.
    pub fn revised(self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revision_count: self.revision_count + 1,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn revision_count(&self) -> u32 {
        self.revision_count
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_draft() {
        let draft = DraftState::initial("Thanks for the report.");
        assert_eq!(draft.text(), "Thanks for the report.");
        assert_eq!(draft.revision_count(), 0);
    }

    #[test]
    fn test_revised_replaces_text_and_counts() {
        let draft = DraftState::initial("long reply")
            .revised("short reply")
            .revised("shorter");
        assert_eq!(draft.text(), "shorter");
        assert_eq!(draft.revision_count(), 2);
    }
}
