use crate::error::{ModelError, Result};

const WATCHED_MARK: char = '✓';
const NOT_WATCHED_MARK: char = '✗';

/// A user's feedback on a film: who, whether they watched it, and a comment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: i64,
    pub name: String,
    pub watched: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        watched: bool,
        comment: impl Into<String>,
    ) -> Self {
        Entry {
            id: 0,
            name: name.into(),
            watched,
            comment: comment.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Bold label shown in the feedback list, e.g. `Alice (✓):`
    pub fn label(&self) -> String {
        let mark = if self.watched {
            WATCHED_MARK
        } else {
            NOT_WATCHED_MARK
        };
        format!("{} ({mark}):", self.name)
    }

    pub fn quoted_comment(&self) -> String {
        format!("\"{}\"", self.comment)
    }

    /// Recover an entry from its rendered label and comment text.
    ///
    /// The name is everything before the first `" ("`; the watched flag is
    /// read from the check mark; quotes are stripped from the comment.
    pub fn from_display(label: &str, comment_text: &str) -> Result<Self> {
        let name = label
            .split(" (")
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        if name.is_empty() {
            return Err(ModelError::InvalidEntry(format!(
                "label {label:?} has no name"
            )));
        }

        Ok(Entry {
            id: 0,
            name,
            watched: label.contains(WATCHED_MARK),
            comment: comment_text.replace('"', ""),
        })
    }

    pub fn payload(&self) -> EntryPayload {
        EntryPayload {
            name: self.name.clone(),
            comment: self.comment.clone(),
            watched: self.watched,
        }
    }
}

/// Request body for creating or replacing a film's feedback entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryPayload {
    pub name: String,
    pub comment: String,
    pub watched: bool,
}
