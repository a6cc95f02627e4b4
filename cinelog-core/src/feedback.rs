//! Feedback entries on a film page
//!
//! An entry is shown read-only until the user starts editing it. Editing keeps
//! the original around so that cancelling restores it exactly; saving sends
//! the draft to the backend and shows whatever the backend returned.

use crate::error::{CoreError, Result};
use cinelog_model::{Entry, EntryPayload};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEditor {
    Viewing(Entry),
    Editing { original: Entry, draft: Entry },
}

impl EntryEditor {
    pub fn new(entry: Entry) -> Self {
        EntryEditor::Viewing(entry)
    }

    fn state_name(&self) -> &'static str {
        match self {
            EntryEditor::Viewing(_) => "viewing",
            EntryEditor::Editing { .. } => "editing",
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EntryEditor::Editing { .. })
    }

    /// Entry currently on screen (the draft while editing)
    pub fn current(&self) -> &Entry {
        match self {
            EntryEditor::Viewing(entry) => entry,
            EntryEditor::Editing { draft, .. } => draft,
        }
    }

    pub fn begin_edit(&mut self) -> Result<()> {
        let EntryEditor::Viewing(entry) = self else {
            return Err(CoreError::InvalidTransition {
                action: "begin editing",
                state: self.state_name(),
            });
        };
        debug!(entry_id = entry.id, "editing feedback entry");
        *self = EntryEditor::Editing {
            original: entry.clone(),
            draft: entry.clone(),
        };
        Ok(())
    }

    pub fn draft_mut(&mut self) -> Result<&mut Entry> {
        match self {
            EntryEditor::Editing { draft, .. } => Ok(draft),
            EntryEditor::Viewing(_) => Err(CoreError::InvalidTransition {
                action: "edit the draft",
                state: "viewing",
            }),
        }
    }

    /// Request body for saving the current draft
    pub fn payload(&self) -> Result<EntryPayload> {
        match self {
            EntryEditor::Editing { draft, .. } => Ok(draft.payload()),
            EntryEditor::Viewing(_) => Err(CoreError::InvalidTransition {
                action: "save",
                state: "viewing",
            }),
        }
    }

    /// Leave edit mode showing the entry exactly as it was before editing
    pub fn cancel(&mut self) -> Result<&Entry> {
        let EntryEditor::Editing { original, .. } = self else {
            return Err(CoreError::InvalidTransition {
                action: "cancel",
                state: "viewing",
            });
        };
        *self = EntryEditor::Viewing(std::mem::take(original));
        Ok(self.current())
    }

    /// Leave edit mode showing the entry the backend stored.
    ///
    /// The backend reply may omit the id; the original's id is kept then.
    pub fn commit(&mut self, mut updated: Entry) -> Result<&Entry> {
        let EntryEditor::Editing { original, .. } = self else {
            return Err(CoreError::InvalidTransition {
                action: "commit",
                state: "viewing",
            });
        };
        if updated.id == 0 {
            updated.id = original.id;
        }
        *self = EntryEditor::Viewing(updated);
        Ok(self.current())
    }
}

/// The entries listed on a film page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackList {
    entries: Vec<Entry>,
}

impl FeedbackList {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The "add feedback" form is only offered while there are no entries
    pub fn form_visible(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn remove(&mut self, id: i64) -> Result<Entry> {
        let idx = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CoreError::EntryNotFound(id))?;
        Ok(self.entries.remove(idx))
    }

    /// Replace the stored copy of an entry after a successful save
    pub fn replace(&mut self, entry: Entry) -> Result<()> {
        let slot = self
            .entries
            .iter_mut()
            .find(|existing| existing.id == entry.id)
            .ok_or(CoreError::EntryNotFound(entry.id))?;
        *slot = entry;
        Ok(())
    }
}
