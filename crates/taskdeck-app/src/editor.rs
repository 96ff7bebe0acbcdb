//! Inline title editing as an explicit state machine
//!
//! One [`EditSession`] exists at a time; holding one *is* the `Editing`
//! state, `None` is `Viewing`. A session ends in exactly one terminal
//! transition: commit (Enter, or any focus-losing path out of edit mode)
//! or cancel (Esc). Committing an empty title deletes the item rather
//! than leaving it blank.

use taskdeck_core::Item;

use crate::text_buffer::TextBuffer;

/// Transient edit state for one item's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    item_id: String,
    buffer: TextBuffer,
}

/// The store mutation a finished edit session asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Non-empty trimmed title: rename the item
    Rename { id: String, title: String },
    /// Title trimmed to empty: delete the item
    Delete { id: String },
}

impl EditSession {
    /// Enter editing for `item`: buffer pre-filled with the current
    /// title, cursor at the end.
    pub fn begin(item: &Item) -> Self {
        Self {
            item_id: item.id.clone(),
            buffer: TextBuffer::with_text(&item.title),
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Commit transition: consume the session and report the mutation
    /// to apply.
    pub fn commit(self) -> EditOutcome {
        let title = self.buffer.text().trim().to_string();
        if title.is_empty() {
            EditOutcome::Delete { id: self.item_id }
        } else {
            EditOutcome::Rename {
                id: self.item_id,
                title,
            }
        }
    }

    // Cancel is simply dropping the session; no mutation is produced.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_copies_title_with_cursor_at_end() {
        let item = Item::new("1", "hello");
        let session = EditSession::begin(&item);
        assert_eq!(session.buffer().text(), "hello");
        assert_eq!(session.buffer().cursor(), 5);
    }

    #[test]
    fn test_commit_trims_and_renames() {
        let item = Item::new("1", "old");
        let mut session = EditSession::begin(&item);
        session.buffer_mut().clear();
        for c in "  new title  ".chars() {
            session.buffer_mut().insert(c);
        }
        assert_eq!(
            session.commit(),
            EditOutcome::Rename {
                id: "1".into(),
                title: "new title".into()
            }
        );
    }

    #[test]
    fn test_commit_empty_deletes() {
        // Scenario: edit a title down to nothing and commit
        let item = Item::new("1", "A");
        let mut session = EditSession::begin(&item);
        session.buffer_mut().clear();
        assert_eq!(session.commit(), EditOutcome::Delete { id: "1".into() });
    }

    #[test]
    fn test_commit_whitespace_only_deletes() {
        let item = Item::new("1", "A");
        let mut session = EditSession::begin(&item);
        session.buffer_mut().clear();
        session.buffer_mut().insert(' ');
        assert_eq!(session.commit(), EditOutcome::Delete { id: "1".into() });
    }
}
