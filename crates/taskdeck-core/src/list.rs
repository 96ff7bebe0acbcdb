//! The ordered task collection and its mutation operations
//!
//! All operations are pure in-memory transformations; persistence is the
//! caller's concern (see the item store in taskdeck-app). Every mutation
//! reports whether it changed the collection so callers can skip
//! redundant writes.

use crate::id::next_id;
use crate::types::{Item, ItemPatch};

/// Ordered, insertion-preserving collection of task items.
///
/// Invariants upheld by every operation:
/// - every item has a unique, non-empty id
/// - no item has an empty or whitespace-only title
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    items: Vec<Item>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already-validated items (e.g. a storage load)
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Append a new item with a fresh id and the trimmed title.
    ///
    /// A title that trims to empty is a no-op: nothing is appended and
    /// no id is generated. Returns the new item's id when one was added.
    pub fn add(&mut self, raw_title: &str) -> Option<&Item> {
        let title = raw_title.trim();
        if title.is_empty() {
            return None;
        }
        self.items.push(Item::new(next_id(), title));
        self.items.last()
    }

    /// Apply a partial update to the item with `id`, preserving its
    /// position and any pass-through fields. Unknown id is a silent
    /// no-op (tolerates a stale id from a since-removed row).
    pub fn update(&mut self, id: &str, patch: ItemPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        let mut changed = false;
        if let Some(title) = patch.title {
            if item.title != title {
                item.title = title;
                changed = true;
            }
        }
        if let Some(completed) = patch.completed {
            if item.completed != completed {
                item.completed = completed;
                changed = true;
            }
        }
        changed
    }

    /// Remove the item with `id`, if present
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// If every item is completed (and the list is non-empty), mark all
    /// active; otherwise mark all completed. Empty list is a no-op.
    pub fn toggle_all(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let target = !self.items.iter().all(|i| i.completed);
        let mut changed = false;
        for item in &mut self.items {
            if item.completed != target {
                item.completed = target;
                changed = true;
            }
        }
        changed
    }

    /// Drop every completed item. Idempotent.
    pub fn clear_completed(&mut self) -> bool {
        let before = self.items.len();
        self.items.retain(|i| !i.completed);
        self.items.len() != before
    }
}
