//! Item store: the authoritative in-memory collection plus persistence
//!
//! Every mutation that actually changes the collection is followed by a
//! full write of the slot before control returns to the event loop, so
//! the persisted form never lags an observable UI state. No-ops skip
//! the write.
//!
//! Write failures (quota, read-only medium) are non-fatal: the store
//! logs and keeps the in-memory state authoritative for the rest of
//! the session.

use taskdeck_core::prelude::*;
use taskdeck_core::{Item, ItemPatch, TaskList};

use crate::storage::StorageAdapter;

/// Owns the task list and persists it through a [`StorageAdapter`].
#[derive(Debug)]
pub struct ItemStore {
    list: TaskList,
    storage: StorageAdapter,
}

impl ItemStore {
    /// Open the store, loading whatever the slot holds (possibly nothing)
    pub fn open(storage: StorageAdapter) -> Self {
        let list = TaskList::from_items(storage.load());
        info!(
            "Loaded {} item(s) from {}",
            list.len(),
            storage.path().display()
        );
        Self { list, storage }
    }

    /// Store over pre-built items, skipping the initial load
    pub fn with_items(items: Vec<Item>, storage: StorageAdapter) -> Self {
        Self {
            list: TaskList::from_items(items),
            storage,
        }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Add a new item; blank titles are a no-op. Returns the new id.
    pub fn add(&mut self, raw_title: &str) -> Option<String> {
        let id = self.list.add(raw_title).map(|item| item.id.clone());
        if id.is_some() {
            self.persist();
        }
        id
    }

    /// Patch an existing item by id; unknown id is a no-op
    pub fn update(&mut self, id: &str, patch: ItemPatch) {
        if self.list.update(id, patch) {
            self.persist();
        }
    }

    /// Remove an item by id; unknown id is a no-op
    pub fn remove(&mut self, id: &str) {
        if self.list.remove(id) {
            self.persist();
        }
    }

    /// Flip the completed state of a single item
    pub fn toggle(&mut self, id: &str) {
        let Some(item) = self.list.get(id) else {
            return;
        };
        let completed = !item.completed;
        self.update(id, ItemPatch::completed(completed));
    }

    /// Complete everything, or reactivate everything if all were complete
    pub fn toggle_all(&mut self) {
        if self.list.toggle_all() {
            self.persist();
        }
    }

    /// Drop every completed item
    pub fn clear_completed(&mut self) {
        if self.list.clear_completed() {
            self.persist();
        }
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(self.list.items()) {
            warn!("Persist failed, keeping in-memory state: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> ItemStore {
        ItemStore::open(StorageAdapter::at(dir.path().join("tasks.v1.json")))
    }

    #[test]
    fn test_add_persists_immediately() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("  Buy milk  ").unwrap();

        // A second store over the same slot observes the write
        let reopened = open_store(&dir);
        assert_eq!(reopened.list().len(), 1);
        assert_eq!(reopened.list().get(&id).unwrap().title, "Buy milk");
    }

    #[test]
    fn test_blank_add_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        assert!(store.add("   ").is_none());
        assert!(!dir.path().join("tasks.v1.json").exists());
    }

    #[test]
    fn test_toggle_resolves_current_state_by_id() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("task").unwrap();

        store.toggle(&id);
        assert!(store.list().get(&id).unwrap().completed);
        store.toggle(&id);
        assert!(!store.list().get(&id).unwrap().completed);
    }

    #[test]
    fn test_stale_id_operations_are_noops() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("task");

        store.toggle("stale");
        store.remove("stale");
        store.update("stale", ItemPatch::title("x"));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let (first, second) = {
            let mut store = open_store(&dir);
            let a = store.add("one").unwrap();
            let b = store.add("two").unwrap();
            store.toggle(&a);
            store.clear_completed();
            (a, b)
        };

        let store = open_store(&dir);
        assert!(store.list().get(&first).is_none());
        assert_eq!(store.list().get(&second).unwrap().title, "two");
    }

    #[test]
    fn test_unwritable_slot_keeps_memory_state() {
        // Slot path points at a directory, so every save fails
        let dir = TempDir::new().unwrap();
        let mut store = ItemStore::with_items(vec![], StorageAdapter::at(dir.path()));
        let id = store.add("still here").unwrap();
        assert_eq!(store.list().get(&id).unwrap().title, "still here");
    }
}
