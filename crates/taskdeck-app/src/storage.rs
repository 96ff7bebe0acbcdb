//! Storage adapter: the durable JSON slot holding the full collection
//!
//! Reads are infinitely tolerant: a missing, unreadable, or malformed
//! slot degrades to an empty collection, and a partially valid array is
//! filtered down to the records that carry a string `id`. Failures are
//! never surfaced to the caller.
//!
//! Writes overwrite the whole slot under an exclusive file lock and are
//! best-effort: a failed write is logged and the in-memory collection
//! stays authoritative for the rest of the session.

use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::Value;

use taskdeck_core::prelude::*;
use taskdeck_core::Item;

/// File name of the storage slot. The version suffix is part of the
/// slot identity; a future format change gets a new file.
const SLOT_FILENAME: &str = "tasks.v1.json";

/// Reads and writes the item collection to a single JSON file.
#[derive(Debug, Clone)]
pub struct StorageAdapter {
    path: PathBuf,
}

impl StorageAdapter {
    /// Adapter over the default slot: `<data_local_dir>/taskdeck/tasks.v1.json`
    pub fn default_slot() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("taskdeck").join(SLOT_FILENAME),
        }
    }

    /// Adapter over an explicit slot path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection from the slot.
    ///
    /// Returns an empty collection when the slot is absent, unreadable,
    /// not JSON, or not an array. An array yields the subsequence of
    /// elements that are objects with a string `id`; each is
    /// deserialized leniently (missing `title`/`completed` default,
    /// unknown fields are kept for pass-through).
    pub fn load(&self) -> Vec<Item> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Storage slot unreadable, starting empty: {e}");
                }
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                warn!("Storage slot is not an array, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!("Storage slot is not valid JSON, starting empty: {e}");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter(|entry| entry.get("id").map(Value::is_string).unwrap_or(false))
            .filter_map(|entry| serde_json::from_value::<Item>(entry).ok())
            .collect()
    }

    /// Serialize the full collection and overwrite the slot.
    ///
    /// The parent directory is created on demand and the file is held
    /// under an exclusive lock for the duration of the write.
    pub fn save(&self, items: &[Item]) -> Result<()> {
        let content = serde_json::to_string(items)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::storage(format!("Failed to create data directory: {e}")))?;
        }

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::storage(format!("Failed to open storage slot: {e}")))?;

        file.lock_exclusive()
            .map_err(|e| Error::storage(format!("Failed to lock storage slot: {e}")))?;

        use std::io::Write;
        let mut file = file;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::storage(format!("Failed to write storage slot: {e}")))?;
        file.flush()
            .map_err(|e| Error::storage(format!("Failed to flush storage slot: {e}")))?;

        // Lock is released when the file handle drops
        debug!("Saved {} item(s) to {}", items.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn adapter(dir: &TempDir) -> StorageAdapter {
        StorageAdapter::at(dir.path().join(SLOT_FILENAME))
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(adapter(&dir).load().is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        // Scenario: slot contains "not json"
        let dir = TempDir::new().unwrap();
        let storage = adapter(&dir);
        std::fs::write(storage.path(), "not json").unwrap();
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_non_array_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = adapter(&dir);
        std::fs::write(storage.path(), r#"{"id":"1"}"#).unwrap();
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_filters_records_without_string_id() {
        let dir = TempDir::new().unwrap();
        let storage = adapter(&dir);
        std::fs::write(
            storage.path(),
            r#"[{"id":"1","title":"A","completed":false},
                {"title":"no id"},
                {"id":7,"title":"numeric id"},
                null,
                {"id":"2","title":"B","completed":true}]"#,
        )
        .unwrap();

        let items = storage.load();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert!(items[1].completed);
    }

    #[test]
    fn test_save_load_round_trip_preserves_order_and_extras() {
        let dir = TempDir::new().unwrap();
        let storage = adapter(&dir);

        let mut b = Item::new("b", "second");
        b.completed = true;
        b.extra.insert("note".into(), serde_json::json!("keep me"));
        let items = vec![Item::new("a", "first"), b, Item::new("c", "third")];

        storage.save(&items).unwrap();
        let loaded = storage.load();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_save_overwrites_prior_content() {
        let dir = TempDir::new().unwrap();
        let storage = adapter(&dir);

        storage
            .save(&[Item::new("a", "one"), Item::new("b", "two")])
            .unwrap();
        storage.save(&[Item::new("c", "three")]).unwrap();

        let loaded = storage.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "c");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let storage = StorageAdapter::at(dir.path().join("nested").join("deep").join("slot.json"));
        storage.save(&[Item::new("a", "one")]).unwrap();
        assert_eq!(storage.load().len(), 1);
    }
}
