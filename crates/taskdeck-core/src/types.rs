//! Domain types: items, patches, and the view filter

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single task record. The unit of persistence is a sequence of these.
///
/// Unknown fields found in a persisted record are collected into `extra`
/// and written back out on the next save, so records produced by newer
/// versions survive a load/mutate/save cycle here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique identifier, assigned at creation, never reused
    pub id: String,

    /// Task text. Non-empty and trimmed after every completed operation.
    #[serde(default)]
    pub title: String,

    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,

    /// Pass-through for fields this version does not understand
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Create a new item with a fresh id and the given (already trimmed) title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
            extra: Map::new(),
        }
    }
}

/// Partial update for a single item. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl ItemPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}

/// The active view selector. Session-local only; never persisted, so a
/// fresh process always starts at [`Filter::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in tab order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Whether an item is visible under this filter
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    /// Next filter in tab order, wrapping around
    pub fn next(&self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Label shown on the filter tab
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new("abc", "Buy milk");
        assert_eq!(item.id, "abc");
        assert_eq!(item.title, "Buy milk");
        assert!(!item.completed);
        assert!(item.extra.is_empty());
    }

    #[test]
    fn test_item_unknown_fields_round_trip() {
        let json = r#"{"id":"1","title":"A","completed":false,"color":"red"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.extra.get("color").unwrap(), "red");

        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out["color"], "red");
    }

    #[test]
    fn test_item_missing_optional_fields() {
        let item: Item = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(item.title, "");
        assert!(!item.completed);
    }

    #[test]
    fn test_filter_matches() {
        let mut item = Item::new("1", "A");
        assert!(Filter::All.matches(&item));
        assert!(Filter::Active.matches(&item));
        assert!(!Filter::Completed.matches(&item));

        item.completed = true;
        assert!(Filter::All.matches(&item));
        assert!(!Filter::Active.matches(&item));
        assert!(Filter::Completed.matches(&item));
    }

    #[test]
    fn test_filter_cycle_wraps() {
        assert_eq!(Filter::All.next(), Filter::Active);
        assert_eq!(Filter::Active.next(), Filter::Completed);
        assert_eq!(Filter::Completed.next(), Filter::All);
    }

    #[test]
    fn test_filter_default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }
}
