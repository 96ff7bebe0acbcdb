//! Application state (Model in TEA pattern)

use taskdeck_core::{projection, Filter};

use crate::editor::EditSession;
use crate::store::ItemStore;
use crate::text_buffer::TextBuffer;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// List navigation: selection, toggling, filter switching
    #[default]
    Normal,

    /// Typing a new item into the input bar
    Input,

    /// Inline-editing the selected item's title
    Edit,
}

/// The whole application state. Constructed once at startup from the
/// storage adapter's load, held for the process lifetime.
#[derive(Debug)]
pub struct AppState {
    /// Authoritative collection plus persistence
    pub store: ItemStore,

    /// Active view filter; resets to All on every launch
    pub filter: Filter,

    pub ui_mode: UiMode,

    /// Selection index into the *projected* view, clamped after every
    /// mutation. The selected item is always re-resolved by id at
    /// event-handling time, never held by reference.
    pub selected: usize,

    /// Draft text for a new item (input bar)
    pub draft: TextBuffer,

    /// Some(_) exactly while `ui_mode == Edit`
    pub edit: Option<EditSession>,

    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            filter: Filter::default(),
            ui_mode: UiMode::default(),
            selected: 0,
            draft: TextBuffer::new(),
            edit: None,
            should_quit: false,
        }
    }

    /// Ids of the items visible under the active filter, in order
    pub fn visible_ids(&self) -> Vec<String> {
        projection::filtered(self.store.list(), self.filter)
            .iter()
            .map(|item| item.id.clone())
            .collect()
    }

    /// Id of the currently selected visible item, if any
    pub fn selected_id(&self) -> Option<String> {
        self.visible_ids().get(self.selected).cloned()
    }

    /// Keep the selection inside the projected view after mutations
    /// or filter changes shrink it.
    pub fn clamp_selection(&mut self) {
        let len = projection::filtered(self.store.list(), self.filter).len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
