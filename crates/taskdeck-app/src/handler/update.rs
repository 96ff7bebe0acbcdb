//! Main update function - handles state transitions (TEA pattern)
//!
//! Every message runs to completion, including its persist side effect,
//! before the event loop polls again; the renderer then rebuilds the
//! whole view from the resulting state.

use taskdeck_core::prelude::*;
use taskdeck_core::ItemPatch;

use crate::editor::{EditOutcome, EditSession};
use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::keys::handle_key;

/// Process a message and update state
pub fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Key(key) => {
            if let Some(follow_up) = handle_key(state, key) {
                update(state, follow_up);
            }
        }

        Message::Tick => {}

        Message::Quit => {
            state.should_quit = true;
        }

        // ─────────────────────────────────────────────────────
        // Item Store Operations
        // ─────────────────────────────────────────────────────
        Message::SubmitDraft => {
            let raw = state.draft.take();
            // Blank submissions are a silent no-op; the input stays
            // focused either way, matching browser-form behaviour.
            state.store.add(&raw);
            state.clamp_selection();
        }

        Message::ToggleSelected => {
            if let Some(id) = state.selected_id() {
                state.store.toggle(&id);
                state.clamp_selection();
            }
        }

        Message::DeleteSelected => {
            if let Some(id) = state.selected_id() {
                state.store.remove(&id);
                state.clamp_selection();
            }
        }

        Message::ToggleAll => {
            state.store.toggle_all();
            state.clamp_selection();
        }

        Message::ClearCompleted => {
            state.store.clear_completed();
            state.clamp_selection();
        }

        // ─────────────────────────────────────────────────────
        // View Messages
        // ─────────────────────────────────────────────────────
        Message::SetFilter(filter) => {
            state.filter = filter;
            state.clamp_selection();
        }

        Message::CycleFilter => {
            state.filter = state.filter.next();
            state.clamp_selection();
        }

        Message::SelectUp => {
            state.selected = state.selected.saturating_sub(1);
        }

        Message::SelectDown => {
            state.selected += 1;
            state.clamp_selection();
        }

        // ─────────────────────────────────────────────────────
        // Mode Transitions
        // ─────────────────────────────────────────────────────
        Message::BeginInput => {
            state.ui_mode = UiMode::Input;
        }

        Message::CancelInput => {
            state.draft.clear();
            state.ui_mode = UiMode::Normal;
        }

        Message::BeginEdit => {
            let Some(id) = state.selected_id() else {
                return;
            };
            // Resolve the item by id at event time; the row may have
            // changed since the last render.
            if let Some(item) = state.store.list().get(&id) {
                state.edit = Some(EditSession::begin(item));
                state.ui_mode = UiMode::Edit;
            }
        }

        Message::CommitEdit => {
            if let Some(session) = state.edit.take() {
                match session.commit() {
                    EditOutcome::Rename { id, title } => {
                        state.store.update(&id, ItemPatch::title(title));
                    }
                    EditOutcome::Delete { id } => {
                        debug!("Edit committed empty, deleting item {id}");
                        state.store.remove(&id);
                    }
                }
            }
            state.ui_mode = UiMode::Normal;
            state.clamp_selection();
        }

        Message::CancelEdit => {
            state.edit = None;
            state.ui_mode = UiMode::Normal;
        }
    }
}
