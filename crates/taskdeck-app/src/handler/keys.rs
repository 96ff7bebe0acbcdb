//! Key event handlers for the three UI modes
//!
//! Buffer-editing keys (characters, cursor movement) mutate the state
//! directly and return `None`; everything that touches the item store
//! or switches modes is returned as a semantic [`Message`] for the
//! update function to apply.

use taskdeck_core::Filter;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Map a key press to a follow-up message, editing buffers in place
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_normal_key(state, key),
        UiMode::Input => handle_input_key(state, key),
        UiMode::Edit => handle_edit_key(state, key),
    }
}

fn handle_normal_key(_state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('a') | InputKey::Char('n') | InputKey::Char('i') => {
            Some(Message::BeginInput)
        }

        InputKey::Char('j') | InputKey::Down => Some(Message::SelectDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectUp),

        InputKey::Char(' ') | InputKey::Char('x') => Some(Message::ToggleSelected),
        InputKey::Char('e') | InputKey::Enter => Some(Message::BeginEdit),
        InputKey::Char('d') | InputKey::Delete => Some(Message::DeleteSelected),

        InputKey::Char('t') => Some(Message::ToggleAll),
        InputKey::Char('c') => Some(Message::ClearCompleted),

        InputKey::Char('1') => Some(Message::SetFilter(Filter::All)),
        InputKey::Char('2') => Some(Message::SetFilter(Filter::Active)),
        InputKey::Char('3') => Some(Message::SetFilter(Filter::Completed)),
        InputKey::Tab => Some(Message::CycleFilter),

        _ => None,
    }
}

fn handle_input_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitDraft),
        InputKey::Esc => Some(Message::CancelInput),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(c) => {
            state.draft.insert(c);
            None
        }
        InputKey::Backspace => {
            state.draft.backspace();
            None
        }
        InputKey::Delete => {
            state.draft.delete();
            None
        }
        InputKey::Left => {
            state.draft.move_left();
            None
        }
        InputKey::Right => {
            state.draft.move_right();
            None
        }
        InputKey::Home => {
            state.draft.move_home();
            None
        }
        InputKey::End => {
            state.draft.move_end();
            None
        }

        _ => None,
    }
}

fn handle_edit_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let Some(session) = state.edit.as_mut() else {
        // Stale mode without a session; fall back to Normal handling
        return Some(Message::CancelEdit);
    };

    match key {
        InputKey::Enter => Some(Message::CommitEdit),
        InputKey::Esc => Some(Message::CancelEdit),
        // Any focus-losing key commits, never cancels
        InputKey::Tab | InputKey::Up | InputKey::Down => Some(Message::CommitEdit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(c) => {
            session.buffer_mut().insert(c);
            None
        }
        InputKey::Backspace => {
            session.buffer_mut().backspace();
            None
        }
        InputKey::Delete => {
            session.buffer_mut().delete();
            None
        }
        InputKey::Left => {
            session.buffer_mut().move_left();
            None
        }
        InputKey::Right => {
            session.buffer_mut().move_right();
            None
        }
        InputKey::Home => {
            session.buffer_mut().move_home();
            None
        }
        InputKey::End => {
            session.buffer_mut().move_end();
            None
        }

        _ => None,
    }
}
