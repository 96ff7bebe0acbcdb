//! Full-frame render tests against a test backend

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::TempDir;

use taskdeck_app::{update, AppState, InputKey, ItemStore, Message, StorageAdapter};
use taskdeck_core::Filter;

use super::view;

fn state_with_items(dir: &TempDir, titles: &[&str]) -> AppState {
    let storage = StorageAdapter::at(dir.path().join("tasks.v1.json"));
    let mut state = AppState::new(ItemStore::open(storage));
    for title in titles {
        state.store.add(title);
    }
    state
}

fn draw(state: &AppState) -> String {
    let backend = TestBackend::new(60, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| view(frame, state)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_frame_shows_items_and_summary() {
    let dir = TempDir::new().unwrap();
    let state = state_with_items(&dir, &["write tests", "ship it"]);

    let frame = draw(&state);
    assert!(frame.contains("taskdeck"));
    assert!(frame.contains("[ ] write tests"));
    assert!(frame.contains("[ ] ship it"));
    assert!(frame.contains("2 items left"));
    assert!(frame.contains("[All]"));
}

#[test]
fn test_singular_summary_for_one_remaining() {
    let dir = TempDir::new().unwrap();
    let state = state_with_items(&dir, &["only one"]);
    assert!(draw(&state).contains("1 item left"));
}

#[test]
fn test_completed_filter_hides_active_rows() {
    let dir = TempDir::new().unwrap();
    let mut state = state_with_items(&dir, &["active task", "done task"]);
    update(&mut state, Message::Key(InputKey::Char('j')));
    update(&mut state, Message::Key(InputKey::Char(' ')));
    update(&mut state, Message::SetFilter(Filter::Completed));

    let frame = draw(&state);
    assert!(frame.contains("[x] done task"));
    assert!(!frame.contains("active task"));
}

#[test]
fn test_edit_mode_renders_buffer_in_row() {
    let dir = TempDir::new().unwrap();
    let mut state = state_with_items(&dir, &["abc"]);
    update(&mut state, Message::Key(InputKey::Char('e')));
    update(&mut state, Message::Key(InputKey::Backspace));

    let frame = draw(&state);
    assert!(frame.contains("[ ] ab"));
    assert!(!frame.contains("abc"));
}

#[test]
fn test_render_survives_empty_collection() {
    let dir = TempDir::new().unwrap();
    let state = state_with_items(&dir, &[]);
    let frame = draw(&state);
    assert!(frame.contains("0 items left"));
}
