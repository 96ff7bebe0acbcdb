//! The task list: one row per visible item
//!
//! Rows are rebuilt from the projection on every frame. The row being
//! inline-edited shows the live edit buffer with a cursor instead of
//! the stored title.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

use taskdeck_app::EditSession;
use taskdeck_core::Item;

use super::cursor_spans;
use crate::theme;

/// Projected, filtered view of the collection
pub struct TaskListView<'a> {
    items: &'a [&'a Item],
    selected: usize,
    edit: Option<&'a EditSession>,
}

impl<'a> TaskListView<'a> {
    pub fn new(items: &'a [&'a Item], selected: usize) -> Self {
        Self {
            items,
            selected,
            edit: None,
        }
    }

    /// Attach the active edit session, if any
    pub fn edit(mut self, edit: Option<&'a EditSession>) -> Self {
        self.edit = edit;
        self
    }

    fn row(&self, item: &Item) -> Line<'static> {
        let marker = if item.completed { "[x] " } else { "[ ] " };
        let mut spans = vec![Span::styled(marker.to_string(), theme::marker())];

        match self.edit {
            Some(session) if session.item_id() == item.id => {
                spans.extend(cursor_spans(
                    session.buffer().text(),
                    session.buffer().cursor(),
                    theme::title(),
                ));
            }
            _ => {
                let style = if item.completed {
                    theme::title_done()
                } else {
                    theme::title()
                };
                spans.push(Span::styled(item.title.clone(), style));
            }
        }

        Line::from(spans)
    }
}

impl Widget for TaskListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(self.row(item)))
            .collect();

        let list = List::new(rows).highlight_style(theme::selected_row());

        let mut list_state = ListState::default();
        if !self.items.is_empty() {
            list_state.select(Some(self.selected.min(self.items.len() - 1)));
        }
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
