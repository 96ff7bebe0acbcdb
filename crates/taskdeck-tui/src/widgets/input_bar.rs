//! New-item input bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use taskdeck_app::TextBuffer;

use super::cursor_spans;
use crate::theme;

/// Bordered single-line input for creating a new task
pub struct InputBar<'a> {
    draft: &'a TextBuffer,
    focused: bool,
}

impl<'a> InputBar<'a> {
    pub fn new(draft: &'a TextBuffer, focused: bool) -> Self {
        Self { draft, focused }
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" New task ")
            .borders(Borders::ALL)
            .border_style(theme::input_border(self.focused));

        let line = if self.focused {
            Line::from(cursor_spans(
                self.draft.text(),
                self.draft.cursor(),
                theme::title(),
            ))
        } else if self.draft.is_empty() {
            Line::from(Span::styled("press a to add a task", theme::hint()))
        } else {
            Line::from(Span::styled(self.draft.text().to_string(), theme::title()))
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
