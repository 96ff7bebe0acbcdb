//! Status bar: remaining-count summary plus key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use taskdeck_app::UiMode;

use crate::theme;

/// One-line summary and mode-appropriate key hints
pub struct StatusBar<'a> {
    summary: &'a str,
    mode: UiMode,
}

impl<'a> StatusBar<'a> {
    pub fn new(summary: &'a str, mode: UiMode) -> Self {
        Self { summary, mode }
    }

    fn hints(&self) -> &'static str {
        match self.mode {
            UiMode::Normal => "a add  e edit  space done  d del  t all  c clear  tab filter  q quit",
            UiMode::Input => "enter add  esc back",
            UiMode::Edit => "enter save  esc cancel",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(format!(" {}", self.summary), theme::header()),
            Span::raw("  "),
            Span::styled(self.hints(), theme::hint()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
