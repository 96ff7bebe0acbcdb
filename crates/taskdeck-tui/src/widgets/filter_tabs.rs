//! Filter tab row: All / Active / Completed

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use taskdeck_core::Filter;

use crate::theme;

/// One-line tab bar; exactly one tab is highlighted as active.
pub struct FilterTabs {
    active: Filter,
}

impl FilterTabs {
    pub fn new(active: Filter) -> Self {
        Self { active }
    }
}

impl Widget for FilterTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, filter) in Filter::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", theme::hint()));
            }
            let style = if *filter == self.active {
                theme::tab_active()
            } else {
                theme::tab_inactive()
            };
            spans.push(Span::styled(format!("[{}]", filter.label()), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
