//! Widgets for the taskdeck TUI

mod filter_tabs;
mod input_bar;
mod status_bar;
mod task_list;

pub use filter_tabs::FilterTabs;
pub use input_bar::InputBar;
pub use status_bar::StatusBar;
pub use task_list::TaskListView;

use ratatui::style::Style;
use ratatui::text::Span;

use crate::theme;

/// Split editable text into spans with a block cursor at `cursor`
/// (a character index; at the end of the text the cursor is drawn over
/// a space).
pub(crate) fn cursor_spans(text: &str, cursor: usize, base: Style) -> Vec<Span<'static>> {
    let chars: Vec<char> = text.chars().collect();
    let before: String = chars[..cursor.min(chars.len())].iter().collect();
    let under: String = chars
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = if cursor + 1 < chars.len() {
        chars[cursor + 1..].iter().collect()
    } else {
        String::new()
    };

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, base));
    }
    spans.push(Span::styled(under, theme::cursor()));
    if !after.is_empty() {
        spans.push(Span::styled(after, base));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_cursor_at_end_appends_space() {
        let spans = cursor_spans("ab", 2, Style::default());
        assert_eq!(flatten(&spans), "ab ");
    }

    #[test]
    fn test_cursor_mid_text_keeps_content() {
        let spans = cursor_spans("abc", 1, Style::default());
        assert_eq!(flatten(&spans), "abc");
        // The span under the cursor is the single character at index 1
        assert_eq!(spans[1].content.as_ref(), "b");
    }

    #[test]
    fn test_cursor_on_empty_text() {
        let spans = cursor_spans("", 0, Style::default());
        assert_eq!(flatten(&spans), " ");
    }
}
