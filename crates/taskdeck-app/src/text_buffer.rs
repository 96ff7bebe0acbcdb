//! Single-line editable text buffer with a character cursor
//!
//! Shared by the new-item input bar and the inline title editor. The
//! cursor is an index into the buffer's characters, not bytes, so
//! multi-byte input behaves.

/// A single line of editable text plus a cursor position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    /// Cursor position in characters (0 ..= char count)
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-filled with `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Take the text out, leaving an empty buffer
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let max = self.text.chars().count();
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_take() {
        let mut buf = TextBuffer::new();
        for c in "abc".chars() {
            buf.insert(c);
        }
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.take(), "abc");
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_with_text_places_cursor_at_end() {
        let buf = TextBuffer::with_text("hello");
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut buf = TextBuffer::with_text("ac");
        buf.move_left();
        buf.insert('b');
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_backspace() {
        let mut buf = TextBuffer::with_text("ab");
        buf.backspace();
        assert_eq!(buf.text(), "a");
        buf.backspace();
        buf.backspace(); // at start, no-op
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut buf = TextBuffer::with_text("abc");
        buf.move_home();
        buf.delete();
        assert_eq!(buf.text(), "bc");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut buf = TextBuffer::with_text("a");
        buf.delete();
        assert_eq!(buf.text(), "a");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut buf = TextBuffer::with_text("caf");
        buf.insert('é');
        assert_eq!(buf.text(), "café");
        buf.backspace();
        assert_eq!(buf.text(), "caf");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut buf = TextBuffer::with_text("ab");
        buf.move_right(); // already at end
        assert_eq!(buf.cursor(), 2);
        buf.move_home();
        buf.move_left(); // already at start
        assert_eq!(buf.cursor(), 0);
        buf.move_end();
        assert_eq!(buf.cursor(), 2);
    }
}
