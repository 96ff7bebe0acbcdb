//! Colors and shared styles for the TUI

use ratatui::style::{Color, Modifier, Style};

// ─────────────────────────────────────────────────────────────────────────────
// Palette
// ─────────────────────────────────────────────────────────────────────────────

pub const ACCENT: Color = Color::Yellow;
pub const MUTED: Color = Color::DarkGray;
pub const TEXT: Color = Color::White;
pub const SELECTION_BG: Color = Color::Rgb(40, 44, 52);
pub const DONE: Color = Color::DarkGray;

// ─────────────────────────────────────────────────────────────────────────────
// Styles
// ─────────────────────────────────────────────────────────────────────────────

pub fn header() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    Style::default().fg(TEXT)
}

pub fn title_done() -> Style {
    Style::default().fg(DONE).add_modifier(Modifier::CROSSED_OUT)
}

pub fn selected_row() -> Style {
    Style::default().bg(SELECTION_BG)
}

pub fn marker() -> Style {
    Style::default().fg(ACCENT)
}

pub fn tab_active() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(MUTED)
}

pub fn hint() -> Style {
    Style::default().fg(MUTED)
}

pub fn cursor() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn input_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}
