//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// App title bar
    pub header: Rect,

    /// New-item input bar (bordered)
    pub input: Rect,

    /// Task list (remaining space)
    pub list: Rect,

    /// Filter tabs row
    pub tabs: Rect,

    /// Summary + key hints row
    pub status: Rect,
}

/// Split the screen into the fixed vertical bands of the main view
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = [
        Constraint::Length(1), // Header
        Constraint::Length(3), // Input bar (bordered)
        Constraint::Min(1),    // Task list
        Constraint::Length(1), // Filter tabs
        Constraint::Length(1), // Status bar
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        input: chunks[1],
        list: chunks[2],
        tabs: chunks[3],
        status: chunks[4],
    }
}
