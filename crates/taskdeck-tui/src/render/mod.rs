//! Main render/view function (View in TEA pattern)
//!
//! Full-replace strategy: the whole frame is rebuilt from the current
//! state on every pass. Nothing survives between frames.

#[cfg(test)]
mod tests;

use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use taskdeck_app::{AppState, UiMode};
use taskdeck_core::projection;

use crate::layout;
use crate::theme;
use crate::widgets::{FilterTabs, InputBar, StatusBar, TaskListView};

/// Render the complete UI
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled(" taskdeck", theme::header())),
        areas.header,
    );

    frame.render_widget(
        InputBar::new(&state.draft, state.ui_mode == UiMode::Input),
        areas.input,
    );

    let visible = projection::filtered(state.store.list(), state.filter);
    frame.render_widget(
        TaskListView::new(&visible, state.selected).edit(state.edit.as_ref()),
        areas.list,
    );

    frame.render_widget(FilterTabs::new(state.filter), areas.tabs);

    let summary = projection::summary(projection::remaining(state.store.list()));
    frame.render_widget(StatusBar::new(&summary, state.ui_mode), areas.status);
}
