//! taskdeck-tui - Terminal UI for taskdeck
//!
//! Ratatui-based interface over the taskdeck-app state machine. Every
//! frame rebuilds the whole view from the current state; there is no
//! diffing and no retained widget state beyond the frame.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
