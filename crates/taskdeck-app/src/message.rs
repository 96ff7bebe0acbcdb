//! Message types for the application (TEA pattern)

use taskdeck_core::Filter;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Tick event for periodic redraws
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Item Store Operations
    // ─────────────────────────────────────────────────────────
    /// Submit the input bar draft as a new item
    SubmitDraft,
    /// Flip the selected item's completed state
    ToggleSelected,
    /// Delete the selected item
    DeleteSelected,
    /// Complete everything, or reactivate everything if all complete
    ToggleAll,
    /// Remove every completed item
    ClearCompleted,

    // ─────────────────────────────────────────────────────────
    // View Messages
    // ─────────────────────────────────────────────────────────
    /// Activate a specific filter tab
    SetFilter(Filter),
    /// Activate the next filter tab, wrapping
    CycleFilter,
    /// Move the selection up one visible row
    SelectUp,
    /// Move the selection down one visible row
    SelectDown,

    // ─────────────────────────────────────────────────────────
    // Mode Transitions
    // ─────────────────────────────────────────────────────────
    /// Focus the new-item input bar
    BeginInput,
    /// Leave the input bar, discarding the draft
    CancelInput,
    /// Start inline-editing the selected item
    BeginEdit,
    /// Commit the active edit session (Enter or focus loss)
    CommitEdit,
    /// Cancel the active edit session, discarding changes
    CancelEdit,
}
