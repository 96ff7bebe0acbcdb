//! # taskdeck-app - Application State and Orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`] model, a [`Message`] enum, and an
//! [`update`] function that handles every transition. It also owns the
//! storage adapter (the durable JSON slot), the persisting item store,
//! the inline edit session state machine, and settings loading.
//!
//! The crate is independent of any terminal library; keyboard input
//! arrives as the abstract [`InputKey`] type.

pub mod config;
pub mod editor;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod storage;
pub mod store;
pub mod text_buffer;

// Re-export primary types
pub use config::Settings;
pub use editor::{EditOutcome, EditSession};
pub use handler::update;
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};
pub use storage::StorageAdapter;
pub use store::ItemStore;
pub use text_buffer::TextBuffer;
