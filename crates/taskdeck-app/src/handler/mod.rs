//! Handler module - TEA update function and key handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Per-mode key-to-message mapping and buffer editing

pub(crate) mod keys;
pub(crate) mod update;


// Re-export main entry point
pub use update::update;
