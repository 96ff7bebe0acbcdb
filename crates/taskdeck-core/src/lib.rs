//! # taskdeck-core - Core Domain Types
//!
//! Foundation crate for taskdeck. Provides the task domain model, pure
//! list operations, view projection, identifier generation, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, rand, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Item`] - A single task record (id, title, completed)
//! - [`ItemPatch`] - Partial update for an item (title and/or completed)
//! - [`Filter`] - The active view selector (All, Active, Completed)
//!
//! ### Collection (`list`)
//! - [`TaskList`] - Ordered, insertion-preserving collection of items
//!   with the mutation operations (add, update, remove, toggle_all,
//!   clear_completed)
//!
//! ### Projection (`projection`)
//! - [`filtered()`] - Order-preserving filtered view of a list
//! - [`remaining()`] - Count of items not yet completed
//! - [`summary()`] - "N item(s) left" summary line
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use taskdeck_core::prelude::*;
//! ```

pub mod error;
pub mod id;
pub mod list;
pub mod logging;
pub mod projection;
pub mod types;

/// Prelude for common imports used throughout all taskdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use id::next_id;
pub use list::TaskList;
pub use projection::{filtered, remaining, summary};
pub use types::{Filter, Item, ItemPatch};
