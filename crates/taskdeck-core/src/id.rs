//! Item identifier generation
//!
//! Ids only need to be unique within a single collection's lifetime.
//! A random 64-bit value combined with the current epoch-millisecond
//! timestamp is collision-resistant well beyond that requirement.

use rand::Rng;

/// Generate a fresh opaque item id.
///
/// Format: 16 hex digits of randomness followed by the hex-encoded
/// Unix-epoch milliseconds. Never empty, monotone in its time suffix.
pub fn next_id() -> String {
    let random: u64 = rand::thread_rng().gen();
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    format!("{random:016x}{millis:x}")
}
