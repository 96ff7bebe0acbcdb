//! View projection: pure derivation of the visible subset and summary
//!
//! No side effects and no mutation; the renderer calls these on every
//! frame against the authoritative list.

use crate::list::TaskList;
use crate::types::{Filter, Item};

/// The order-preserving subsequence of items visible under `filter`
pub fn filtered<'a>(list: &'a TaskList, filter: Filter) -> Vec<&'a Item> {
    list.items().iter().filter(|i| filter.matches(i)).collect()
}

/// Number of items not yet completed
pub fn remaining(list: &TaskList) -> usize {
    list.items().iter().filter(|i| !i.completed).count()
}

/// Summary line for the status bar. Singular iff the count is exactly 1.
pub fn summary(remaining: usize) -> String {
    if remaining == 1 {
        "1 item left".to_string()
    } else {
        format!("{remaining} items left")
    }
}
