//! Derived views over the store.
//!
//! Both functions are pure: they read records and never mutate them.

use crate::{Record, RecordId};

/// Records matching `search`, in store order.
///
/// A record matches when `search` is empty or any of its text fields contains
/// it, ignoring case on both sides.
pub fn filter(records: &[Record], search: &str) -> Vec<Record> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|r| r.matches(&needle))
        .cloned()
        .collect()
}

/// The first record in `view` with the given id.
pub fn selected(view: &[Record], id: RecordId) -> Option<&Record> {
    view.iter().find(|r| r.id == id)
}
