//! Session-scoped group override store.
//!
//! Users can pull an arbitrary set of rows out of their default group and
//! into a named custom group. The store holds those choices for the life
//! of the session, keyed by row id, and survives swaps of the default
//! grouping selector: a row explicitly placed in group "X" stays in "X"
//! whether the grid is grouped by location or by contract month.
//!
//! "No override" is tagged absence (the entry is removed), not an
//! empty-string label. The observed grid used `""` as its ungroup marker,
//! which collides with a user group legitimately named `""`; removal keeps
//! the two distinguishable.

use parking_lot::RwLock;
use std::collections::HashMap;
use vargrid_core::RowId;

/// In-memory mapping from row id to a user-chosen group label.
///
/// Thread-safe: each batch update is applied under one write lock, so a
/// concurrent reader sees either none or all of the entries of one
/// `assign`/`clear` call, never a partially applied batch.
///
/// # Example
///
/// ```rust
/// use vargrid_engine::GroupOverrideStore;
/// use vargrid_core::RowId;
///
/// let store = GroupOverrideStore::new();
/// let ids = vec![RowId::from("R1"), RowId::from("R2")];
/// store.assign(&ids, "Spread Book");
/// assert_eq!(store.effective_label(&ids[0], "HOU"), "Spread Book");
///
/// store.clear(&ids[..1]);
/// assert_eq!(store.effective_label(&ids[0], "HOU"), "HOU");
/// ```
#[derive(Debug, Default)]
pub struct GroupOverrideStore {
    entries: RwLock<HashMap<RowId, String>>,
}

impl GroupOverrideStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns every id in the batch to `label`, overwriting any prior
    /// override for those ids.
    ///
    /// An empty batch is a no-op. The whole batch is applied under one
    /// write lock.
    pub fn assign(&self, ids: &[RowId], label: &str) {
        if ids.is_empty() {
            return;
        }
        let mut entries = self.entries.write();
        for id in ids {
            entries.insert(id.clone(), label.to_string());
        }
    }

    /// Removes the override for every id in the batch, restoring the
    /// default selector label for those rows.
    ///
    /// Ids without an override are ignored. An empty batch is a no-op.
    pub fn clear(&self, ids: &[RowId]) {
        if ids.is_empty() {
            return;
        }
        let mut entries = self.entries.write();
        for id in ids {
            entries.remove(id);
        }
    }

    /// Resolves the label used to bucket a row: the override if one
    /// exists, else the selector-provided fallback.
    #[must_use]
    pub fn effective_label(&self, id: &RowId, fallback: &str) -> String {
        self.entries
            .read()
            .get(id)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Returns the override for a row, if any.
    #[must_use]
    pub fn override_for(&self, id: &RowId) -> Option<String> {
        self.entries.read().get(id).cloned()
    }

    /// Returns a point-in-time copy of the full mapping.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<RowId, String> {
        self.entries.read().clone()
    }

    /// Returns the number of overridden rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no row is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops all overrides.
    pub fn reset(&self) {
        self.entries.write().clear();
    }
}
