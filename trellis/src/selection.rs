//! Selection state management for widgets.
//!
//! Selection is tracked by row key rather than by position, so it stays
//! stable when rows are reordered by sorting. The set is insertion-ordered:
//! selection-changed notifications carry previously selected keys first,
//! followed by newly added keys.

/// Selection mode for widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// No selection allowed
    #[default]
    None,
    /// Single item selection
    Single,
    /// Multiple items can be selected
    Multiple,
}

/// Key-based selection state.
///
/// Keys are whatever the owning widget's row type uses as its stable
/// identifier. Entries are never purged automatically when the underlying
/// collection changes; a key whose row has disappeared simply stays in the
/// set without being visible until it is toggled off or the set is cleared.
#[derive(Debug, Clone)]
pub struct Selection<K> {
    /// Selected keys, in the order they were selected.
    selected: Vec<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
        }
    }
}

impl<K: PartialEq + Clone> Selection<K> {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected keys, in selection order.
    pub fn selected(&self) -> &[K] {
        &self.selected
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Get the number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Check whether the whole collection is selected.
    ///
    /// True iff the selection size equals the collection size and the
    /// collection is non-empty. This is a size comparison, not a membership
    /// check, matching the widget's all-selected header checkbox semantics.
    pub fn all_selected(&self, collection_len: usize) -> bool {
        collection_len > 0 && self.selected.len() == collection_len
    }

    /// Clear all selection.
    /// Returns the keys that were deselected.
    pub fn clear(&mut self) -> Vec<K> {
        std::mem::take(&mut self.selected)
    }

    /// Select a single key, clearing others.
    /// Returns (added, removed) keys.
    pub fn select(&mut self, key: &K) -> (Vec<K>, Vec<K>) {
        let was_selected = self.selected.contains(key);
        let removed: Vec<K> = self
            .selected
            .drain(..)
            .filter(|k| k != key)
            .collect();
        self.selected.push(key.clone());
        let added = if was_selected {
            vec![]
        } else {
            vec![key.clone()]
        };
        (added, removed)
    }

    /// Toggle selection of a key.
    /// Returns (added, removed) keys.
    pub fn toggle(&mut self, key: &K) -> (Vec<K>, Vec<K>) {
        if let Some(pos) = self.selected.iter().position(|k| k == key) {
            self.selected.remove(pos);
            (vec![], vec![key.clone()])
        } else {
            self.selected.push(key.clone());
            (vec![key.clone()], vec![])
        }
    }

    /// Make the selection exactly the given keys.
    ///
    /// Keys already selected keep their position; missing keys are appended
    /// in the order given; keys not in `all_keys` (stale entries) drop out.
    /// Returns (added, removed) keys.
    pub fn select_all(&mut self, all_keys: &[K]) -> (Vec<K>, Vec<K>) {
        let removed: Vec<K> = self
            .selected
            .iter()
            .filter(|k| !all_keys.contains(k))
            .cloned()
            .collect();
        self.selected.retain(|k| all_keys.contains(k));

        let mut added = Vec::new();
        for key in all_keys {
            if !self.selected.contains(key) {
                self.selected.push(key.clone());
                added.push(key.clone());
            }
        }
        (added, removed)
    }
}
