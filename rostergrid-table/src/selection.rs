//! Selection stage
//!
//! Selection is keyed by position within the current page slice, not by row
//! identity. It is a per-page convenience: whenever the visible slice can
//! change (page navigation, page-size change, query change, sort change) the
//! set is silently invalidated rather than remapped.

use std::collections::BTreeSet;

/// Page-relative selection set.
///
/// Like `FocusState` and `ScrollState` in a widget tree, this is plain
/// user-managed state that persists across renders; the table clears it on
/// every transition that can change the visible slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the number of selected rows.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the page-relative index is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Returns `true` if every row of a page with `page_len` rows is selected.
    /// An empty page is never "all selected".
    pub fn all_selected(&self, page_len: usize) -> bool {
        page_len > 0 && (0..page_len).all(|index| self.indices.contains(&index))
    }

    /// Toggles one page-relative index.
    pub fn toggle(&mut self, index: usize) {
        if !self.indices.remove(&index) {
            self.indices.insert(index);
        }
    }

    /// Select-all semantics for the current page only: if every row of the
    /// page is selected, clears the selection; otherwise selects every row.
    pub fn toggle_all(&mut self, page_len: usize) {
        if self.all_selected(page_len) {
            self.indices.clear();
        } else {
            self.indices = (0..page_len).collect();
        }
    }

    /// Drops the selection without notification.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Selected page-relative indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}
