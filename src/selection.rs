use crate::model::StudentId;
use std::collections::BTreeSet;

/// The set of currently selected record ids.
///
/// Kept as an ordered set so snapshots of selected records iterate
/// deterministically. Consistency with the store (selection is always a
/// subset of stored ids) is the store's responsibility: it evicts ids here
/// whenever it deletes records. An id selected and later hidden by a filter
/// stays selected until it is deleted or the selection is cleared.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: BTreeSet<StudentId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of a single id.
    pub fn toggle(&mut self, id: StudentId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Replace the selection with exactly the given ids.
    ///
    /// "Select all" is scoped to the ids currently passing the filter,
    /// not the whole collection.
    pub fn select_all<I: IntoIterator<Item = StudentId>>(&mut self, visible: I) {
        self.ids = visible.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop one id, typically because its record was deleted.
    pub fn remove(&mut self, id: StudentId) {
        self.ids.remove(&id);
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = StudentId> + '_ {
        self.ids.iter().copied()
    }

    /// True iff the selection is non-empty and equals the visible set
    /// exactly. Drives the "select all" checkbox state.
    pub fn is_all_selected(&self, visible: &[StudentId]) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        let visible: BTreeSet<StudentId> = visible.iter().copied().collect();
        self.ids == visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut sel = Selection::new();
        sel.toggle(7);
        assert!(sel.contains(7));
        sel.toggle(7);
        assert!(!sel.contains(7));
        assert!(sel.is_empty());
    }

    #[test]
    fn select_all_replaces_prior_selection() {
        let mut sel = Selection::new();
        sel.toggle(1);
        sel.toggle(99);
        sel.select_all([2, 3]);
        assert_eq!(sel.len(), 2);
        assert!(!sel.contains(1));
        assert!(!sel.contains(99));
        assert!(sel.contains(2));
        assert!(sel.contains(3));
    }

    #[test]
    fn is_all_selected_requires_exact_set_equality() {
        let mut sel = Selection::new();
        assert!(!sel.is_all_selected(&[]));

        sel.select_all([1, 2]);
        assert!(sel.is_all_selected(&[1, 2]));
        assert!(sel.is_all_selected(&[2, 1]));
        assert!(!sel.is_all_selected(&[1, 2, 3]));
        assert!(!sel.is_all_selected(&[1]));

        // Same length but different members must not count as "all".
        assert!(!sel.is_all_selected(&[1, 3]));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut sel = Selection::new();
        sel.select_all([1, 2, 3]);
        sel.clear();
        assert!(sel.is_empty());
    }
}
