//! The record store: single source of truth for student records and the
//! current selection.
//!
//! The store owns the canonical ordered collection (insertion order, oldest
//! first; deletions preserve the relative order of survivors) plus the
//! selection set. Everything else in the crate works on read-only views or
//! owned snapshots derived from it. There is no cached view state in here:
//! after any mutation, callers re-derive the visible page through
//! [`crate::query`].

use crate::error::{Result, RosterError};
use crate::model::{seed_students, Student, StudentFields, StudentId};
use crate::selection::Selection;
use chrono::Utc;

/// Issues process-unique, monotonically increasing record ids.
///
/// Ids are millisecond timestamps, bumped past the previous id when two
/// creates land in the same millisecond. Never reused within a store.
#[derive(Debug, Clone, Default)]
struct IdGen {
    last: StudentId,
}

impl IdGen {
    fn starting_after(last: StudentId) -> Self {
        Self { last }
    }

    fn next(&mut self) -> StudentId {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }
}

#[derive(Debug, Clone, Default)]
pub struct StudentStore {
    students: Vec<Student>,
    selection: Selection,
    id_gen: IdGen,
}

impl StudentStore {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the fixed sample records.
    pub fn seeded() -> Self {
        Self::with_students(seed_students())
    }

    /// Build a store around existing records. The id generator is advanced
    /// past the highest id present so future creates stay unique.
    pub fn with_students(students: Vec<Student>) -> Self {
        let last = students.iter().map(|s| s.id).max().unwrap_or(0);
        Self {
            students,
            selection: Selection::new(),
            id_gen: IdGen::starting_after(last),
        }
    }

    /// Create a record from a complete field set, assigning a fresh id and
    /// appending it at the end of the collection. Field contents are taken
    /// as-is; validation happens before the call ever reaches the store.
    pub fn create(&mut self, fields: StudentFields) -> Student {
        let student = Student::new(self.id_gen.next(), fields);
        self.students.push(student.clone());
        student
    }

    /// Replace the record with the given id by a new complete field set.
    /// Identity is preserved; there is no partial merge. Fails with
    /// `StudentNotFound` and leaves the store untouched when the id is
    /// absent.
    pub fn update(&mut self, id: StudentId, fields: StudentFields) -> Result<()> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RosterError::StudentNotFound(id))?;
        student.fields = fields;
        Ok(())
    }

    /// Remove the record with the given id, if present, and evict the id
    /// from the selection set. Deleting an absent id is a no-op.
    pub fn delete(&mut self, id: StudentId) {
        self.students.retain(|s| s.id != id);
        self.selection.remove(id);
    }

    /// Remove every record whose id is in `ids`, in one step, then clear
    /// the entire selection set (bulk delete clears the whole selection,
    /// not just the deleted ids).
    pub fn delete_many(&mut self, ids: &[StudentId]) {
        self.students.retain(|s| !ids.contains(&s.id));
        self.selection.clear();
    }

    /// Remove all currently selected records. Same policy as
    /// [`delete_many`](Self::delete_many).
    pub fn delete_selected(&mut self) -> usize {
        let before = self.students.len();
        let selection = std::mem::take(&mut self.selection);
        self.students.retain(|s| !selection.contains(s.id));
        before - self.students.len()
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.get(id).is_some()
    }

    /// Read-only view of all records in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Flip selection of one id. Ignored for ids not present in the store,
    /// which keeps the selection a subset of stored ids.
    pub fn toggle_selected(&mut self, id: StudentId) {
        if self.contains(id) {
            self.selection.toggle(id);
        }
    }

    /// Replace the selection with exactly the given visible ids. Ids not
    /// present in the store are dropped.
    pub fn select_all(&mut self, visible: &[StudentId]) {
        let present: Vec<StudentId> = visible
            .iter()
            .copied()
            .filter(|id| self.contains(*id))
            .collect();
        self.selection.select_all(present);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// An owned, point-in-time copy of records for external consumers such
    /// as export. With `only` set, keeps just those ids; order is always
    /// the store's insertion order.
    pub fn snapshot(&self, only: Option<&Selection>) -> Vec<Student> {
        match only {
            None => self.students.clone(),
            Some(sel) => self
                .students
                .iter()
                .filter(|s| sel.contains(s.id))
                .cloned()
                .collect(),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: StudentStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: StudentStore::new(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: StudentStore::seeded(),
            }
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.create(fields(&format!("Student {}", i + 1)));
            }
            self
        }

        pub fn with_student(mut self, name: &str, language: &str, gender: &str) -> Self {
            let mut f = fields(name);
            f.language = language.to_string();
            f.gender = gender.to_string();
            self.store.create(f);
            self
        }
    }

    pub fn fields(name: &str) -> StudentFields {
        StudentFields {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "1234567890".to_string(),
            password: "secret99".to_string(),
            confirm_password: "secret99".to_string(),
            language: "English".to_string(),
            gender: "Female".to_string(),
            dob: "2000-01-01".to_string(),
        }
    }
}
