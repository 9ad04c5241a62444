//! # API Facade
//!
//! `RosterApi` is the single entry point for every surface (CLI today,
//! anything else tomorrow). It owns the record store plus the ephemeral
//! view state — search term, requested page, page size — and is the one
//! caller responsible for the clamping discipline: whenever the filter
//! results or the page size change, the requested page is clamped back
//! into range so an out-of-range page never persists.
//!
//! It returns structured types, never strings to a terminal; rendering is
//! the client's job.

use crate::error::Result;
use crate::export::{csv, report};
use crate::model::{Student, StudentFields, StudentId};
use crate::query::{clamp_page, filter, paginate};
use crate::stats::Stats;
use crate::store::StudentStore;
use crate::RosterError;
use serde::Serialize;
use std::io::Write;

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured result of a mutating operation: the records it touched plus
/// messages for the client to render.
#[derive(Debug, Default)]
pub struct Outcome {
    pub affected: Vec<Student>,
    pub messages: Vec<CmdMessage>,
}

impl Outcome {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, students: Vec<Student>) -> Self {
        self.affected = students;
        self
    }
}

/// One derived page of the registry, everything a list view needs.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub students: Vec<Student>,
    pub page: usize,
    pub total_pages: usize,
    /// Records passing the filter across all pages.
    pub total_matched: usize,
    /// 1-based position of the first shown record, 0 when nothing matched.
    pub showing_from: usize,
    /// 1-based position of the last shown record.
    pub showing_to: usize,
}

/// Ephemeral query state a view renders from.
#[derive(Debug, Clone)]
struct ViewState {
    search_term: String,
    page: usize,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub struct RosterApi {
    store: StudentStore,
    view: ViewState,
}

impl Default for RosterApi {
    fn default() -> Self {
        Self::new(StudentStore::new())
    }
}

impl RosterApi {
    pub fn new(store: StudentStore) -> Self {
        Self {
            store,
            view: ViewState::default(),
        }
    }

    /// A registry seeded with the fixed sample records.
    pub fn seeded() -> Self {
        Self::new(StudentStore::seeded())
    }

    pub fn store(&self) -> &StudentStore {
        &self.store
    }

    // --- View state ---

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
        self.reclamp();
    }

    pub fn search_term(&self) -> &str {
        &self.view.search_term
    }

    pub fn set_page(&mut self, page: usize) {
        self.view.page = clamp_page(page, self.total_pages());
    }

    /// Changing the page size jumps back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.view.page_size = page_size.max(1);
        self.view.page = 1;
    }

    fn total_pages(&self) -> usize {
        let matched = filter(self.store.students(), &self.view.search_term).len();
        matched.div_ceil(self.view.page_size)
    }

    fn reclamp(&mut self) {
        self.view.page = clamp_page(self.view.page, self.total_pages());
    }

    // --- Derived views ---

    /// Recompute the visible page from the current store snapshot and view
    /// state: filter, then paginate.
    pub fn current_page(&self) -> PageView {
        let matched = filter(self.store.students(), &self.view.search_term);
        let total_matched = matched.len();
        let page = paginate(&matched, self.view.page, self.view.page_size);
        let start = (self.view.page - 1) * self.view.page_size;

        PageView {
            showing_from: if page.items.is_empty() { 0 } else { start + 1 },
            showing_to: start + page.items.len(),
            students: page.items.into_iter().cloned().collect(),
            page: self.view.page,
            total_pages: page.total_pages,
            total_matched,
        }
    }

    /// Ids currently passing the filter, across all pages.
    pub fn visible_ids(&self) -> Vec<StudentId> {
        filter(self.store.students(), &self.view.search_term)
            .into_iter()
            .map(|s| s.id)
            .collect()
    }

    pub fn stats(&self) -> Stats {
        Stats::collect(self.store.students())
    }

    // --- Mutations ---

    pub fn add_student(&mut self, fields: StudentFields) -> Outcome {
        let student = self.store.create(fields);
        self.reclamp();

        let mut outcome = Outcome::default();
        outcome.add_message(CmdMessage::success(format!(
            "Student created ({}): {}",
            student.id, student.fields.name
        )));
        outcome.with_affected(vec![student])
    }

    pub fn update_student(&mut self, id: StudentId, fields: StudentFields) -> Result<Outcome> {
        self.store.update(id, fields)?;
        let student = self
            .store
            .get(id)
            .cloned()
            .ok_or(RosterError::StudentNotFound(id))?;

        let mut outcome = Outcome::default();
        outcome.add_message(CmdMessage::success(format!(
            "Student updated ({}): {}",
            student.id, student.fields.name
        )));
        Ok(outcome.with_affected(vec![student]))
    }

    pub fn delete_student(&mut self, id: StudentId) -> Outcome {
        let removed = self.store.get(id).cloned();
        self.store.delete(id);
        self.reclamp();

        let mut outcome = Outcome::default();
        match removed {
            Some(student) => {
                outcome.add_message(CmdMessage::success(format!(
                    "Student deleted ({}): {}",
                    student.id, student.fields.name
                )));
                outcome.with_affected(vec![student])
            }
            None => {
                outcome.add_message(CmdMessage::info(format!("No student with id {}.", id)));
                outcome
            }
        }
    }

    /// Remove every record in `ids` in one step. Same selection policy as
    /// the store: the whole selection set is cleared afterward.
    pub fn delete_many(&mut self, ids: &[StudentId]) -> Outcome {
        let affected: Vec<Student> = ids
            .iter()
            .filter_map(|id| self.store.get(*id).cloned())
            .collect();
        self.store.delete_many(ids);
        self.reclamp();

        let mut outcome = Outcome::default();
        if affected.is_empty() {
            outcome.add_message(CmdMessage::info("No matching students."));
        } else {
            outcome.add_message(CmdMessage::success(format!(
                "Deleted {} student(s).",
                affected.len()
            )));
        }
        outcome.with_affected(affected)
    }

    pub fn delete_selected(&mut self) -> Outcome {
        let removed = self.store.delete_selected();
        self.reclamp();

        let mut outcome = Outcome::default();
        if removed == 0 {
            outcome.add_message(CmdMessage::info("No students selected."));
        } else {
            outcome.add_message(CmdMessage::success(format!(
                "Deleted {} selected student(s).",
                removed
            )));
        }
        outcome
    }

    // --- Selection, scoped to the filtered view ---

    pub fn toggle_selected(&mut self, id: StudentId) {
        self.store.toggle_selected(id);
    }

    pub fn select_all_visible(&mut self) {
        let visible = self.visible_ids();
        self.store.select_all(&visible);
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    pub fn selected_count(&self) -> usize {
        self.store.selection().len()
    }

    pub fn is_all_selected(&self) -> bool {
        self.store.selection().is_all_selected(&self.visible_ids())
    }

    // --- Export ---

    /// An owned, ordered snapshot for external consumers: the full filtered
    /// set, or only the currently selected records.
    pub fn export_snapshot(&self, selected_only: bool) -> Vec<Student> {
        if selected_only {
            self.store.snapshot(Some(self.store.selection()))
        } else {
            let term = &self.view.search_term;
            filter(self.store.students(), term)
                .into_iter()
                .cloned()
                .collect()
        }
    }

    /// Snapshot first, then render: the writer never sees the live store,
    /// so a mutation during rendering cannot be observed mid-artifact.
    pub fn export_csv<W: Write>(&self, writer: &mut W, selected_only: bool) -> Result<usize> {
        let snapshot = self.export_snapshot(selected_only);
        if snapshot.is_empty() {
            return Err(RosterError::Export("no records to export".to_string()));
        }
        csv::write_csv(writer, &snapshot)?;
        Ok(snapshot.len())
    }

    pub fn export_report<W: Write>(
        &self,
        writer: &mut W,
        title: &str,
        selected_only: bool,
    ) -> Result<usize> {
        let snapshot = self.export_snapshot(selected_only);
        if snapshot.is_empty() {
            return Err(RosterError::Export("no records to export".to_string()));
        }
        report::write_report(writer, &snapshot, title)?;
        Ok(snapshot.len())
    }
}
