//! Optimistic cell editing with rollback.
//!
//! `GridEditor` owns the mutable dataset and all per-cell edit state:
//! - at most one active edit at a time across the whole grid
//! - commits write optimistically, then validate asynchronously
//! - a rejected validation reverts the single field and flags a
//!   transient error marker
//!
//! Validation runs through the abstract [`Validator`] collaborator;
//! resolution and marker expiry are driven by [`GridEditor::tick`] with
//! explicit timestamps, so the machine itself never reads a clock.

pub(crate) mod mutation;
mod validation;

use std::collections::HashMap;

use crate::types::{CellValue, Row};

pub use validation::{MockValidator, TaskHandle, ValidationOutcome, Validator, MOCK_LATENCY_MS};

/// Visual lifetime of an error marker (ms), independent of validation
/// duration.
pub const ERROR_MARKER_MS: f64 = 2000.0;

/// The single in-progress edit, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEdit {
    pub row_id: String,
    pub column_id: String,
    /// In-progress value, updated as the user types.
    pub draft: CellValue,
}

/// One committed edit awaiting its validation outcome.
#[derive(Debug)]
struct PendingCommit {
    task: TaskHandle,
    row_id: String,
    column_id: String,
    /// Value to restore on rejection. `None` means the field was absent
    /// before the commit.
    revert_to: Option<CellValue>,
    /// Commit generation for this cell at submit time.
    generation: u64,
}

/// Edit state machine. Exclusive owner of the row dataset and the
/// error-marker set.
pub struct GridEditor {
    rows: Vec<Row>,
    /// Bumped on every dataset write; readers key recomputation on it.
    data_version: u64,
    editing: Option<ActiveEdit>,
    validator: Box<dyn Validator>,
    pending: Vec<PendingCommit>,
    /// Latest commit generation per cell. Only the validation matching
    /// the latest generation may write back, so racing commits on the
    /// same cell cannot resurrect a stale value.
    generations: HashMap<(String, String), u64>,
    /// Error markers keyed by (row id, column id), carrying their
    /// absolute expiry timestamp.
    errors: HashMap<(String, String), f64>,
}

impl GridEditor {
    /// Create an editor over the given dataset with the default
    /// validation backend.
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self::with_validator(rows, Box::new(MockValidator::default()))
    }

    /// Create an editor with a custom validation backend.
    #[must_use]
    pub fn with_validator(rows: Vec<Row>, validator: Box<dyn Validator>) -> Self {
        Self {
            rows,
            data_version: 0,
            editing: None,
            validator,
            pending: Vec::new(),
            generations: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    /// The dataset in source order. Readers get a stable snapshot: in
    /// the single-threaded event model no write can interleave with a
    /// borrow of this slice.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Current dataset version. Changes on every write (optimistic or
    /// rollback).
    #[must_use]
    pub fn data_version(&self) -> u64 {
        self.data_version
    }

    /// The active edit, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&ActiveEdit> {
        self.editing.as_ref()
    }

    /// Begin editing a cell. Any prior uncommitted draft is silently
    /// abandoned (its in-flight validation, if one was already
    /// committed, is unaffected). Unknown row ids are stale UI events
    /// and ignored.
    pub fn start_edit(&mut self, row_id: &str, column_id: &str) {
        let Some(row) = self.rows.iter().find(|r| r.id == row_id) else {
            return;
        };
        let draft = row.get(column_id).cloned().unwrap_or(CellValue::Null);
        self.editing = Some(ActiveEdit {
            row_id: row_id.to_string(),
            column_id: column_id.to_string(),
            draft,
        });
    }

    /// Update the in-progress value of the active edit.
    pub fn set_draft(&mut self, value: CellValue) {
        if let Some(edit) = self.editing.as_mut() {
            edit.draft = value;
        }
    }

    /// Abandon the active edit. No dataset mutation, no validation call,
    /// and no effect on validations already in flight.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Commit the active edit: close the edit UI synchronously, write
    /// `new_value` optimistically, and submit it for validation.
    ///
    /// A commit that does not match the active edit (double blur, stale
    /// timer) is a no-op. Returns whether a commit was actually issued.
    pub fn commit_edit(
        &mut self,
        row_id: &str,
        column_id: &str,
        new_value: CellValue,
        old_value: Option<CellValue>,
        now_ms: f64,
    ) -> bool {
        let matches_active = self
            .editing
            .as_ref()
            .is_some_and(|e| e.row_id == row_id && e.column_id == column_id);
        if !matches_active {
            return false;
        }
        self.editing = None;

        // Optimistic write, visible before this function returns.
        if mutation::apply_field_edit(&mut self.rows, row_id, column_id, Some(new_value.clone()))
            .is_none()
        {
            return false;
        }
        self.data_version += 1;

        let cell = (row_id.to_string(), column_id.to_string());
        let generation = self.generations.entry(cell).or_insert(0);
        *generation += 1;
        let generation = *generation;

        let task = self.validator.submit(&new_value, now_ms);
        self.pending.push(PendingCommit {
            task,
            row_id: row_id.to_string(),
            column_id: column_id.to_string(),
            revert_to: old_value,
            generation,
        });
        true
    }

    /// Drive pending validations and marker expiry. Returns whether any
    /// observable state changed (dataset rollback, marker added or
    /// expired).
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let mut changed = false;

        let mut still_pending = Vec::with_capacity(self.pending.len());
        for commit in self.pending.drain(..) {
            match self.validator.poll(commit.task, now_ms) {
                None => still_pending.push(commit),
                Some(ValidationOutcome::Accepted) => {
                    // The optimistic value stands as final.
                }
                Some(ValidationOutcome::Rejected) => {
                    let cell = (commit.row_id.clone(), commit.column_id.clone());
                    let is_latest = self.generations.get(&cell) == Some(&commit.generation);
                    if is_latest {
                        mutation::apply_field_edit(
                            &mut self.rows,
                            &commit.row_id,
                            &commit.column_id,
                            commit.revert_to,
                        );
                        self.data_version += 1;
                        self.errors.insert(cell, now_ms + ERROR_MARKER_MS);
                        changed = true;
                    }
                }
            }
        }
        self.pending = still_pending;

        let before = self.errors.len();
        self.errors.retain(|_, expires_at| *expires_at > now_ms);
        changed |= self.errors.len() != before;

        changed
    }

    /// Whether a cell currently carries an error marker.
    #[must_use]
    pub fn has_error(&self, row_id: &str, column_id: &str) -> bool {
        self.errors
            .keys()
            .any(|(r, c)| r == row_id && c == column_id)
    }

    /// Column ids of all error markers on one row.
    #[must_use]
    pub fn error_columns(&self, row_id: &str) -> Vec<&str> {
        self.errors
            .keys()
            .filter(|(r, _)| r == row_id)
            .map(|(_, c)| c.as_str())
            .collect()
    }

    /// All markers in the host-facing `"{rowId}-{colId}"` key form.
    #[must_use]
    pub fn error_keys(&self) -> Vec<String> {
        self.errors.keys().map(|(r, c)| format!("{r}-{c}")).collect()
    }

    /// Number of validations still in flight.
    #[must_use]
    pub fn pending_validations(&self) -> usize {
        self.pending.len()
    }
}

impl std::fmt::Debug for GridEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridEditor")
            .field("rows", &self.rows.len())
            .field("data_version", &self.data_version)
            .field("editing", &self.editing)
            .field("pending", &self.pending.len())
            .field("errors", &self.errors.len())
            .finish()
    }
}
