//! User-gesture dispatch for `DataGrid`.
//!
//! The render collaborator reports plain events (scroll positions,
//! header activations, cell gestures, key presses, blur); this is the
//! single callback surface that turns them into engine operations.
//! Stale or out-of-order events dispatch as no-ops.

use crate::editor::mutation::detect_value;
use crate::types::CellValue;

use super::DataGrid;

/// A gesture reported by the render collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// Scroll position changed; carries the offset read at event time.
    Scroll { offset: f32 },
    /// The scroll container's content height changed (resize observer).
    Resize { height: f32 },
    /// Header click or keyboard activation (Enter/Space). `additive`
    /// is the shift modifier for multi-column sort.
    HeaderActivate { column_id: String, additive: bool },
    /// Cell double-click.
    BeginEdit { row_id: String, column_id: String },
    /// Keystroke in the edit input.
    DraftChange { value: String },
    /// Enter or blur in the edit input; `value` is the raw input text.
    CommitEdit {
        row_id: String,
        column_id: String,
        value: String,
    },
    /// Escape in the edit input.
    CancelEdit,
}

impl DataGrid {
    /// Dispatch one gesture. Returns whether a redraw is needed.
    ///
    /// `now_ms` is the dispatch timestamp; commits use it as the start
    /// of their validation window.
    pub fn handle_event(&mut self, event: GridEvent, now_ms: f64) -> bool {
        match event {
            GridEvent::Scroll { offset } => self.set_scroll_offset(offset),
            GridEvent::Resize { height } => self.set_container_height(height),
            GridEvent::HeaderActivate {
                column_id,
                additive,
            } => self.toggle_sort(&column_id, additive),
            GridEvent::BeginEdit { row_id, column_id } => {
                self.start_edit(&row_id, &column_id);
                self.editing().is_some()
            }
            GridEvent::DraftChange { value } => {
                self.set_draft(CellValue::Text(value));
                self.editing().is_some()
            }
            GridEvent::CommitEdit {
                row_id,
                column_id,
                value,
            } => self.commit_edit(&row_id, &column_id, detect_value(&value), now_ms),
            GridEvent::CancelEdit => {
                let had_edit = self.editing().is_some();
                self.cancel_edit();
                had_edit
            }
        }
    }
}
