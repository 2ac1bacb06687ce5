//! Grid orchestrator.
//!
//! `DataGrid` composes the three engines: the edit state machine owns
//! the dataset, the sort engine derives an ordered view over it, and the
//! windowing engine picks the slice of that view to materialize. The
//! orchestrator also owns the scroll offset and the measured container
//! height (fed by the host's resize observer) and exposes the gesture
//! surface in [`events`].
//!
//! Derived state is dependency-tracked by hand: the sorted permutation
//! is keyed on the dataset version and the key list, the window on its
//! full input tuple, so each scroll tick recomputes only what its inputs
//! invalidated.

mod events;
mod scroll;

use serde::Serialize;

use crate::editor::{ActiveEdit, GridEditor, Validator};
use crate::error::{GridError, Result};
use crate::sort;
use crate::types::{CellValue, Column, Row, SortDirection, SortKey};
use crate::window::Windowing;

pub use events::GridEvent;

/// Fixed row height (px) unless overridden.
pub const DEFAULT_ROW_HEIGHT: f32 = 35.0;
/// Overscan buffer rows unless overridden.
pub const DEFAULT_OVERSCAN: usize = 5;
/// Container height (px) assumed before the first resize report.
pub const DEFAULT_CONTAINER_HEIGHT: f32 = 600.0;

/// Grid geometry configuration.
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    pub row_height: f32,
    pub overscan: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

/// One renderable row handed to the render collaborator.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView<'a> {
    /// Index into the sorted view (also the ARIA row index, 0-based).
    pub index: usize,
    /// Absolute offset from the top of the scrollable extent, in pixels.
    pub start: f32,
    /// Row height in pixels.
    pub size: f32,
    pub row: &'a Row,
    /// The column being edited in this row, if the active edit targets it.
    pub editing_column: Option<&'a str>,
    /// Columns of this row currently flagged with an error marker.
    pub error_columns: Vec<&'a str>,
}

/// The windowed, sortable, editable grid.
pub struct DataGrid {
    columns: Vec<Column>,
    editor: GridEditor,
    sort_keys: Vec<SortKey>,
    /// Sorted permutation over the dataset, rebuilt lazily.
    order: Vec<u32>,
    /// Dataset version `order` was computed from; `None` forces a
    /// rebuild (set when the key list changes).
    order_version: Option<u64>,
    scroll_offset: f32,
    container_height: f32,
    row_height: f32,
    overscan: usize,
    window: Windowing,
}

impl DataGrid {
    /// Create a grid over the given columns and rows.
    ///
    /// # Errors
    /// Rejects duplicate or empty column ids and row ids; both are
    /// stable lookup keys and the whole engine assumes they are unique.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>, config: GridConfig) -> Result<Self> {
        Self::with_validator(columns, rows, config, None)
    }

    /// Create a grid with a custom validation collaborator.
    ///
    /// # Errors
    /// Same id checks as [`DataGrid::new`].
    pub fn with_validator(
        columns: Vec<Column>,
        rows: Vec<Row>,
        config: GridConfig,
        validator: Option<Box<dyn Validator>>,
    ) -> Result<Self> {
        check_unique(columns.iter().map(|c| c.id.as_str()), "column")
            .map_err(GridError::Config)?;
        check_unique(rows.iter().map(|r| r.id.as_str()), "row").map_err(GridError::Data)?;

        let editor = match validator {
            Some(v) => GridEditor::with_validator(rows, v),
            None => GridEditor::new(rows),
        };
        Ok(Self {
            columns,
            editor,
            sort_keys: Vec::new(),
            order: Vec::new(),
            order_version: None,
            scroll_offset: 0.0,
            container_height: DEFAULT_CONTAINER_HEIGHT,
            row_height: config.row_height,
            overscan: config.overscan,
            window: Windowing::new(),
        })
    }

    /// Column configuration, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Logical row count: the full sorted, post-edit dataset length,
    /// never the rendered subset. This is what `aria-rowcount` must
    /// report.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.editor.rows().len()
    }

    /// Logical column count, for `aria-colcount`.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Current sort-key list, primary key first.
    #[must_use]
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// Sort direction of one header, for its `aria-sort` attribute
    /// (`None` renders as `"none"`).
    #[must_use]
    pub fn aria_sort(&self, column_id: &str) -> Option<SortDirection> {
        self.sort_keys
            .iter()
            .find(|k| k.column_id == column_id)
            .map(|k| k.direction)
    }

    /// Toggle sort on a header. Toggling an unknown or non-sortable
    /// column is a no-op (out-of-order UI events must not disturb
    /// state). Returns whether the key list changed.
    pub fn toggle_sort(&mut self, column_id: &str, additive: bool) -> bool {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.id == column_id && c.sortable);
        if !sortable {
            return false;
        }
        self.sort_keys = sort::toggle(&self.sort_keys, column_id, additive);
        self.order_version = None;
        true
    }

    /// Begin editing a cell.
    pub fn start_edit(&mut self, row_id: &str, column_id: &str) {
        self.editor.start_edit(row_id, column_id);
    }

    /// Update the in-progress value of the active edit.
    pub fn set_draft(&mut self, value: CellValue) {
        self.editor.set_draft(value);
    }

    /// Abandon the active edit.
    pub fn cancel_edit(&mut self) {
        self.editor.cancel_edit();
    }

    /// Commit the active edit with `new_value`. The previous value is
    /// read from the dataset before the optimistic write so a rejection
    /// can revert it. Returns whether a commit was issued.
    pub fn commit_edit(
        &mut self,
        row_id: &str,
        column_id: &str,
        new_value: CellValue,
        now_ms: f64,
    ) -> bool {
        let old_value = self
            .editor
            .rows()
            .iter()
            .find(|r| r.id == row_id)
            .and_then(|r| r.get(column_id))
            .cloned();
        self.editor
            .commit_edit(row_id, column_id, new_value, old_value, now_ms)
    }

    /// The active edit, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&ActiveEdit> {
        self.editor.editing()
    }

    /// Whether a cell carries an error marker.
    #[must_use]
    pub fn has_error(&self, row_id: &str, column_id: &str) -> bool {
        self.editor.has_error(row_id, column_id)
    }

    /// All error markers in `"{rowId}-{colId}"` form.
    #[must_use]
    pub fn error_keys(&self) -> Vec<String> {
        self.editor.error_keys()
    }

    /// Drive pending validations and marker expiry. Returns whether a
    /// redraw is needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.editor.tick(now_ms)
    }

    /// Total scrollable extent in pixels; sizes the host's scroll-track
    /// placeholder.
    #[must_use]
    pub fn total_size(&self) -> f32 {
        crate::window::total_size(self.row_count(), self.row_height)
    }

    /// Rebuild the sorted permutation if the dataset version or key
    /// list changed since it was last computed.
    fn refresh_order(&mut self) {
        let version = self.editor.data_version();
        if self.order_version == Some(version) {
            return;
        }
        self.order = sort::permutation(self.editor.rows(), &self.sort_keys);
        self.order_version = Some(version);
    }

    /// Compute the visible window and map it onto the sorted dataset.
    ///
    /// The geometry is memoized on its input tuple, but the row mapping
    /// is applied fresh on every call: when sorting reorders rows
    /// without resizing, identical indices hand back different rows.
    pub fn visible_rows(&mut self) -> Vec<RowView<'_>> {
        self.refresh_order();

        let items = self.window.compute(
            self.scroll_offset,
            self.container_height,
            self.order.len(),
            self.row_height,
            self.overscan,
        );

        let editor = &self.editor;
        let order = &self.order;
        items
            .iter()
            .filter_map(|item| {
                let source_index = *order.get(item.index)? as usize;
                let row = editor.rows().get(source_index)?;
                let editing_column = editor
                    .editing()
                    .filter(|e| e.row_id == row.id)
                    .map(|e| e.column_id.as_str());
                Some(RowView {
                    index: item.index,
                    start: item.start,
                    size: item.size,
                    row,
                    editing_column,
                    error_columns: editor.error_columns(&row.id),
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for DataGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGrid")
            .field("columns", &self.columns.len())
            .field("rows", &self.row_count())
            .field("sort_keys", &self.sort_keys)
            .field("scroll_offset", &self.scroll_offset)
            .field("container_height", &self.container_height)
            .finish()
    }
}

/// Reject duplicate or empty ids in a key sequence.
fn check_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind: &str,
) -> std::result::Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(format!("empty {kind} id"));
        }
        if !seen.insert(id) {
            return Err(format!("duplicate {kind} id: {id}"));
        }
    }
    Ok(())
}
