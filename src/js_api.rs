//! JavaScript bindings for the grid engine.
//!
//! The host owns the DOM: it renders rows, observes container resize,
//! and forwards gestures. `GridHandle` is the wasm-bindgen surface those
//! callbacks drive; structured values cross the boundary through
//! serde-wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::editor::mutation::detect_value;
use crate::grid::{DataGrid, GridConfig};
use crate::types::{Column, Row};

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// The grid engine, exported to JavaScript.
#[wasm_bindgen]
pub struct GridHandle {
    grid: DataGrid,
}

#[wasm_bindgen]
impl GridHandle {
    /// Create a grid over column and row arrays (plain JS objects).
    ///
    /// # Errors
    /// Rejects malformed column/row objects and duplicate ids.
    #[wasm_bindgen(constructor)]
    pub fn new(columns: JsValue, rows: JsValue) -> Result<GridHandle, JsValue> {
        console_error_panic_hook::set_once();

        let columns: Vec<Column> = serde_wasm_bindgen::from_value(columns)
            .map_err(|e| JsValue::from_str(&format!("columns: {e}")))?;
        let rows: Vec<Row> = serde_wasm_bindgen::from_value(rows)
            .map_err(|e| JsValue::from_str(&format!("rows: {e}")))?;

        let grid = DataGrid::new(columns, rows, GridConfig::default())?;
        Ok(GridHandle { grid })
    }

    /// Report the scroll container's scrollTop.
    pub fn set_scroll_offset(&mut self, offset: f32) -> bool {
        self.grid.set_scroll_offset(offset)
    }

    /// Report the container's content-box height (resize observer).
    pub fn set_container_height(&mut self, height: f32) -> bool {
        self.grid.set_container_height(height)
    }

    /// Header click / keyboard activation. `additive` is the shift key.
    pub fn toggle_sort(&mut self, column_id: &str, additive: bool) -> bool {
        self.grid.toggle_sort(column_id, additive)
    }

    /// `aria-sort` value for a header: "ascending", "descending" or "none".
    #[wasm_bindgen(js_name = ariaSort)]
    pub fn aria_sort(&self, column_id: &str) -> String {
        match self.grid.aria_sort(column_id) {
            Some(crate::types::SortDirection::Ascending) => "ascending".into(),
            Some(crate::types::SortDirection::Descending) => "descending".into(),
            None => "none".into(),
        }
    }

    /// Cell double-click.
    pub fn begin_edit(&mut self, row_id: &str, column_id: &str) {
        self.grid.start_edit(row_id, column_id);
    }

    /// Keystroke in the edit input. The draft stays raw text; type
    /// detection happens at commit.
    pub fn set_draft(&mut self, value: &str) {
        self.grid.set_draft(crate::types::CellValue::Text(value.to_owned()));
    }

    /// Enter / blur in the edit input.
    pub fn commit_edit(&mut self, row_id: &str, column_id: &str, value: &str) -> bool {
        self.grid
            .commit_edit(row_id, column_id, detect_value(value), now_ms())
    }

    /// Escape in the edit input.
    pub fn cancel_edit(&mut self) {
        self.grid.cancel_edit();
    }

    /// Drive pending validations and error-marker expiry; call from the
    /// host's animation/timer loop. Returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.grid.tick(now_ms())
    }

    /// Visible rows for the current scroll state, as an array of
    /// `{ index, start, size, row, editingColumn, errorColumns }`.
    ///
    /// # Errors
    /// Serialization failures crossing the boundary.
    pub fn visible_rows(&mut self) -> Result<JsValue, JsValue> {
        let views = self.grid.visible_rows();
        serde_wasm_bindgen::to_value(&views)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Error markers as `"{rowId}-{colId}"` keys.
    pub fn error_keys(&self) -> Vec<String> {
        self.grid.error_keys()
    }

    /// Total scrollable extent (px) for the scroll-track placeholder.
    pub fn total_size(&self) -> f32 {
        self.grid.total_size()
    }

    /// Logical row count for `aria-rowcount` - always the full dataset
    /// length, never the rendered subset.
    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    /// Logical column count for `aria-colcount`.
    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }
}
