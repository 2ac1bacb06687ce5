//! gridview - windowed data grid engine for the web
//!
//! Presents a logically complete, sortable, editable grid over tens of
//! thousands of rows while materializing only the currently-visible
//! slice:
//! - Windowed (virtualized) rows with overscan, recomputed per scroll tick
//! - Stable multi-key sorting with a per-header toggle cycle
//! - Optimistic cell edits with async validation and rollback
//! - Host-agnostic: rendering, resize measurement and validation are
//!   injected collaborators
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridHandle } from 'gridview';
//! await init();
//! const grid = new GridHandle(columns, rows);
//! grid.set_container_height(600);
//! grid.set_scroll_offset(el.scrollTop);
//! render(grid.visible_rows(), grid.total_size());
//! ```

pub mod editor;
pub mod error;
pub mod grid;
pub mod sample;
pub mod sort;
pub mod types;
pub mod window;

#[cfg(target_arch = "wasm32")]
pub mod js_api;

pub use error::{GridError, Result};
pub use grid::{DataGrid, GridConfig, GridEvent, RowView};
pub use types::*;
pub use window::VirtualItem;

/// Get the library version
#[must_use]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen::prelude::wasm_bindgen)]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
