//! Structured error types for gridview.
//!
//! Everything recoverable (validation rejections, defensive clamping,
//! stale UI events) is absorbed inside the component that produced it;
//! these errors cover configuration and data-ingestion problems only.

/// All errors that can occur when constructing or feeding a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Column configuration is invalid (duplicate or empty identifiers).
    #[error("Invalid column config: {0}")]
    Config(String),

    /// Row data is invalid (duplicate or empty row ids).
    #[error("Invalid row data: {0}")]
    Data(String),

    /// JSON (de)serialization error from serde_json.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (CLI only).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
