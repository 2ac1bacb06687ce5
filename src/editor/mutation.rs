//! Cell editing mutations.
//!
//! Applies field writes to the in-memory dataset. A write is an atomic
//! single-key replacement on one row; the dataset is never left
//! partially written.

use crate::types::{CellValue, Row};

/// Detect the value type of user input, the way a spreadsheet-style
/// editor would:
/// - "true"/"false" (case-insensitive) → Boolean
/// - Parseable as f64 → Number
/// - Otherwise → Text (empty string stays text; the validator decides
///   whether it is acceptable)
#[must_use]
pub(crate) fn detect_value(input: &str) -> CellValue {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    if !trimmed.is_empty() {
        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Number(n);
        }
    }
    CellValue::Text(input.to_string())
}

/// Write one field of the row with id `row_id`.
///
/// `None` clears the field (removes the key). Returns the previous value
/// (`None` if the field was absent). An unknown row id is a stale UI
/// event, not an error: nothing is written and the outer `None` is
/// returned.
pub(crate) fn apply_field_edit(
    rows: &mut [Row],
    row_id: &str,
    column_id: &str,
    value: Option<CellValue>,
) -> Option<Option<CellValue>> {
    let row = rows.iter_mut().find(|r| r.id == row_id)?;
    let previous = match value {
        Some(v) => row.fields.insert(column_id.to_string(), v),
        None => row.fields.remove(column_id),
    };
    Some(previous)
}
