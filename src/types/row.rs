use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar field value.
///
/// Untagged so row objects deserialize from plain JSON
/// (`{"id": "row-0", "firstName": "User 0", "age": 20}`).
/// `Null` exists only so explicit JSON `null` round-trips; lookups
/// normalize it to "absent".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Whether this value counts as absent for sorting and display.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Display text for this value, matching what a JS host would render
    /// (`toString()`): integral numbers print without a fraction.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            CellValue::Number(n) => {
                if n.is_finite() && n.fract().abs() < f64::EPSILON {
                    Cow::Owned(format!("{n:.0}"))
                } else {
                    Cow::Owned(n.to_string())
                }
            }
            CellValue::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// An identifiable record: a stable id plus an open-ended mapping from
/// column id to scalar value.
///
/// Rows enter the grid as an ordered sequence from the data source; all
/// further mutation goes through the edit state machine as atomic
/// single-field replacements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Unique, immutable for the row's lifetime.
    pub id: String,
    /// Field values keyed by column id. A missing key means absent.
    #[serde(flatten)]
    pub fields: BTreeMap<String, CellValue>,
}

impl Row {
    /// Create an empty row with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter, used by tests and the sample generator.
    #[must_use]
    pub fn with(mut self, column_id: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(column_id.into(), value.into());
        self
    }

    /// Field lookup. Missing keys and explicit `Null` both read as absent.
    #[must_use]
    pub fn get(&self, column_id: &str) -> Option<&CellValue> {
        self.fields.get(column_id).filter(|v| !v.is_null())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn row_deserializes_from_flat_json() {
        let row: Row = serde_json::from_str(
            r#"{"id": "row-3", "firstName": "User 3", "age": 23, "active": true, "note": null}"#,
        )
        .unwrap();
        assert_eq!(row.id, "row-3");
        assert_eq!(row.get("firstName"), Some(&CellValue::from("User 3")));
        assert_eq!(row.get("age"), Some(&CellValue::Number(23.0)));
        assert_eq!(row.get("active"), Some(&CellValue::Bool(true)));
        // Explicit null reads as absent, same as a missing key.
        assert_eq!(row.get("note"), None);
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn number_display_drops_integral_fraction() {
        assert_eq!(CellValue::Number(20.0).as_text(), "20");
        assert_eq!(CellValue::Number(20.5).as_text(), "20.5");
        assert_eq!(CellValue::Bool(false).as_text(), "false");
    }
}
