use serde::{Deserialize, Serialize};

/// Side a column is pinned to.
///
/// `Right` is part of the data model but has no rendering support; hosts
/// should treat it as unpinned for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinSide {
    Left,
    Right,
}

/// A static column descriptor.
///
/// Columns are configuration: created once per grid instance and
/// immutable for the grid's lifetime. The `id` is the stable key used
/// for field lookup on every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    /// Fixed width in pixels.
    pub width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<PinSide>,
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    /// Create an unpinned, unsortable column.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, width: f32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width,
            pinned: None,
            sortable: false,
        }
    }

    /// Mark the column sortable.
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Pin the column to a side.
    #[must_use]
    pub fn pinned(mut self, side: PinSide) -> Self {
        self.pinned = Some(side);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn column_deserializes_with_optional_fields() {
        let col: Column = serde_json::from_str(
            r#"{"id": "firstName", "title": "First Name", "width": 150, "pinned": "left", "sortable": true}"#,
        )
        .unwrap();
        assert_eq!(col.pinned, Some(PinSide::Left));
        assert!(col.sortable);

        let bare: Column =
            serde_json::from_str(r#"{"id": "email", "title": "Email", "width": 220}"#).unwrap();
        assert_eq!(bare.pinned, None);
        assert!(!bare.sortable);
    }
}
