use serde::{Deserialize, Serialize};

/// Sort direction for one key. Serialized as `"asc"` / `"desc"` to match
/// the JS host's wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// One entry of the ordered sort-key list.
///
/// List order is precedence: the first key is primary, later keys break
/// ties. At most one entry per column id; the empty list means source
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortKey {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortKey {
    #[must_use]
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }

    #[must_use]
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self::new(column_id, SortDirection::Ascending)
    }

    #[must_use]
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self::new(column_id, SortDirection::Descending)
    }
}
