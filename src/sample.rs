//! Sample dataset generator.
//!
//! Produces the demo user table (`row-0` .. `row-N`) used by the CLI,
//! benches and integration tests. Deterministic on purpose: the
//! pseudo-random fields are simple multiplicative hashes of the row
//! index, so test expectations and bench runs are reproducible.

use crate::types::{CellValue, Column, PinSide, Row};

/// The demo column set: a left-pinned name column plus a mix of string,
/// numeric and categorical fields.
#[must_use]
pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("firstName", "First Name", 150.0)
            .pinned(PinSide::Left)
            .sortable(),
        Column::new("lastName", "Last Name", 150.0).sortable(),
        Column::new("age", "Age", 80.0).sortable(),
        Column::new("visits", "Visits", 90.0).sortable(),
        Column::new("status", "Status", 110.0).sortable(),
        Column::new("progress", "Progress", 110.0).sortable(),
        Column::new("email", "Email", 220.0),
    ]
}

/// Generate `count` demo rows.
#[must_use]
pub fn sample_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let status = if i % 2 == 0 { "Active" } else { "Inactive" };
            Row::new(format!("row-{i}"))
                .with("firstName", format!("User {i}"))
                .with("lastName", "Tiwari")
                .with("age", CellValue::Number((20 + i % 30) as f64))
                .with("visits", CellValue::Number((i * 37 % 100) as f64))
                .with("status", status)
                .with("progress", CellValue::Number((i * 53 % 100) as f64))
                .with("email", format!("user{i}@example.com"))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_deterministic_with_stable_ids() {
        let a = sample_rows(100);
        let b = sample_rows(100);
        assert_eq!(a, b);
        assert_eq!(a[0].id, "row-0");
        assert_eq!(a[99].get("firstName").unwrap().as_text(), "User 99");
    }
}
