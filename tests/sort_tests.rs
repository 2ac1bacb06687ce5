//! Sort engine tests: toggle cycle, stability, precedence, and the
//! value-comparison edge cases.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::sort::{compare_rows, permutation, toggle};
use gridview::types::{CellValue, Row, SortKey};

fn user_rows() -> Vec<Row> {
    (0..100)
        .map(|i| {
            Row::new(format!("row-{i}"))
                .with("name", format!("User {i}"))
                .with("age", CellValue::Number((20 + i % 30) as f64))
        })
        .collect()
}

/// Map a permutation back to the row ids it selects.
fn ids<'a>(rows: &'a [Row], order: &[u32]) -> Vec<&'a str> {
    order
        .iter()
        .map(|&i| rows[i as usize].id.as_str())
        .collect()
}

#[test]
fn empty_key_list_is_source_order() {
    let rows = user_rows();
    let order = permutation(&rows, &[]);
    assert_eq!(order, (0..100).collect::<Vec<u32>>());
}

#[test]
fn single_ascending_key_orders_adjacent_pairs() {
    let rows = user_rows();
    let keys = vec![SortKey::asc("age")];
    let order = permutation(&rows, &keys);
    for pair in order.windows(2) {
        let a = rows[pair[0] as usize].get("age").unwrap();
        let b = rows[pair[1] as usize].get("age").unwrap();
        assert!(a.as_text().parse::<f64>().unwrap() <= b.as_text().parse::<f64>().unwrap());
    }
}

#[test]
fn descending_reverses_comparison_not_the_array() {
    // Rows that tie on the key must keep source order under both
    // directions; a naive array reversal would flip them.
    let rows = vec![
        Row::new("a").with("v", CellValue::Number(1.0)),
        Row::new("b").with("v", CellValue::Number(2.0)),
        Row::new("c").with("v", CellValue::Number(1.0)),
    ];
    let asc = permutation(&rows, &[SortKey::asc("v")]);
    let desc = permutation(&rows, &[SortKey::desc("v")]);
    assert_eq!(ids(&rows, &asc), ["a", "c", "b"]);
    assert_eq!(ids(&rows, &desc), ["b", "a", "c"]);
}

#[test]
fn stable_when_no_key_discriminates() {
    let rows: Vec<Row> = (0..50)
        .map(|i| Row::new(format!("row-{i}")).with("v", "same"))
        .collect();
    let order = permutation(&rows, &[SortKey::asc("v")]);
    assert_eq!(order, (0..50).collect::<Vec<u32>>());
}

#[test]
fn absent_values_sort_last_in_both_directions() {
    let rows = vec![
        Row::new("absent"),
        Row::new("low").with("v", CellValue::Number(1.0)),
        Row::new("null").with("v", CellValue::Null),
        Row::new("high").with("v", CellValue::Number(9.0)),
    ];
    let asc = permutation(&rows, &[SortKey::asc("v")]);
    assert_eq!(ids(&rows, &asc), ["low", "high", "absent", "null"]);
    let desc = permutation(&rows, &[SortKey::desc("v")]);
    assert_eq!(ids(&rows, &desc), ["high", "low", "absent", "null"]);
}

#[test]
fn multi_key_precedence_breaks_ties_with_second_key() {
    // Intentional duplicates on the primary key.
    let rows = vec![
        Row::new("r0").with("dept", "eng").with("score", CellValue::Number(10.0)),
        Row::new("r1").with("dept", "ops").with("score", CellValue::Number(50.0)),
        Row::new("r2").with("dept", "eng").with("score", CellValue::Number(30.0)),
        Row::new("r3").with("dept", "ops").with("score", CellValue::Number(20.0)),
    ];
    let keys = vec![SortKey::asc("dept"), SortKey::desc("score")];
    let order = permutation(&rows, &keys);
    assert_eq!(ids(&rows, &order), ["r2", "r0", "r1", "r3"]);
}

#[test]
fn string_columns_sort_lexicographically_not_numerically() {
    // Two non-additive toggles land on descending. String comparison,
    // not numeric: "User 99" sorts first, and "User 11" precedes
    // "User 1" because "User 1" is its prefix.
    let rows = user_rows();
    let keys = toggle(&toggle(&[], "name", false), "name", false);
    assert_eq!(keys, vec![SortKey::desc("name")]);

    let order = permutation(&rows, &keys);
    let names: Vec<String> = order
        .iter()
        .map(|&i| rows[i as usize].get("name").unwrap().as_text().into_owned())
        .collect();

    let pos = |n: &str| names.iter().position(|x| x == n).unwrap();
    assert_eq!(names[0], "User 99");
    assert!(pos("User 99") < pos("User 11"));
    assert!(pos("User 11") < pos("User 1"));
    assert!(pos("User 2") < pos("User 19"), "string order, not numeric");
}

#[test]
fn toggle_cycle_returns_to_unsorted() {
    let keys = toggle(&[], "name", false);
    let keys = toggle(&keys, "name", false);
    let keys = toggle(&keys, "name", false);
    assert!(keys.is_empty());
}

#[test]
fn additive_toggle_keeps_other_keys() {
    let keys = vec![SortKey::asc("dept"), SortKey::desc("score")];
    let keys = toggle(&keys, "name", true);
    assert_eq!(
        keys,
        vec![
            SortKey::asc("dept"),
            SortKey::desc("score"),
            SortKey::asc("name")
        ]
    );
    // Cycling "dept" to desc updates in place, preserving precedence.
    let keys = toggle(&keys, "dept", true);
    assert_eq!(keys[0], SortKey::desc("dept"));
    assert_eq!(keys.len(), 3);
}

#[test]
fn compare_rows_is_consistent_with_permutation() {
    let rows = user_rows();
    let keys = vec![SortKey::asc("age"), SortKey::desc("name")];
    let order = permutation(&rows, &keys);
    for pair in order.windows(2) {
        let a = &rows[pair[0] as usize];
        let b = &rows[pair[1] as usize];
        assert_ne!(
            compare_rows(a, b, &keys),
            std::cmp::Ordering::Greater,
            "{} must not sort after {}",
            a.id,
            b.id
        );
    }
}
