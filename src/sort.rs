//! Multi-key stable sort engine.
//!
//! Sorting never mutates the dataset: [`permutation`] returns a reordered
//! index view over it. The key list is ordered by precedence (first key
//! primary); ties fall through to later keys and finally to original
//! relative order, which `slice::sort_by`'s guaranteed stability
//! preserves.

use std::cmp::Ordering;

use crate::types::{CellValue, Row, SortDirection, SortKey};

/// Next direction in the per-column toggle cycle:
/// none → ascending → descending → none.
fn next_direction(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Ascending),
        Some(SortDirection::Ascending) => Some(SortDirection::Descending),
        Some(SortDirection::Descending) => None,
    }
}

/// Toggle a column through the sort cycle, returning the new key list.
///
/// Non-additive: the result holds at most the clicked column (the whole
/// list is replaced, or cleared when the cycle lands on none). Additive
/// (shift-click): only the clicked column's entry is updated, appended,
/// or removed; other keys keep their relative precedence.
#[must_use]
pub fn toggle(keys: &[SortKey], column_id: &str, additive: bool) -> Vec<SortKey> {
    let current = keys
        .iter()
        .find(|k| k.column_id == column_id)
        .map(|k| k.direction);
    let next = next_direction(current);

    if additive {
        let Some(direction) = next else {
            // Cycle landed on none: drop only this column's entry.
            return keys
                .iter()
                .filter(|k| k.column_id != column_id)
                .cloned()
                .collect();
        };
        let mut out: Vec<SortKey> = keys.to_vec();
        if let Some(entry) = out.iter_mut().find(|k| k.column_id == column_id) {
            entry.direction = direction;
        } else {
            out.push(SortKey::new(column_id, direction));
        }
        return out;
    }

    match next {
        Some(direction) => vec![SortKey::new(column_id, direction)],
        None => Vec::new(),
    }
}

/// Total order over scalar values of the same type.
///
/// Mismatched types for the same column are undefined by the source data
/// contract; the deterministic fallback compares display-text forms so
/// the order never depends on input arrangement.
fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
        (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        _ => a.as_text().cmp(&b.as_text()),
    }
}

/// Compare two rows under the key list, primary key first.
///
/// An absent value sorts after a present one regardless of direction;
/// only a present-vs-present comparison is negated for descending.
#[must_use]
pub fn compare_rows(a: &Row, b: &Row, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let va = a.get(&key.column_id);
        let vb = b.get(&key.column_id);
        let ord = match (va, vb) {
            (Some(x), Some(y)) => {
                let ord = compare_values(x, y);
                match key.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Stable sorted permutation over `rows`.
///
/// With an empty key list this is the identity (source order). Indices
/// are `u32`: the grid tops out at tens of thousands of rows, and the
/// sorted view gets rebuilt on every dataset change, so keeping it
/// compact matters.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn permutation(rows: &[Row], keys: &[SortKey]) -> Vec<u32> {
    let mut order: Vec<u32> = (0..rows.len() as u32).collect();
    if keys.is_empty() {
        return order;
    }
    order.sort_by(|&ia, &ib| {
        match (rows.get(ia as usize), rows.get(ib as usize)) {
            (Some(a), Some(b)) => compare_rows(a, b, keys),
            _ => Ordering::Equal,
        }
    });
    order
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_asc_desc_none() {
        let keys = toggle(&[], "age", false);
        assert_eq!(keys, vec![SortKey::asc("age")]);
        let keys = toggle(&keys, "age", false);
        assert_eq!(keys, vec![SortKey::desc("age")]);
        let keys = toggle(&keys, "age", false);
        assert!(keys.is_empty());
    }

    #[test]
    fn non_additive_toggle_replaces_list() {
        let keys = vec![SortKey::asc("age"), SortKey::desc("visits")];
        assert_eq!(toggle(&keys, "email", false), vec![SortKey::asc("email")]);
    }

    #[test]
    fn additive_toggle_preserves_precedence() {
        let keys = toggle(&[], "age", true);
        let keys = toggle(&keys, "visits", true);
        assert_eq!(keys, vec![SortKey::asc("age"), SortKey::asc("visits")]);

        // Updating the first key keeps it primary.
        let keys = toggle(&keys, "age", true);
        assert_eq!(keys, vec![SortKey::desc("age"), SortKey::asc("visits")]);

        // Cycling the first key out leaves the other intact.
        let keys = toggle(&keys, "age", true);
        assert_eq!(keys, vec![SortKey::asc("visits")]);
    }

    #[test]
    fn mismatched_types_fall_back_to_text_order() {
        let a = CellValue::Number(2.0);
        let b = CellValue::Text("10".into());
        // "2" > "10" lexicographically, both directions deterministic.
        assert_eq!(compare_values(&a, &b), Ordering::Greater);
        assert_eq!(compare_values(&b, &a), Ordering::Less);
    }
}
