//! Windowing engine property tests.
//!
//! Verifies the visible-range computation: contiguity, clamping,
//! idempotence, and the scroll scenarios the grid relies on every frame.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::panic
)]

use gridview::window::{compute_visible, total_size, Windowing};

/// Invariant checks shared by every scenario: ascending contiguous
/// indices inside `[0, item_count)`, absolute offsets at `index * size`.
fn assert_well_formed(items: &[gridview::VirtualItem], item_count: usize, item_size: f32) {
    for pair in items.windows(2) {
        assert_eq!(pair[1].index, pair[0].index + 1, "indices must be contiguous");
    }
    for item in items {
        assert!(item.index < item_count);
        assert_eq!(item.start, item.index as f32 * item_size);
        assert_eq!(item.size, item_size);
    }
}

#[test]
fn initial_window_covers_viewport_plus_overscan() {
    // 100 rows, container height 500, row height 35: the strict range is
    // 0..=ceil(500/35) = 0..=15, plus 5 overscan rows below.
    let items = compute_visible(0.0, 500.0, 100, 35.0, 5);
    assert_well_formed(&items, 100, 35.0);
    assert_eq!(items.first().unwrap().index, 0);
    assert_eq!(items.last().unwrap().index, 20);
}

#[test]
fn window_length_is_bounded() {
    let bound = (500.0_f32 / 35.0).ceil() as usize + 2 * 5 + 1;
    let mut offset = 0.0;
    while offset < 3500.0 {
        let items = compute_visible(offset, 500.0, 100, 35.0, 5);
        assert_well_formed(&items, 100, 35.0);
        assert!(!items.is_empty());
        assert!(items.len() <= bound);
        offset += 13.7;
    }
}

#[test]
fn scrolled_window_tracks_offset() {
    // floor(700/35) = 20; ceil(1200/35) = 35.
    let items = compute_visible(700.0, 500.0, 100, 35.0, 0);
    assert_eq!(items.first().unwrap().index, 20);
    assert_eq!(items.last().unwrap().index, 35);
}

#[test]
fn end_of_list_clamps_to_last_index() {
    let items = compute_visible(3500.0, 500.0, 100, 35.0, 5);
    assert_well_formed(&items, 100, 35.0);
    assert_eq!(items.last().unwrap().index, 99);
}

#[test]
fn unmeasured_container_yields_empty_window() {
    // Expected during initial mount, before the resize observer fires.
    assert!(compute_visible(0.0, 0.0, 100, 35.0, 5).is_empty());
    assert!(compute_visible(0.0, 500.0, 0, 35.0, 5).is_empty());
}

#[test]
fn negative_offset_is_clamped_not_an_error() {
    let items = compute_visible(-100.0, 500.0, 100, 35.0, 5);
    assert_eq!(items, compute_visible(0.0, 500.0, 100, 35.0, 5));
}

#[test]
fn identical_inputs_give_structurally_identical_output() {
    let a = compute_visible(481.0, 737.0, 50_000, 35.0, 5);
    let b = compute_visible(481.0, 737.0, 50_000, 35.0, 5);
    assert_eq!(a, b);
}

#[test]
fn memoizing_wrapper_matches_direct_computation() {
    let mut w = Windowing::new();
    for offset in [0.0_f32, 35.0, 700.0, 700.0, 3500.0] {
        let cached = w.compute(offset, 500.0, 100, 35.0, 5).to_vec();
        assert_eq!(cached, compute_visible(offset, 500.0, 100, 35.0, 5));
    }
}

#[test]
fn total_size_scales_scroll_track() {
    assert_eq!(total_size(100, 35.0), 3500.0);
    assert_eq!(total_size(50_000, 35.0), 1_750_000.0);
    assert_eq!(total_size(0, 35.0), 0.0);
}
