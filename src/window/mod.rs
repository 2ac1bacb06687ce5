//! Row windowing (virtualization) engine.
//!
//! Pure geometry: given a scroll offset, a measured container height and
//! a fixed item size, compute the minimal contiguous index range that
//! must be materialized, expanded by an overscan buffer. Runs at scroll
//! cadence, so it owns no data and allocates only when its inputs change
//! (see [`Windowing`]).

use serde::Serialize;

/// One visible row position, derived and ephemeral.
///
/// Items are produced in ascending, contiguous index order; under the
/// fixed-size model `start = index * size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VirtualItem {
    pub index: usize,
    /// Absolute offset from the top of the scrollable extent, in pixels.
    pub start: f32,
    /// Row height in pixels.
    pub size: f32,
}

/// Total scrollable extent in pixels.
///
/// The orchestrator uses this to size the scroll-track placeholder so
/// native scrollbar proportions stay correct.
#[must_use]
pub fn total_size(item_count: usize, item_size: f32) -> f32 {
    item_count as f32 * item_size
}

/// Compute the visible window.
///
/// `floor(offset / size)` through `ceil((offset + container) / size)`,
/// expanded by `overscan` on both ends, clamped to `[0, item_count - 1]`.
/// All inputs are clamped defensively: a negative offset reads as 0, a
/// zero item count or an unmeasured (zero-height) container yields an
/// empty window rather than an error. Side-effect-free and idempotent.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_visible(
    scroll_offset: f32,
    container_size: f32,
    item_count: usize,
    item_size: f32,
    overscan: usize,
) -> Vec<VirtualItem> {
    if item_count == 0 || container_size <= 0.0 || item_size <= 0.0 {
        return Vec::new();
    }

    let offset = scroll_offset.max(0.0);
    let first_visible = (offset / item_size).floor() as usize;
    let last_visible = ((offset + container_size) / item_size).ceil() as usize;

    let last_index = item_count - 1;
    let start = first_visible.saturating_sub(overscan).min(last_index);
    let end = last_visible.saturating_add(overscan).min(last_index);

    (start..=end)
        .map(|index| VirtualItem {
            index,
            start: index as f32 * item_size,
            size: item_size,
        })
        .collect()
}

/// Input tuple a computed window is keyed on.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WindowInputs {
    scroll_offset: f32,
    container_size: f32,
    item_count: usize,
    item_size: f32,
    overscan: usize,
}

/// Memoizing wrapper around [`compute_visible`].
///
/// Scroll events arrive every frame; most of them change nothing (resize
/// ticks, repeated offsets). The cache is keyed on the full input tuple,
/// which is sound because the computation is pure.
#[derive(Debug, Default)]
pub struct Windowing {
    inputs: Option<WindowInputs>,
    items: Vec<VirtualItem>,
}

impl Windowing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute only if the inputs changed since the last call.
    pub fn compute(
        &mut self,
        scroll_offset: f32,
        container_size: f32,
        item_count: usize,
        item_size: f32,
        overscan: usize,
    ) -> &[VirtualItem] {
        let inputs = WindowInputs {
            scroll_offset,
            container_size,
            item_count,
            item_size,
            overscan,
        };
        if self.inputs != Some(inputs) {
            self.items =
                compute_visible(scroll_offset, container_size, item_count, item_size, overscan);
            self.inputs = Some(inputs);
        }
        &self.items
    }

    /// Last computed window without recomputing.
    #[must_use]
    pub fn items(&self) -> &[VirtualItem] {
        &self.items
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn empty_when_unmeasured_or_empty() {
        assert!(compute_visible(0.0, 0.0, 100, 35.0, 5).is_empty());
        assert!(compute_visible(0.0, 500.0, 0, 35.0, 5).is_empty());
        assert!(compute_visible(0.0, 500.0, 100, 0.0, 5).is_empty());
    }

    #[test]
    fn negative_offset_clamps_to_zero() {
        let items = compute_visible(-250.0, 500.0, 100, 35.0, 0);
        assert_eq!(items.first().unwrap().index, 0);
        assert_eq!(items, compute_visible(0.0, 500.0, 100, 35.0, 0));
    }

    // offset, container, count, size, overscan, expected first..=last
    #[test_case(0.0, 500.0, 100, 35.0, 0, 0, 15; "top of list")]
    #[test_case(0.0, 500.0, 100, 35.0, 5, 0, 20; "top with overscan")]
    #[test_case(700.0, 500.0, 100, 35.0, 5, 15, 40; "mid scroll")]
    #[test_case(3150.0, 500.0, 100, 35.0, 5, 85, 99; "bottom clamps end")]
    #[test_case(0.0, 500.0, 4, 35.0, 5, 0, 3; "short list clamps both")]
    fn window_bounds(
        offset: f32,
        container: f32,
        count: usize,
        size: f32,
        overscan: usize,
        first: usize,
        last: usize,
    ) {
        let items = compute_visible(offset, container, count, size, overscan);
        assert_eq!(items.first().unwrap().index, first);
        assert_eq!(items.last().unwrap().index, last);
        // Contiguous, ascending, with start = index * size.
        for (offset_in_window, item) in items.iter().enumerate() {
            assert_eq!(item.index, first + offset_in_window);
            assert_eq!(item.start, item.index as f32 * size);
            assert_eq!(item.size, size);
        }
    }

    #[test]
    fn length_is_bounded_by_viewport_plus_overscan() {
        for offset in [0.0_f32, 35.0, 333.0, 1000.0, 3500.0] {
            let items = compute_visible(offset, 500.0, 100, 35.0, 5);
            let bound = (500.0_f32 / 35.0).ceil() as usize + 2 * 5 + 1;
            assert!(items.len() <= bound, "len {} > bound {}", items.len(), bound);
        }
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let a = compute_visible(700.0, 500.0, 100, 35.0, 5);
        let b = compute_visible(700.0, 500.0, 100, 35.0, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn total_size_is_count_times_item_size() {
        assert_eq!(total_size(100, 35.0), 3500.0);
        assert_eq!(total_size(0, 35.0), 0.0);
    }

    #[test]
    fn memoized_compute_reuses_cached_window() {
        let mut w = Windowing::new();
        let first: Vec<VirtualItem> = w.compute(0.0, 500.0, 100, 35.0, 5).to_vec();
        // Same inputs: structurally identical output.
        assert_eq!(w.compute(0.0, 500.0, 100, 35.0, 5), first.as_slice());
        // Changed offset: window moves.
        let moved = w.compute(700.0, 500.0, 100, 35.0, 5);
        assert_ne!(moved.first().unwrap().index, 0);
    }
}
