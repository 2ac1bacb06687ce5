//! Scroll state management for `DataGrid`.
//!
//! The orchestrator tracks one vertical scroll offset and the measured
//! container height. Offsets are clamped so the window never reads past
//! the scrollable extent; the host's scrollbar stays proportional via
//! [`DataGrid::total_size`](super::DataGrid::total_size).

use super::DataGrid;

impl DataGrid {
    /// Current scroll offset in pixels.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Measured container content height in pixels.
    #[must_use]
    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    /// Maximum scroll offset for the current extent and container.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.total_size() - self.container_height).max(0.0)
    }

    /// Set the absolute scroll position, clamped to the valid range.
    /// Returns whether the offset actually moved.
    pub fn set_scroll_offset(&mut self, offset: f32) -> bool {
        let clamped = offset.clamp(0.0, self.max_scroll());
        if (clamped - self.scroll_offset).abs() <= f32::EPSILON {
            return false;
        }
        self.scroll_offset = clamped;
        true
    }

    /// Scroll by a delta, clamped.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        self.set_scroll_offset(self.scroll_offset + delta)
    }

    /// Report the container's content-box height. The resize
    /// collaborator must call this at least once after mount; until
    /// then the grid assumes the configured default. Re-clamps the
    /// offset, since shrinking the extent can strand it.
    pub fn set_container_height(&mut self, height: f32) -> bool {
        let height = height.max(0.0);
        if (height - self.container_height).abs() <= f32::EPSILON {
            return false;
        }
        self.container_height = height;
        let max = self.max_scroll();
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
        true
    }
}
