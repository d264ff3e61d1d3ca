#![forbid(unsafe_code)]

//! Viewport measurements along a carousel's primary scroll axis.
//!
//! All values are logical pixels as reported by the host. Nothing here is
//! validated on construction: hosts may hand over zero, negative or
//! non-finite numbers while layout is still settling, and every consumer
//! treats those as "not measured yet" instead of failing.

/// One snapshot of the scroll container and its items.
///
/// Rebuilt by the host on every scroll event; cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Current scroll position (`scrollLeft` for a horizontal strip).
    pub scroll_offset: f64,
    /// Total scrollable length of the content (`scrollWidth`).
    pub content_extent: f64,
    /// Visible length of the container (`clientWidth`).
    pub viewport_extent: f64,
    /// Measured length of one item. Items are assumed uniform.
    pub item_extent: f64,
    /// Fixed spacing between adjacent items.
    pub item_gap: f64,
    /// Padding before the first item.
    pub leading_inset: f64,
}

impl ViewportMetrics {
    /// Create metrics with no gap and no leading inset.
    #[must_use]
    pub const fn new(
        scroll_offset: f64,
        content_extent: f64,
        viewport_extent: f64,
        item_extent: f64,
    ) -> Self {
        Self {
            scroll_offset,
            content_extent,
            viewport_extent,
            item_extent,
            item_gap: 0.0,
            leading_inset: 0.0,
        }
    }

    /// Set the spacing between items.
    #[must_use]
    pub const fn with_gap(mut self, item_gap: f64) -> Self {
        self.item_gap = item_gap;
        self
    }

    /// Set the padding before the first item.
    #[must_use]
    pub const fn with_leading_inset(mut self, leading_inset: f64) -> Self {
        self.leading_inset = leading_inset;
        self
    }

    /// Replace the scroll offset, keeping every other measurement.
    #[must_use]
    pub const fn at_offset(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    /// Largest reachable scroll offset. Zero or negative when the content
    /// fits inside the viewport.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        let max = self.content_extent - self.viewport_extent;
        if max.is_finite() { max } else { 0.0 }
    }

    /// Whether there is anything to scroll at all.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.max_scroll() > 0.0
    }

    /// Distance from one item's leading edge to the next one's.
    #[must_use]
    pub fn item_stride(&self) -> f64 {
        self.item_extent + self.item_gap
    }

    /// Whether items have a usable measured size.
    #[must_use]
    pub fn item_measured(&self) -> bool {
        self.item_extent.is_finite() && self.item_extent > 0.0 && self.item_stride() > 0.0
    }

    /// Offset of item `index` within the content, including the leading inset.
    #[must_use]
    pub fn item_offset(&self, index: usize) -> f64 {
        self.leading_inset + index as f64 * self.item_stride()
    }

    /// Clamp a scroll target into `[0, max_scroll]`.
    #[must_use]
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll().max(0.0))
    }
}
