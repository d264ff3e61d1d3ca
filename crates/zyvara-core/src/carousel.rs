#![forbid(unsafe_code)]

//! Scroll-synchronized carousel controller.
//!
//! Keeps a discrete "active item" and a continuous "how far through the list"
//! value in step with a scroll position the host owns, and turns navigation
//! requests into smooth-scroll commands.
//!
//! # Design
//!
//! - [`CarouselState`] is the derived `(active_index, progress)` pair.
//! - [`compute_state`] is the pure reducer from the previous state plus a
//!   [`ViewportMetrics`] snapshot to the next state.
//! - [`CarouselController`] owns the item count and the current state, and
//!   emits [`ScrollCommand`]s for `next` / `previous` / `scroll_to_index`.
//!
//! Navigation never mutates the state directly. The host applies the
//! command, the container scrolls, and the next `on_scroll` picks up the
//! new position.
//!
//! # Failure Modes
//!
//! None surface to the caller. Unmeasured items keep the previous index,
//! content that fits the viewport reports zero progress, out-of-range
//! targets are clamped and boundary navigation is a no-op.

use crate::geometry::ViewportMetrics;
use crate::responsive::ScrollAlign;

/// Derived carousel position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselState {
    /// Item currently in focus. Always `< item_count` (0 for an empty list).
    pub active_index: usize,
    /// Percentage of the scrollable distance traversed, in `[0, 100]`.
    pub progress: f64,
}

/// How the host should move the scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animate with the site easing curve.
    #[default]
    Smooth,
    /// Jump straight to the target.
    Instant,
}

/// Instruction to move the scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    /// Item the command navigates to (already clamped).
    pub index: usize,
    /// Scroll offset to animate to, clamped into `[0, max_scroll]`.
    pub target_offset: f64,
    pub behavior: ScrollBehavior,
}

/// Host input for [`CarouselController::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// The container scrolled; metrics are fresh.
    Scrolled(ViewportMetrics),
    /// "Next" control pressed.
    Next(ScrollAlign, ViewportMetrics),
    /// "Previous" control pressed.
    Previous(ScrollAlign, ViewportMetrics),
    /// A card or index selector was clicked.
    Select(usize, ScrollAlign, ViewportMetrics),
}

/// Percentage of the scrollable distance covered at `metrics.scroll_offset`.
///
/// Zero whenever there is nothing to scroll or the offset is not finite.
#[must_use]
pub fn progress_of(metrics: &ViewportMetrics) -> f64 {
    let max_scroll = metrics.max_scroll();
    if max_scroll <= 0.0 || !metrics.scroll_offset.is_finite() {
        return 0.0;
    }
    (metrics.scroll_offset / max_scroll * 100.0).clamp(0.0, 100.0)
}

/// Nearest item to `metrics.scroll_offset`, or `None` when items are not
/// measured yet.
#[must_use]
pub fn estimate_index(metrics: &ViewportMetrics, item_count: usize) -> Option<usize> {
    if !metrics.item_measured() || !metrics.scroll_offset.is_finite() {
        return None;
    }
    let estimated = (metrics.scroll_offset / metrics.item_stride()).round();
    Some(clamp_index(estimated, item_count))
}

/// Reduce a scroll snapshot into the next carousel state.
///
/// Pure and O(1). When items have no measured extent the previous
/// `active_index` is retained.
#[must_use]
pub fn compute_state(
    prev: CarouselState,
    metrics: &ViewportMetrics,
    item_count: usize,
) -> CarouselState {
    let active_index = match estimate_index(metrics, item_count) {
        Some(index) => index,
        None => prev.active_index.min(last_index(item_count)),
    };
    CarouselState {
        active_index,
        progress: progress_of(metrics),
    }
}

fn last_index(item_count: usize) -> usize {
    item_count.saturating_sub(1)
}

fn clamp_index(estimated: f64, item_count: usize) -> usize {
    if estimated <= 0.0 {
        0
    } else {
        (estimated as usize).min(last_index(item_count))
    }
}

/// Owns the carousel state for one scrollable strip.
#[derive(Debug, Clone)]
pub struct CarouselController {
    item_count: usize,
    state: CarouselState,
}

impl CarouselController {
    /// Create a controller over `item_count` items, focused on the first.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            state: CarouselState::default(),
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Whether the active item is the first one.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.state.active_index == 0
    }

    /// Whether the active item is the last one.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.state.active_index >= last_index(self.item_count)
    }

    /// Recompute state from a fresh scroll snapshot.
    pub fn on_scroll(&mut self, metrics: &ViewportMetrics) -> CarouselState {
        let next = compute_state(self.state, metrics, self.item_count);
        #[cfg(feature = "tracing")]
        if next.active_index != self.state.active_index {
            tracing::debug!(
                from = self.state.active_index,
                to = next.active_index,
                progress = next.progress,
                "carousel.active_changed"
            );
        }
        self.state = next;
        next
    }

    /// Build a smooth-scroll command that brings item `index` into view.
    ///
    /// `index` is clamped into `[0, item_count - 1]`.
    #[must_use]
    pub fn scroll_to_index(
        &self,
        index: usize,
        mode: ScrollAlign,
        metrics: &ViewportMetrics,
    ) -> ScrollCommand {
        let index = index.min(last_index(self.item_count));
        let item_offset = metrics.item_offset(index);
        let raw = match mode {
            ScrollAlign::Center => {
                item_offset - metrics.viewport_extent / 2.0 + metrics.item_extent / 2.0
            }
            ScrollAlign::AlignStart => item_offset - metrics.leading_inset,
        };
        let command = ScrollCommand {
            index,
            target_offset: metrics.clamp_offset(raw),
            behavior: ScrollBehavior::Smooth,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            index,
            ?mode,
            target_offset = command.target_offset,
            "carousel.scroll_to"
        );
        command
    }

    /// Command for the following item, or `None` on the last one.
    #[must_use]
    pub fn next(&self, mode: ScrollAlign, metrics: &ViewportMetrics) -> Option<ScrollCommand> {
        if self.at_end() {
            return None;
        }
        Some(self.scroll_to_index(self.state.active_index + 1, mode, metrics))
    }

    /// Command for the preceding item, or `None` on the first one.
    #[must_use]
    pub fn previous(&self, mode: ScrollAlign, metrics: &ViewportMetrics) -> Option<ScrollCommand> {
        if self.at_start() {
            return None;
        }
        Some(self.scroll_to_index(self.state.active_index - 1, mode, metrics))
    }

    /// Single entry point for hosts that route every input through one call.
    ///
    /// Scroll events update the state and never produce a command;
    /// navigation events produce a command and never touch the state. An
    /// empty carousel has nothing to navigate to, so selection yields `None`.
    pub fn dispatch(&mut self, event: CarouselEvent) -> Option<ScrollCommand> {
        match event {
            CarouselEvent::Scrolled(metrics) => {
                self.on_scroll(&metrics);
                None
            }
            CarouselEvent::Next(mode, metrics) => self.next(mode, &metrics),
            CarouselEvent::Previous(mode, metrics) => self.previous(mode, &metrics),
            CarouselEvent::Select(_, _, _) if self.item_count == 0 => None,
            CarouselEvent::Select(index, mode, metrics) => {
                Some(self.scroll_to_index(index, mode, &metrics))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(offset: f64) -> ViewportMetrics {
        ViewportMetrics::new(offset, 2000.0, 800.0, 300.0).with_gap(32.0)
    }

    // -- Reducer --

    #[test]
    fn index_from_uniform_stride() {
        let mut c = CarouselController::new(6);
        let s = c.on_scroll(&strip(664.0));
        assert_eq!(s.active_index, 2);
    }

    #[test]
    fn progress_endpoints() {
        let mut c = CarouselController::new(6);
        assert_eq!(c.on_scroll(&strip(0.0)).progress, 0.0);
        assert_eq!(c.on_scroll(&strip(1200.0)).progress, 100.0);
        assert_eq!(c.on_scroll(&strip(600.0)).progress, 50.0);
    }

    #[test]
    fn progress_clamped_on_overscroll() {
        let mut c = CarouselController::new(6);
        assert_eq!(c.on_scroll(&strip(-40.0)).progress, 0.0);
        assert_eq!(c.on_scroll(&strip(1300.0)).progress, 100.0);
    }

    #[test]
    fn content_fits_viewport_means_zero_progress() {
        let mut c = CarouselController::new(1);
        let m = ViewportMetrics::new(0.0, 600.0, 800.0, 300.0);
        assert_eq!(c.on_scroll(&m).progress, 0.0);
        let exact = ViewportMetrics::new(0.0, 800.0, 800.0, 300.0);
        assert_eq!(c.on_scroll(&exact).progress, 0.0);
    }

    #[test]
    fn unmeasured_item_keeps_previous_index() {
        let mut c = CarouselController::new(6);
        c.on_scroll(&strip(664.0));
        assert_eq!(c.active_index(), 2);

        let unmeasured = ViewportMetrics::new(1200.0, 2000.0, 800.0, 0.0).with_gap(32.0);
        let s = c.on_scroll(&unmeasured);
        assert_eq!(s.active_index, 2);
        assert_eq!(s.progress, 100.0);
    }

    #[test]
    fn index_clamped_to_last_item() {
        let mut c = CarouselController::new(3);
        let far = ViewportMetrics::new(5000.0, 10000.0, 800.0, 300.0).with_gap(32.0);
        assert_eq!(c.on_scroll(&far).active_index, 2);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        let mut c = CarouselController::new(0);
        let s = c.on_scroll(&strip(664.0));
        assert_eq!(s.active_index, 0);
        assert!(c.next(ScrollAlign::AlignStart, &strip(0.0)).is_none());
        assert!(c.previous(ScrollAlign::AlignStart, &strip(0.0)).is_none());
    }

    #[test]
    fn empty_list_select_issues_nothing() {
        let mut c = CarouselController::new(0);
        let cmd = c.dispatch(CarouselEvent::Select(0, ScrollAlign::Center, strip(0.0)));
        assert!(cmd.is_none());
    }

    #[test]
    fn nan_offset_is_harmless() {
        let mut c = CarouselController::new(6);
        c.on_scroll(&strip(664.0));
        let s = c.on_scroll(&strip(f64::NAN));
        assert_eq!(s.active_index, 2);
        assert_eq!(s.progress, 0.0);
    }

    // -- Commands --

    #[test]
    fn align_start_target_subtracts_inset() {
        let c = CarouselController::new(6);
        let m = strip(0.0).with_leading_inset(80.0);
        let cmd = c.scroll_to_index(2, ScrollAlign::AlignStart, &m);
        assert_eq!(cmd.index, 2);
        assert_eq!(cmd.target_offset, 664.0);
        assert_eq!(cmd.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn center_target_centers_item() {
        let c = CarouselController::new(6);
        let m = strip(0.0).with_leading_inset(24.0);
        let cmd = c.scroll_to_index(3, ScrollAlign::Center, &m);
        // 24 + 3 * 332 - 400 + 150
        assert_eq!(cmd.target_offset, 770.0);
    }

    #[test]
    fn first_item_centered_clamps_to_zero() {
        let c = CarouselController::new(6);
        let cmd = c.scroll_to_index(0, ScrollAlign::Center, &strip(0.0));
        assert_eq!(cmd.target_offset, 0.0);
    }

    #[test]
    fn out_of_range_index_is_clamped() {
        let c = CarouselController::new(6);
        let cmd = c.scroll_to_index(99, ScrollAlign::AlignStart, &strip(0.0));
        assert_eq!(cmd.index, 5);
        assert_eq!(cmd.target_offset, 1200.0);
    }

    #[test]
    fn previous_at_start_is_noop() {
        let mut c = CarouselController::new(6);
        c.on_scroll(&strip(0.0));
        assert!(c.previous(ScrollAlign::AlignStart, &strip(0.0)).is_none());
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn next_at_end_is_noop() {
        let mut c = CarouselController::new(6);
        let end = ViewportMetrics::new(1660.0, 3000.0, 800.0, 300.0).with_gap(32.0);
        c.on_scroll(&end);
        assert_eq!(c.active_index(), 5);
        assert!(c.next(ScrollAlign::AlignStart, &end).is_none());
        assert_eq!(c.active_index(), 5);
    }

    #[test]
    fn next_does_not_mutate_state() {
        let mut c = CarouselController::new(6);
        c.on_scroll(&strip(0.0));
        let cmd = c.next(ScrollAlign::AlignStart, &strip(0.0)).expect("command");
        assert_eq!(cmd.index, 1);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn dispatch_routes_events() {
        let mut c = CarouselController::new(6);
        assert!(c.dispatch(CarouselEvent::Scrolled(strip(664.0))).is_none());
        assert_eq!(c.active_index(), 2);

        let cmd = c
            .dispatch(CarouselEvent::Previous(ScrollAlign::AlignStart, strip(664.0)))
            .expect("command");
        assert_eq!(cmd.index, 1);

        let cmd = c
            .dispatch(CarouselEvent::Select(4, ScrollAlign::AlignStart, strip(664.0)))
            .expect("command");
        assert_eq!(cmd.index, 4);
        assert_eq!(c.active_index(), 2);
    }
}
