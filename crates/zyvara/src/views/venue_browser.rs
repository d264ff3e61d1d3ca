#![forbid(unsafe_code)]

//! View model for the horizontal venue browser.
//!
//! Wraps a [`CarouselController`] with the catalog and the site's layout
//! policy. The host reports raw DOM measurements as a [`StripMeasure`]; the
//! browser turns them into carousel metrics and derives everything the
//! control deck renders: the `01 / 06` indicator, the mini progress line,
//! the parallax shift of the background title, and which arrows are
//! disabled.

use bitflags::bitflags;
use zyvara_core::{
    AlignPolicy, CarouselController, CarouselState, PolicyConfig, ScrollAlign, ScrollCommand,
    ViewportMetrics,
};

use crate::catalog::{Catalog, Venue};

/// How far the background title moves per percent of progress.
const PARALLAX_PER_PERCENT: f64 = 5.0;

/// Raw measurements of the scroll strip, as a browser host reads them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StripMeasure {
    /// `scrollLeft` of the strip.
    pub scroll_left: f64,
    /// `scrollWidth` of the strip.
    pub scroll_width: f64,
    /// `clientWidth` of the strip.
    pub client_width: f64,
    /// Width of the first card; 0 before the first layout.
    pub card_width: f64,
    /// `window.innerWidth`, used to pick alignment, gap and inset.
    pub window_width: f64,
}

bitflags! {
    /// Disabled state of the navigation arrows.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NavControls: u8 {
        const PREV_DISABLED = 0b01;
        const NEXT_DISABLED = 0b10;
    }
}

/// Text of the position indicator, e.g. `"01"` and `"/ 06"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub current: String,
    pub total: String,
}

/// State behind the venue browser page.
#[derive(Debug, Clone)]
pub struct VenueBrowser<'a> {
    catalog: &'a Catalog,
    carousel: CarouselController,
    policy: AlignPolicy,
    estimate_gap: f64,
}

impl<'a> VenueBrowser<'a> {
    /// Browser over the whole catalog with the site's default policy.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_policy(catalog, &PolicyConfig::default())
    }

    #[must_use]
    pub fn with_policy(catalog: &'a Catalog, policy: &PolicyConfig) -> Self {
        Self {
            catalog,
            carousel: CarouselController::new(catalog.len()),
            policy: policy.to_align_policy(),
            estimate_gap: policy.carousel.estimate_gap,
        }
    }

    /// Metrics for active-card estimation.
    ///
    /// Uses the fixed estimation gap rather than the rendered one.
    fn scroll_metrics(&self, m: &StripMeasure) -> ViewportMetrics {
        ViewportMetrics::new(m.scroll_left, m.scroll_width, m.client_width, m.card_width)
            .with_gap(self.estimate_gap)
            .with_leading_inset(self.policy.inset_for(m.window_width))
    }

    /// Metrics for navigation targets, using the rendered gap.
    fn layout_metrics(&self, m: &StripMeasure) -> ViewportMetrics {
        ViewportMetrics::new(m.scroll_left, m.scroll_width, m.client_width, m.card_width)
            .with_gap(self.policy.gap_for(m.window_width))
            .with_leading_inset(self.policy.inset_for(m.window_width))
    }

    /// Alignment used for navigation at this window width.
    #[must_use]
    pub fn align_mode(&self, m: &StripMeasure) -> ScrollAlign {
        self.policy.align_for(m.window_width)
    }

    /// Scroll event (and the initial check right after mount).
    pub fn on_scroll(&mut self, m: &StripMeasure) -> CarouselState {
        let metrics = self.scroll_metrics(m);
        self.carousel.on_scroll(&metrics)
    }

    /// "Next" arrow. `None` on the last venue.
    #[must_use]
    pub fn next(&self, m: &StripMeasure) -> Option<ScrollCommand> {
        self.carousel.next(self.align_mode(m), &self.layout_metrics(m))
    }

    /// "Previous" arrow. `None` on the first venue.
    #[must_use]
    pub fn previous(&self, m: &StripMeasure) -> Option<ScrollCommand> {
        self.carousel.previous(self.align_mode(m), &self.layout_metrics(m))
    }

    /// Click on card `index`. `None` when the catalog has no venues.
    #[must_use]
    pub fn select(&self, index: usize, m: &StripMeasure) -> Option<ScrollCommand> {
        if self.catalog.is_empty() {
            return None;
        }
        let command =
            self.carousel.scroll_to_index(index, self.align_mode(m), &self.layout_metrics(m));
        Some(command)
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.carousel.state()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.carousel.active_index()
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        !self.catalog.is_empty() && index == self.carousel.active_index()
    }

    #[must_use]
    pub fn active_venue(&self) -> Option<&'a Venue> {
        self.catalog.venue(self.carousel.active_index())
    }

    #[must_use]
    pub fn indicator(&self) -> Indicator {
        let total = self.catalog.len();
        let current = if total == 0 { 0 } else { self.active_index() + 1 };
        Indicator {
            current: format!("{current:02}"),
            total: format!("/ {total:02}"),
        }
    }

    /// Width of the mini progress line in percent: `(active + 1) / N`.
    #[must_use]
    pub fn mini_progress(&self) -> f64 {
        let total = self.catalog.len();
        if total == 0 {
            return 0.0;
        }
        (self.active_index() + 1) as f64 / total as f64 * 100.0
    }

    /// Horizontal shift of the background title, in pixels.
    #[must_use]
    pub fn parallax_offset(&self) -> f64 {
        -self.carousel.progress() * PARALLAX_PER_PERCENT
    }

    #[must_use]
    pub fn controls(&self) -> NavControls {
        let mut flags = NavControls::empty();
        if self.carousel.at_start() {
            flags |= NavControls::PREV_DISABLED;
        }
        if self.carousel.at_end() {
            flags |= NavControls::NEXT_DISABLED;
        }
        flags
    }
}
