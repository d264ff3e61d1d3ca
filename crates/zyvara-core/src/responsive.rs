#![forbid(unsafe_code)]

//! Breakpoint tiers and the carousel alignment policy keyed on them.
//!
//! The carousel controller does not care why a [`ScrollAlign`] was chosen.
//! This module is where that choice lives: narrow viewports center the
//! target card, wide ones pin it to the leading margin.
//!
//! # Invariants
//!
//! 1. Breakpoint resolution is total: every width (including negative or
//!    non-finite ones) maps to exactly one tier.
//! 2. Tiers are ordered `Xs < Sm < Md < Lg`.

use std::fmt;

/// Responsive width tier, matching the site's stylesheet breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Below 640 px.
    Xs,
    /// 640 px up to 768 px.
    Sm,
    /// 768 px up to 1024 px.
    Md,
    /// 1024 px and wider.
    Lg,
}

impl Breakpoint {
    /// All tiers in ascending order.
    pub const ALL: [Breakpoint; 4] = [Self::Xs, Self::Sm, Self::Md, Self::Lg];

    /// Short lowercase label (`"xs"`, `"md"`, ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Width thresholds (inclusive lower bounds) for `Sm`, `Md` and `Lg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: 640.0,
            md: 768.0,
            lg: 1024.0,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width.
    #[must_use]
    pub fn classify(&self, width: f64) -> Breakpoint {
        if width >= self.lg {
            Breakpoint::Lg
        } else if width >= self.md {
            Breakpoint::Md
        } else if width >= self.sm {
            Breakpoint::Sm
        } else {
            Breakpoint::Xs
        }
    }
}

/// How a navigation target is placed inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollAlign {
    /// Center the item in the visible viewport.
    Center,
    /// Put the item's leading edge at the container's leading inset.
    AlignStart,
}

/// Maps a viewport width to alignment, item gap and leading inset.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignPolicy {
    pub breakpoints: Breakpoints,
    /// First tier that uses [`ScrollAlign::AlignStart`].
    pub align_start_from: Breakpoint,
    /// Gap below / at-or-above `Md`.
    pub gap_compact: f64,
    pub gap_wide: f64,
    /// Leading inset per tier (`Xs`/`Sm`, `Md`, `Lg`).
    pub inset_compact: f64,
    pub inset_medium: f64,
    pub inset_wide: f64,
}

impl Default for AlignPolicy {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            align_start_from: Breakpoint::Md,
            gap_compact: 24.0,
            gap_wide: 48.0,
            inset_compact: 24.0,
            inset_medium: 80.0,
            inset_wide: 128.0,
        }
    }
}

impl AlignPolicy {
    /// Alignment mode for a viewport width.
    #[must_use]
    pub fn align_for(&self, viewport_width: f64) -> ScrollAlign {
        if self.breakpoints.classify(viewport_width) >= self.align_start_from {
            ScrollAlign::AlignStart
        } else {
            ScrollAlign::Center
        }
    }

    /// Rendered gap between cards at this width.
    #[must_use]
    pub fn gap_for(&self, viewport_width: f64) -> f64 {
        if self.breakpoints.classify(viewport_width) >= Breakpoint::Md {
            self.gap_wide
        } else {
            self.gap_compact
        }
    }

    /// Padding before the first card at this width.
    #[must_use]
    pub fn inset_for(&self, viewport_width: f64) -> f64 {
        match self.breakpoints.classify(viewport_width) {
            Breakpoint::Xs | Breakpoint::Sm => self.inset_compact,
            Breakpoint::Md => self.inset_medium,
            Breakpoint::Lg => self.inset_wide,
        }
    }
}
