#![forbid(unsafe_code)]

//! Smooth-scroll evaluation for [`ScrollCommand`]s.
//!
//! Browsers animate `scrollTo({ behavior: "smooth" })` themselves; headless
//! hosts and tests need the same motion computed explicitly. [`ScrollTween`]
//! interpolates a scroll offset from where it is to a command's target along
//! a [`CubicBezier`] curve, and can be re-targeted mid flight: a new command
//! simply starts a fresh leg from the current interpolated position. There is
//! no queue and nothing to cancel.

use web_time::Duration;

use crate::carousel::{ScrollBehavior, ScrollCommand};

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
///
/// `x1` and `x2` are clamped into `[0, 1]` so the curve stays a function of
/// time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// The site-wide "expo out" curve, `cubic-bezier(0.22, 1, 0.36, 1)`.
    pub const SITE: Self = Self {
        x1: 0.22,
        y1: 1.0,
        x2: 0.36,
        y2: 1.0,
    };

    /// Straight line, output equals input.
    pub const LINEAR: Self = Self {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };

    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// Control points as `[x1, y1, x2, y2]`.
    #[must_use]
    pub fn points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        // Bernstein form with P0 = 0 and P3 = 1.
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Find the curve parameter whose x equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let d = Self::sample_derivative(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // Newton stalled; bisect.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = x;
        for _ in 0..64 {
            let v = Self::sample(self.x1, self.x2, t);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased value for normalized time `x`. Inputs outside `[0, 1]` are
    /// clamped, so `ease(0) == 0` and `ease(1) == 1` exactly.
    #[must_use]
    pub fn ease(&self, x: f64) -> f64 {
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        Self::sample(self.y1, self.y2, t)
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::SITE
    }
}

/// Duration and curve used for smooth scrolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenConfig {
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(600),
            easing: CubicBezier::SITE,
        }
    }
}

/// One in-flight smooth scroll.
#[derive(Debug, Clone)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    elapsed: Duration,
    config: TweenConfig,
}

impl ScrollTween {
    /// Start a tween from `from` to `to`.
    #[must_use]
    pub fn new(from: f64, to: f64, config: TweenConfig) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            config,
        }
    }

    /// Start a tween that executes `command` from the current offset.
    ///
    /// [`ScrollBehavior::Instant`] commands finish immediately.
    #[must_use]
    pub fn for_command(current: f64, command: &ScrollCommand, config: TweenConfig) -> Self {
        let config = match command.behavior {
            ScrollBehavior::Smooth => config,
            ScrollBehavior::Instant => TweenConfig {
                duration: Duration::ZERO,
                ..config
            },
        };
        Self::new(current, command.target_offset, config)
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Normalized time in `[0, 1]`.
    #[must_use]
    pub fn time_fraction(&self) -> f64 {
        if self.config.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.config.duration.as_secs_f64()).min(1.0)
    }

    /// Current interpolated scroll offset.
    #[must_use]
    pub fn position(&self) -> f64 {
        if self.is_done() {
            return self.to;
        }
        let eased = self.config.easing.ease(self.time_fraction());
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.config.duration
    }

    /// Advance by `dt`. Returns `true` while the tween is still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.config.duration);
        !self.is_done()
    }

    /// Point the tween at a new target, starting from the current position.
    pub fn retarget(&mut self, to: f64) {
        self.from = self.position();
        self.to = to;
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn ease_endpoints_exact() {
        for curve in [CubicBezier::SITE, CubicBezier::LINEAR] {
            assert_eq!(curve.ease(0.0), 0.0);
            assert_eq!(curve.ease(1.0), 1.0);
            assert_eq!(curve.ease(-3.0), 0.0);
            assert_eq!(curve.ease(7.0), 1.0);
            assert_eq!(curve.ease(f64::NAN), 0.0);
        }
    }

    #[test]
    fn linear_is_identity() {
        for i in 0..=10 {
            let x = f64::from(i) / 10.0;
            assert!((CubicBezier::LINEAR.ease(x) - x).abs() < 1e-4);
        }
    }

    #[test]
    fn site_curve_is_monotone_and_front_loaded() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let y = CubicBezier::SITE.ease(f64::from(i) / 100.0);
            assert!(y + EPS >= prev, "not monotone at {i}");
            prev = y;
        }
        assert!(CubicBezier::SITE.ease(0.5) > 0.8);
    }

    #[test]
    fn new_clamps_x_controls() {
        let c = CubicBezier::new(-1.0, 0.5, 2.0, 0.5);
        assert_eq!(c.points(), [0.0, 0.5, 1.0, 0.5]);
    }

    #[test]
    fn tween_runs_from_start_to_target() {
        let mut tw = ScrollTween::new(0.0, 664.0, TweenConfig::default());
        assert_eq!(tw.position(), 0.0);
        assert!(tw.tick(Duration::from_millis(300)));
        let mid = tw.position();
        assert!(mid > 0.0 && mid < 664.0);
        assert!(!tw.tick(Duration::from_millis(400)));
        assert!(tw.is_done());
        assert_eq!(tw.position(), 664.0);
    }

    #[test]
    fn retarget_starts_from_current_position() {
        let mut tw = ScrollTween::new(0.0, 1000.0, TweenConfig::default());
        tw.tick(Duration::from_millis(100));
        let here = tw.position();
        tw.retarget(200.0);
        assert!((tw.position() - here).abs() < EPS);
        assert_eq!(tw.target(), 200.0);
        tw.tick(Duration::from_secs(5));
        assert_eq!(tw.position(), 200.0);
    }

    #[test]
    fn instant_command_finishes_immediately() {
        let cmd = ScrollCommand {
            index: 3,
            target_offset: 996.0,
            behavior: ScrollBehavior::Instant,
        };
        let tw = ScrollTween::for_command(0.0, &cmd, TweenConfig::default());
        assert!(tw.is_done());
        assert_eq!(tw.position(), 996.0);
    }
}
