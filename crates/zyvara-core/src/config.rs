#![forbid(unsafe_code)]

//! Policy-as-data configuration for the view-state reducers.
//!
//! Every tunable (breakpoints, gaps, insets, scroll easing, counter pacing)
//! lives in one [`PolicyConfig`] that hosts can load from TOML or JSON at
//! startup instead of recompiling.
//!
//! # Loading
//!
//! ```toml
//! # zyvara-policy.toml
//! [carousel]
//! estimate_gap = 32.0
//!
//! [tween]
//! duration_ms = 450
//! easing = [0.22, 1.0, 0.36, 1.0]
//! ```
//!
//! ```rust,ignore
//! let policy = PolicyConfig::from_toml_file("zyvara-policy.toml")?;
//! let policy = PolicyConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `PolicyConfig::default()` reproduces the live site's constants.

#[cfg(feature = "policy-config")]
use std::path::Path;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::{CubicBezier, TweenConfig};
use crate::count_up::CountUpConfig;
use crate::responsive::{AlignPolicy, Breakpoint, Breakpoints};

// ---------------------------------------------------------------------------
// Top-level PolicyConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct PolicyConfig {
    pub carousel: CarouselPolicyConfig,
    pub layout: LayoutPolicyConfig,
    pub tween: TweenPolicyConfig,
    pub count_up: CountUpPolicyConfig,
}

impl PolicyConfig {
    /// Load from a TOML string. The result is validated.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, PolicyConfigError> {
        let config: Self = toml::from_str(s).map_err(PolicyConfigError::Toml)?;
        config.into_validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PolicyConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PolicyConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string. The result is validated.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, PolicyConfigError> {
        let config: Self = serde_json::from_str(s).map_err(PolicyConfigError::Json)?;
        config.into_validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PolicyConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Return `self` if [`validate`](Self::validate) finds nothing.
    pub fn into_validated(self) -> Result<Self, PolicyConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(PolicyConfigError::Validation(errors))
        }
    }

    /// Check every parameter. An empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.carousel.estimate_gap >= 0.0 && self.carousel.estimate_gap.is_finite()) {
            errors.push(format!(
                "carousel.estimate_gap must be a finite value >= 0, got {}",
                self.carousel.estimate_gap
            ));
        }

        let l = &self.layout;
        if !(l.sm_width < l.md_width && l.md_width < l.lg_width) {
            errors.push(format!(
                "layout breakpoints must be strictly increasing, got sm={} md={} lg={}",
                l.sm_width, l.md_width, l.lg_width
            ));
        }
        for (name, value) in [
            ("gap_compact", l.gap_compact),
            ("gap_wide", l.gap_wide),
            ("inset_compact", l.inset_compact),
            ("inset_medium", l.inset_medium),
            ("inset_wide", l.inset_wide),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                errors.push(format!("layout.{name} must be a finite value >= 0, got {value}"));
            }
        }

        let [x1, y1, x2, y2] = self.tween.easing;
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            errors.push(format!(
                "tween.easing x control points must be in [0, 1], got x1={x1} x2={x2}"
            ));
        }
        if !(y1.is_finite() && y2.is_finite()) {
            errors.push(format!(
                "tween.easing y control points must be finite, got y1={y1} y2={y2}"
            ));
        }

        if self.count_up.step == 0 {
            errors.push("count_up.step must be > 0".into());
        }
        if self.count_up.interval_ms == 0 {
            errors.push("count_up.interval_ms must be > 0".into());
        }
        if self.count_up.start > self.count_up.end {
            errors.push(format!(
                "count_up.start ({}) must not exceed count_up.end ({})",
                self.count_up.start, self.count_up.end
            ));
        }

        errors
    }

    /// Build the carousel alignment policy.
    #[must_use]
    pub fn to_align_policy(&self) -> AlignPolicy {
        let l = &self.layout;
        AlignPolicy {
            breakpoints: Breakpoints {
                sm: l.sm_width,
                md: l.md_width,
                lg: l.lg_width,
            },
            align_start_from: l.align_start_from,
            gap_compact: l.gap_compact,
            gap_wide: l.gap_wide,
            inset_compact: l.inset_compact,
            inset_medium: l.inset_medium,
            inset_wide: l.inset_wide,
        }
    }

    /// Build the smooth-scroll tween configuration.
    #[must_use]
    pub fn to_tween_config(&self) -> TweenConfig {
        let [x1, y1, x2, y2] = self.tween.easing;
        TweenConfig {
            duration: Duration::from_millis(self.tween.duration_ms),
            easing: CubicBezier::new(x1, y1, x2, y2),
        }
    }

    /// Build the about-page counter configuration.
    #[must_use]
    pub fn to_count_up_config(&self) -> CountUpConfig {
        CountUpConfig {
            start: self.count_up.start,
            end: self.count_up.end,
            step: self.count_up.step,
            interval: Duration::from_millis(self.count_up.interval_ms),
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-configs (flat, serde-friendly)
// ---------------------------------------------------------------------------

/// Carousel index-estimation parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct CarouselPolicyConfig {
    /// Gap used when estimating the active card from the scroll offset.
    /// Default: 32.0.
    pub estimate_gap: f64,
}

impl Default for CarouselPolicyConfig {
    fn default() -> Self {
        Self { estimate_gap: 32.0 }
    }
}

/// Breakpoints, gaps and insets of the venue strip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct LayoutPolicyConfig {
    pub sm_width: f64,
    pub md_width: f64,
    pub lg_width: f64,
    /// First breakpoint that pins cards to the leading margin. Default: `Md`.
    #[cfg_attr(feature = "policy-config", serde(with = "breakpoint_serde"))]
    pub align_start_from: Breakpoint,
    pub gap_compact: f64,
    pub gap_wide: f64,
    pub inset_compact: f64,
    pub inset_medium: f64,
    pub inset_wide: f64,
}

impl Default for LayoutPolicyConfig {
    fn default() -> Self {
        let p = AlignPolicy::default();
        Self {
            sm_width: p.breakpoints.sm,
            md_width: p.breakpoints.md,
            lg_width: p.breakpoints.lg,
            align_start_from: p.align_start_from,
            gap_compact: p.gap_compact,
            gap_wide: p.gap_wide,
            inset_compact: p.inset_compact,
            inset_medium: p.inset_medium,
            inset_wide: p.inset_wide,
        }
    }
}

/// Smooth-scroll timing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct TweenPolicyConfig {
    /// Default: 600.
    pub duration_ms: u64,
    /// `cubic-bezier` control points. Default: `[0.22, 1.0, 0.36, 1.0]`.
    pub easing: [f64; 4],
}

impl Default for TweenPolicyConfig {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            easing: CubicBezier::SITE.points(),
        }
    }
}

/// About-page counter pacing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct CountUpPolicyConfig {
    pub start: u32,
    pub end: u32,
    pub step: u32,
    pub interval_ms: u64,
}

impl Default for CountUpPolicyConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: 500,
            step: 10,
            interval_ms: 20,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to load or validate a [`PolicyConfig`].
#[derive(Debug)]
pub enum PolicyConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "policy-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "policy-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for PolicyConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for PolicyConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde helpers for Breakpoint
// ---------------------------------------------------------------------------

#[cfg(feature = "policy-config")]
mod breakpoint_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::responsive::Breakpoint;

    pub fn serialize<S>(bp: &Breakpoint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(bp.label())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Breakpoint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.label().eq_ignore_ascii_case(&s))
            .ok_or_else(|| {
                serde::de::Error::custom(format!("unknown breakpoint '{s}', expected xs|sm|md|lg"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PolicyConfig::default().validate().is_empty());
    }

    #[test]
    fn defaults_match_component_defaults() {
        let p = PolicyConfig::default();
        assert_eq!(p.to_align_policy(), AlignPolicy::default());
        assert_eq!(p.to_tween_config(), TweenConfig::default());
        assert_eq!(p.to_count_up_config(), CountUpConfig::default());
    }

    #[test]
    fn validate_collects_every_problem() {
        let mut p = PolicyConfig::default();
        p.carousel.estimate_gap = -1.0;
        p.layout.md_width = 2000.0;
        p.count_up.step = 0;
        p.tween.easing = [1.5, 0.0, 0.5, 1.0];
        let errors = p.validate();
        assert_eq!(errors.len(), 4, "{errors:?}");
    }

    #[test]
    fn nan_gap_is_rejected() {
        let mut p = PolicyConfig::default();
        p.layout.gap_wide = f64::NAN;
        assert_eq!(p.validate().len(), 1);
    }

    #[test]
    fn non_finite_easing_is_rejected() {
        let mut p = PolicyConfig::default();
        p.tween.easing = [0.22, f64::NAN, 0.36, 1.0];
        let errors = p.validate();
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains("y1=NaN"));

        p.tween.easing = [f64::NAN, 1.0, 0.36, f64::INFINITY];
        assert_eq!(p.validate().len(), 2);
    }

    #[test]
    fn into_validated_wraps_errors() {
        let mut p = PolicyConfig::default();
        p.count_up.interval_ms = 0;
        match p.into_validated() {
            Err(PolicyConfigError::Validation(errors)) => {
                assert!(errors[0].contains("interval_ms"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn partial_toml_keeps_defaults() {
        let p = PolicyConfig::from_toml_str(
            r#"
            [tween]
            duration_ms = 450

            [layout]
            align_start_from = "lg"
            "#,
        )
        .expect("valid toml");
        assert_eq!(p.tween.duration_ms, 450);
        assert_eq!(p.layout.align_start_from, Breakpoint::Lg);
        assert_eq!(p.carousel.estimate_gap, 32.0);
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn nan_easing_in_toml_fails_validation() {
        let err = PolicyConfig::from_toml_str("[tween]\neasing = [0.22, nan, 0.36, 1.0]")
            .expect_err("nan control point");
        match err {
            PolicyConfigError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.contains("tween.easing y")), "{errors:?}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn unknown_breakpoint_is_a_parse_error() {
        let err = PolicyConfig::from_json_str(r#"{"layout":{"align_start_from":"huge"}}"#)
            .expect_err("should fail");
        assert!(matches!(err, PolicyConfigError::Json(_)));
    }
}
