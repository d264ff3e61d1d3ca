#![forbid(unsafe_code)]

//! Core: headless view-state reducers for the ZYVARA venue site.
//!
//! # Role in ZYVARA
//! `zyvara-core` owns every piece of interactive state the site has, as plain
//! values updated through plain function calls. Nothing here touches a DOM:
//! the host measures, calls in, and applies the effects that come back.
//!
//! # Primary responsibilities
//! - **CarouselController**: scroll offset to active card and progress, plus
//!   next/previous/select navigation as [`carousel::ScrollCommand`]s.
//! - **ScrollTween**: evaluates a smooth scroll over time, re-targetable.
//! - **AlignPolicy**: viewport width to alignment mode, gap and inset.
//! - **ZoomView**: normal/zoomed image state with a scroll lock released on
//!   every exit path, including drop.
//! - **Rotator** and **CountUp**: testimonial cycling and the stepped counter.
//! - **PolicyConfig**: all of the above tunables as data.
//!
//! # How it fits in the system
//! The `zyvara` facade crate wires these reducers to the venue catalog and
//! exposes one view model per page.

pub mod animation;
pub mod carousel;
pub mod config;
pub mod count_up;
pub mod geometry;
pub mod responsive;
pub mod rotator;
pub mod zoom;

pub use animation::{CubicBezier, ScrollTween, TweenConfig};
pub use carousel::{
    CarouselController, CarouselEvent, CarouselState, ScrollBehavior, ScrollCommand,
    compute_state,
};
pub use config::{PolicyConfig, PolicyConfigError};
pub use count_up::{CountUp, CountUpConfig};
pub use geometry::ViewportMetrics;
pub use responsive::{AlignPolicy, Breakpoint, Breakpoints, ScrollAlign};
pub use rotator::Rotator;
pub use zoom::{
    DismissReason, DocumentLockHandle, DocumentScrollLock, RecordingScrollLock, ScrollLock,
    ZoomEvent, ZoomPhase, ZoomTransition, ZoomView,
};
