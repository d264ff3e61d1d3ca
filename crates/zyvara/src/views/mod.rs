//! Page view models.

pub mod about;
pub mod venue_browser;
pub mod venue_detail;

pub use about::AboutPage;
pub use venue_browser::{Indicator, NavControls, StripMeasure, VenueBrowser};
pub use venue_detail::{SpecEntry, VenueDetail};
