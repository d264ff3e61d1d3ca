#![forbid(unsafe_code)]

//! ZYVARA public facade crate.
//!
//! Binds the headless reducers from [`zyvara_core`] to the venue catalog and
//! exposes one view model per page. A host (a wasm shim, a server renderer,
//! a test) owns the DOM and the router: it builds the current page's view
//! model from a [`Site`], reports measurements and input, and applies the
//! commands that come back.
//!
//! ```
//! use zyvara::prelude::*;
//!
//! let site = Site::new()?;
//! let mut browser = site.browser();
//! browser.on_scroll(&StripMeasure {
//!     scroll_left: 0.0,
//!     scroll_width: 2000.0,
//!     client_width: 800.0,
//!     card_width: 300.0,
//!     window_width: 1440.0,
//! });
//! assert_eq!(browser.indicator().current, "01");
//! # Ok::<(), zyvara::Error>(())
//! ```

pub mod catalog;
pub mod error;
pub mod site;
pub mod views;

pub use zyvara_core as core;

pub use catalog::{Catalog, CatalogError, Category, Review, Venue};
pub use error::{Error, Result};
pub use site::Site;
pub use views::{AboutPage, Indicator, NavControls, StripMeasure, VenueBrowser, VenueDetail};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AboutPage, Catalog, Error, NavControls, Result, Site, StripMeasure, VenueBrowser,
        VenueDetail,
    };

    pub use zyvara_core::{
        DismissReason, DocumentScrollLock, ScrollAlign, ScrollBehavior, ScrollCommand, ScrollTween,
        ZoomEvent,
    };

    pub use crate::core;
}
