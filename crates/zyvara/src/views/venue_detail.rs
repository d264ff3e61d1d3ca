#![forbid(unsafe_code)]

//! View model for a single venue page.
//!
//! Owns the hero image [`ZoomView`]. While zoomed, the content panel is
//! hidden and the document scroll lock is held; dropping the page releases
//! it no matter how the user left.

use zyvara_core::{DismissReason, ScrollLock, ZoomEvent, ZoomTransition, ZoomView};

use crate::catalog::{Catalog, Category, Venue};
use crate::error::{Error, Result};

/// One cell of the facts grid under the venue title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecEntry {
    pub label: &'static str,
    pub value: String,
}

/// State behind the venue detail page.
#[derive(Debug)]
pub struct VenueDetail<'a, L: ScrollLock> {
    venue: &'a Venue,
    index: usize,
    zoom: ZoomView<L>,
}

impl<'a, L: ScrollLock> VenueDetail<'a, L> {
    /// Mount the page for `slug`.
    ///
    /// Returns [`Error::VenueNotFound`] for an unknown slug; the lock is
    /// dropped untouched in that case.
    pub fn open(catalog: &'a Catalog, slug: &str, lock: L) -> Result<Self> {
        let Some((index, venue)) = catalog.venue_by_slug(slug) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(slug, "venue_detail.not_found");
            return Err(Error::VenueNotFound {
                slug: slug.to_string(),
            });
        };
        Ok(Self {
            venue,
            index,
            zoom: ZoomView::new(lock),
        })
    }

    #[must_use]
    pub fn venue(&self) -> &'a Venue {
        self.venue
    }

    /// Position of the venue in the catalog.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomView<L> {
        &self.zoom
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    /// Hero image or the mobile zoom button was tapped.
    pub fn open_zoom(&mut self) -> bool {
        self.zoom.activate()
    }

    /// Backdrop or close button on the zoomed image.
    pub fn close_zoom(&mut self, reason: DismissReason) -> bool {
        self.zoom.dismiss(reason)
    }

    pub fn handle(&mut self, event: ZoomEvent) -> Option<ZoomTransition> {
        self.zoom.handle(event)
    }

    /// The text panel slides away while the image is zoomed.
    #[must_use]
    pub fn content_panel_visible(&self) -> bool {
        !self.zoom.is_zoomed()
    }

    /// Capacity, area, type and district, in display order.
    #[must_use]
    pub fn spec_grid(&self) -> [SpecEntry; 4] {
        let v = self.venue;
        [
            SpecEntry {
                label: "Capacity",
                value: format!("{} Guests", v.capacity.max),
            },
            SpecEntry {
                label: "Area",
                value: format!("{} m²", v.area),
            },
            SpecEntry {
                label: "Type",
                value: category_label(v.category).to_string(),
            },
            SpecEntry {
                label: "Location",
                value: v.location.district.clone(),
            },
        ]
    }

    /// Starting price, e.g. `"S/ 8,000"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("S/ {}", group_thousands(self.venue.price_from))
    }
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::All => "All",
        Category::Wedding => "Wedding",
        Category::Corporate => "Corporate",
        Category::Social => "Social",
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
