#![forbid(unsafe_code)]

//! Venue and testimonial catalog.
//!
//! The site ships a fixed catalog compiled into the bundle
//! ([`Catalog::builtin`]). Hosts can also hand in their own JSON in the same
//! shape with [`Catalog::from_json_str`]. Either way the catalog is read-only
//! after construction; item identity is position in [`Catalog::venues`].

use std::fmt;

use serde::{Deserialize, Serialize};

const BUILTIN_JSON: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Wedding,
    Corporate,
    Social,
}

impl Category {
    /// Whether a venue typed `self` shows up under the `filter` tab.
    ///
    /// `All` on either side matches everything.
    #[must_use]
    pub fn matches(self, filter: Category) -> bool {
        filter == Category::All || self == Category::All || self == filter
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Limited,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub district: String,
    pub city: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    pub hero: String,
    pub gallery: Vec<String>,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub short: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    /// Icon name from the site's icon set (`"Users"`, `"Wifi"`, ...).
    pub icon: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interior {
    pub description: String,
    pub highlights: Vec<String>,
}

/// One rentable venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub location: Location,
    pub capacity: Capacity,
    /// Floor area in m².
    pub area: u32,
    pub price_from: u32,
    pub images: Images,
    pub description: Description,
    pub features: Vec<String>,
    pub amenities: Vec<Amenity>,
    pub availability: Availability,
    pub featured: bool,
    #[serde(rename = "type")]
    pub category: Category,
    pub interior: Interior,
}

/// A client testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub text: String,
    pub author: String,
    /// Event label, e.g. `"Wedding 2026"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// The full catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    venues: Vec<Venue>,
    #[serde(default)]
    testimonials: Vec<Review>,
}

impl Catalog {
    /// The catalog embedded in the build.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_JSON)
    }

    /// Parse and check a catalog in the site's JSON shape.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json).map_err(CatalogError::Json)?;
        catalog.check()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            venues = catalog.venues.len(),
            testimonials = catalog.testimonials.len(),
            "catalog.loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from already-typed records.
    pub fn new(venues: Vec<Venue>, testimonials: Vec<Review>) -> Result<Self, CatalogError> {
        let catalog = Self {
            venues,
            testimonials,
        };
        catalog.check()?;
        Ok(catalog)
    }

    fn check(&self) -> Result<(), CatalogError> {
        for (i, venue) in self.venues.iter().enumerate() {
            if venue.slug.is_empty() {
                return Err(CatalogError::EmptySlug { index: i });
            }
            if self.venues[..i].iter().any(|v| v.slug == venue.slug) {
                return Err(CatalogError::DuplicateSlug(venue.slug.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    #[must_use]
    pub fn testimonials(&self) -> &[Review] {
        &self.testimonials
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    #[must_use]
    pub fn venue(&self, index: usize) -> Option<&Venue> {
        self.venues.get(index)
    }

    /// Position and record of the venue with this slug.
    #[must_use]
    pub fn venue_by_slug(&self, slug: &str) -> Option<(usize, &Venue)> {
        self.venues.iter().enumerate().find(|(_, v)| v.slug == slug)
    }

    /// Venues listed under a category tab, in catalog order.
    pub fn venues_in(&self, filter: Category) -> impl Iterator<Item = &Venue> {
        self.venues
            .iter()
            .filter(move |v| v.category.matches(filter))
    }

    /// Venues flagged for the landing page.
    pub fn featured(&self) -> impl Iterator<Item = &Venue> {
        self.venues.iter().filter(|v| v.featured)
    }
}

/// Failure to build a [`Catalog`].
#[derive(Debug)]
pub enum CatalogError {
    /// The JSON did not match the catalog shape.
    Json(serde_json::Error),
    /// Two venues share a slug, so slug lookups would be ambiguous.
    DuplicateSlug(String),
    /// A venue has no slug and cannot be looked up.
    EmptySlug { index: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "catalog JSON error: {e}"),
            Self::DuplicateSlug(slug) => write!(f, "duplicate venue slug '{slug}'"),
            Self::EmptySlug { index } => write!(f, "venue at index {index} has an empty slug"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::DuplicateSlug(_) | Self::EmptySlug { .. } => None,
        }
    }
}
