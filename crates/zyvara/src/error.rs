#![forbid(unsafe_code)]

//! ZYVARA error model.
//!
//! View-state reducers never fail; only the edges do. Each fallible edge
//! has its own typed error and [`Error`] wraps them so callers can match on
//! what matters and let the rest propagate with `?`.

use std::fmt;

use zyvara_core::PolicyConfigError;

use crate::catalog::CatalogError;

/// Top-level error type for the site.
#[derive(Debug)]
pub enum Error {
    /// The catalog could not be built.
    Catalog(CatalogError),
    /// The policy file could not be loaded or is invalid.
    Config(PolicyConfigError),
    /// A detail page was requested for a slug no venue has.
    VenueNotFound { slug: String },
}

/// Standard result type for site APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error type label for logs.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Catalog(_) => "catalog",
            Self::Config(_) => "config",
            Self::VenueNotFound { .. } => "venue_not_found",
        }
    }

    /// Whether the site can keep running by showing a fallback page.
    ///
    /// An unknown slug renders the not-found view; a broken catalog or
    /// policy means there is nothing sensible to render.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::VenueNotFound { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "policy config: {e}"),
            Self::VenueNotFound { slug } => write!(f, "no venue with slug '{slug}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::VenueNotFound { .. } => None,
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<PolicyConfigError> for Error {
    fn from(err: PolicyConfigError) -> Self {
        Self::Config(err)
    }
}
