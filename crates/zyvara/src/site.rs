#![forbid(unsafe_code)]

//! Site root: the catalog plus the policy every page reads.

use zyvara_core::{PolicyConfig, ScrollLock};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::views::{AboutPage, VenueBrowser, VenueDetail};

/// Catalog and policy shared by all pages.
#[derive(Debug, Clone)]
pub struct Site {
    catalog: Catalog,
    policy: PolicyConfig,
}

impl Site {
    /// Site over the embedded catalog with default tunables.
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(Catalog::builtin()?, PolicyConfig::default()))
    }

    /// Site with explicit parts. The policy is used as given.
    #[must_use]
    pub fn with_parts(catalog: Catalog, policy: PolicyConfig) -> Self {
        Self { catalog, policy }
    }

    /// Embedded catalog with tunables read from a TOML file.
    #[cfg(feature = "policy-config")]
    pub fn with_policy_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let policy = PolicyConfig::from_toml_file(path)?;
        Ok(Self::with_parts(Catalog::builtin()?, policy))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    #[must_use]
    pub fn browser(&self) -> VenueBrowser<'_> {
        VenueBrowser::with_policy(&self.catalog, &self.policy)
    }

    #[must_use]
    pub fn about(&self) -> AboutPage<'_> {
        AboutPage::with_policy(&self.catalog, &self.policy)
    }

    /// Detail page for the venue with `slug`.
    pub fn venue_detail<L: ScrollLock>(&self, slug: &str, lock: L) -> Result<VenueDetail<'_, L>> {
        VenueDetail::open(&self.catalog, slug, lock)
    }
}
