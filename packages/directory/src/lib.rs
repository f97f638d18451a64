#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! In-memory lawyer directory.
//!
//! Owns the full dataset for one process lifetime: the compile-time city
//! registry, the deterministically generated lawyer records, and the
//! static pricing catalog. Everything is built once at startup and never
//! persisted; consumers hold shared references.

mod generate;
mod pricing;
pub mod registry;

pub use generate::generate_lawyers;
pub use pricing::{BillingCycle, PricingPlan, pricing_plans};

use counsel_map_geography_models::City;
use counsel_map_lawyer_models::LawyerRecord;
use thiserror::Error;

/// Seed used for the default directory dataset.
pub const DEFAULT_SEED: u64 = 0x00C0_FFEE;

/// Number of lawyers in the default directory dataset.
pub const DEFAULT_LAWYER_COUNT: usize = 100;

/// Errors that can occur during directory lookups.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No lawyer record matches the requested id.
    #[error("No lawyer found with id {id}")]
    LawyerNotFound {
        /// The id that failed to resolve.
        id: String,
    },
}

/// The in-memory directory data set.
pub struct DirectoryStore {
    lawyers: Vec<LawyerRecord>,
    cities: Vec<City>,
    pricing: Vec<PricingPlan>,
}

impl DirectoryStore {
    /// Builds the default directory: the embedded city registry plus
    /// [`DEFAULT_LAWYER_COUNT`] generated lawyers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED, DEFAULT_LAWYER_COUNT)
    }

    /// Builds a directory with an explicit generator seed and size.
    #[must_use]
    pub fn with_seed(seed: u64, count: usize) -> Self {
        let cities = registry::major_cities();
        let lawyers = generate_lawyers(seed, count, &cities);
        log::info!(
            "Directory ready: {} lawyers across {} cities",
            lawyers.len(),
            cities.len()
        );

        Self {
            lawyers,
            cities,
            pricing: pricing_plans(),
        }
    }

    /// All lawyer records, in generation order.
    #[must_use]
    pub fn lawyers(&self) -> &[LawyerRecord] {
        &self.lawyers
    }

    /// Mutable access to the records, for the one sanctioned
    /// post-construction write: profile-image assignment.
    pub fn lawyers_mut(&mut self) -> &mut [LawyerRecord] {
        &mut self.lawyers
    }

    /// The city registry.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The pricing catalog.
    #[must_use]
    pub fn pricing_plans(&self) -> &[PricingPlan] {
        &self.pricing
    }

    /// Looks up a single lawyer by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::LawyerNotFound`] for an unknown id.
    pub fn lawyer_by_id(&self, id: &str) -> Result<&LawyerRecord, DirectoryError> {
        self.lawyers
            .iter()
            .find(|lawyer| lawyer.id == id)
            .ok_or_else(|| DirectoryError::LawyerNotFound { id: id.to_string() })
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_has_expected_shape() {
        let store = DirectoryStore::new();
        assert_eq!(store.lawyers().len(), DEFAULT_LAWYER_COUNT);
        assert_eq!(store.cities().len(), 15);
        assert_eq!(store.pricing_plans().len(), 3);
    }

    #[test]
    fn lookup_by_id_round_trips() {
        let store = DirectoryStore::new();
        let first = &store.lawyers()[0];
        let found = store.lawyer_by_id(&first.id).expect("known id");
        assert_eq!(found.id, first.id);
    }

    #[test]
    fn lookup_unknown_id_is_not_found() {
        let store = DirectoryStore::new();
        let err = store.lawyer_by_id("lawyer-9999").unwrap_err();
        assert!(matches!(err, DirectoryError::LawyerNotFound { .. }));
        assert_eq!(err.to_string(), "No lawyer found with id lawyer-9999");
    }
}
