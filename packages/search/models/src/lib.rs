#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Search query and facet filter types for the lawyer directory.
//!
//! [`SearchQuery`] carries the query bar's free-text inputs;
//! [`FilterState`] carries the sidebar facets. Both are replaced
//! wholesale on every interaction rather than mutated in place, and both
//! combine with logical AND in the pipeline.

use counsel_map_lawyer_models::{BarAssociation, ExperienceBand, Gender, PracticeArea};
use serde::{Deserialize, Serialize};

/// An inclusive closed numeric range `[min, max]`.
///
/// Full-range defaults (fees 0-100000, rating 0-5) behave identically to
/// "no constraint" because both bounds are inclusive; there is no
/// separate unset sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeFilter<T> {
    /// Lower bound, inclusive.
    pub min: T,
    /// Upper bound, inclusive.
    pub max: T,
}

impl<T: PartialOrd + Copy> RangeFilter<T> {
    /// Creates a range filter.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within `[min, max]`, inclusive at both ends.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Default full fee range treated as unconstrained.
pub const FULL_FEE_RANGE: RangeFilter<u32> = RangeFilter::new(0, 100_000);

/// Default full rating range treated as unconstrained.
pub const FULL_RATING_RANGE: RangeFilter<f64> = RangeFilter::new(0.0, 5.0);

/// Free-text inputs from the query bar.
///
/// Empty strings mean "no constraint". `location` matches either city or
/// state; `domain` constrains the practice-area tag set independently of
/// the sidebar's practice-area facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Keyword matched as a case-insensitive substring of first name,
    /// last name, or any practice-area label.
    pub keyword: String,
    /// Location matched case-insensitively against city OR state.
    pub location: String,
    /// Single practice-area label, "any tag equals" semantics.
    pub domain: String,
}

impl SearchQuery {
    /// Whether no field constrains anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty() && self.location.is_empty() && self.domain.is_empty()
    }
}

/// Sidebar facet constraints.
///
/// All active facets combine with logical AND; within a multi-valued
/// facet, membership is logical OR. An empty list or `None` means the
/// facet is inactive. City/state here overlap with the query bar's
/// location on purpose; both must pass when both are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Exact-match city facet.
    pub city: Option<String>,
    /// Exact-match state facet.
    pub state: Option<String>,
    /// Practice-area facet, OR within the set.
    pub domains: Vec<PracticeArea>,
    /// Gender facet.
    pub genders: Vec<Gender>,
    /// Bar-association facet.
    pub bar_associations: Vec<BarAssociation>,
    /// Experience-band facet.
    pub experience_bands: Vec<ExperienceBand>,
    /// Fee-per-hearing range, inclusive.
    pub fees: Option<RangeFilter<u32>>,
    /// Rating range, inclusive.
    pub rating: Option<RangeFilter<f64>>,
}

impl FilterState {
    /// Whether no facet constrains anything.
    ///
    /// Full-range fee/rating filters still count as "set" here; they
    /// just happen to pass every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.state.is_none()
            && self.domains.is_empty()
            && self.genders.is_empty()
            && self.bar_associations.is_empty()
            && self.experience_bands.is_empty()
            && self.fees.is_none()
            && self.rating.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_closed_at_both_bounds() {
        let range = RangeFilter::new(5000u32, 20000);
        assert!(range.contains(5000));
        assert!(range.contains(20000));
        assert!(!range.contains(4999));
        assert!(!range.contains(20001));
    }

    #[test]
    fn full_ranges_pass_domain_values() {
        assert!(FULL_FEE_RANGE.contains(0));
        assert!(FULL_FEE_RANGE.contains(100_000));
        assert!(FULL_RATING_RANGE.contains(0.0));
        assert!(FULL_RATING_RANGE.contains(5.0));
    }

    #[test]
    fn default_query_and_filters_are_empty() {
        assert!(SearchQuery::default().is_empty());
        assert!(FilterState::default().is_empty());

        let mut filters = FilterState::default();
        filters.genders.push(Gender::Female);
        assert!(!filters.is_empty());
    }
}
