#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Filter, search, and sort pipeline over the lawyer directory.
//!
//! A pure function from (records, query, filters) to an ordered result
//! list. Each constraint is an independent predicate; a record must pass
//! all active ones. The scan is linear per predicate per record, which
//! is fine for a fixed ~100-record dataset and deliberately nothing
//! more.

use counsel_map_lawyer_models::LawyerRecord;
use counsel_map_search_models::{FilterState, SearchQuery};

/// Runs the full pipeline: query-bar predicates, then facet predicates,
/// then the rating sort.
///
/// Results are ordered by descending review rating; equal ratings keep
/// their input order (stable sort, no secondary key). An empty query and
/// empty filter state return every record.
#[must_use]
pub fn search_lawyers<'a>(
    records: &'a [LawyerRecord],
    query: &SearchQuery,
    filters: &FilterState,
) -> Vec<&'a LawyerRecord> {
    let mut results: Vec<&LawyerRecord> = records
        .iter()
        .filter(|lawyer| matches_query(lawyer, query))
        .filter(|lawyer| matches_filters(lawyer, filters))
        .collect();

    results.sort_by(|a, b| b.review.rating.total_cmp(&a.review.rating));
    results
}

/// Query-bar predicates. Empty fields constrain nothing.
#[must_use]
pub fn matches_query(lawyer: &LawyerRecord, query: &SearchQuery) -> bool {
    if !query.keyword.is_empty() {
        let keyword = query.keyword.to_lowercase();
        let in_name = lawyer.first_name.to_lowercase().contains(&keyword)
            || lawyer.last_name.to_lowercase().contains(&keyword);
        let in_domains = lawyer
            .domain_of_law
            .iter()
            .any(|area| area.as_ref().to_lowercase().contains(&keyword));
        if !in_name && !in_domains {
            return false;
        }
    }

    if !query.location.is_empty()
        && !lawyer.city.eq_ignore_ascii_case(&query.location)
        && !lawyer.state.eq_ignore_ascii_case(&query.location)
    {
        return false;
    }

    if !query.domain.is_empty()
        && !lawyer
            .domain_of_law
            .iter()
            .any(|area| area.matches_label(&query.domain))
    {
        return false;
    }

    true
}

/// Sidebar facet predicates. Facets AND together; multi-valued facets
/// are OR within the selected set, and an empty selection is inactive.
#[must_use]
pub fn matches_filters(lawyer: &LawyerRecord, filters: &FilterState) -> bool {
    if let Some(city) = &filters.city {
        if !lawyer.city.eq_ignore_ascii_case(city) {
            return false;
        }
    }

    if let Some(state) = &filters.state {
        if !lawyer.state.eq_ignore_ascii_case(state) {
            return false;
        }
    }

    if !filters.domains.is_empty()
        && !lawyer
            .domain_of_law
            .iter()
            .any(|area| filters.domains.contains(area))
    {
        return false;
    }

    if !filters.genders.is_empty() && !filters.genders.contains(&lawyer.gender) {
        return false;
    }

    if !filters.bar_associations.is_empty()
        && !filters.bar_associations.contains(&lawyer.bar_association)
    {
        return false;
    }

    if !filters.experience_bands.is_empty()
        && !filters
            .experience_bands
            .iter()
            .any(|band| band.contains(lawyer.years_of_experience))
    {
        return false;
    }

    if let Some(fees) = &filters.fees {
        if !fees.contains(lawyer.fees_per_hearing) {
            return false;
        }
    }

    if let Some(rating) = &filters.rating {
        if !rating.contains(lawyer.review.rating) {
            return false;
        }
    }

    true
}
