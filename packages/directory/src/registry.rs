//! Compile-time registry of the cities shown on the globe picker.
//!
//! The city table is embedded as TOML via `include_str!`. Adding a city
//! requires editing `data/cities.toml`; the expected count below is
//! enforced by a test.

use counsel_map_geography_models::City;
use serde::Deserialize;

/// Number of registered cities. Updated when cities are added. Enforced
/// by a test.
#[cfg(test)]
const EXPECTED_CITY_COUNT: usize = 15;

/// Embedded city table.
const CITIES_TOML: &str = include_str!("../data/cities.toml");

#[derive(Deserialize)]
struct CityRegistryFile {
    cities: Vec<City>,
}

/// Returns all registered cities.
///
/// # Panics
///
/// Panics if the embedded TOML fails to parse or a city carries
/// out-of-range coordinates. Since the table is a compile-time constant,
/// failures indicate a development error and are caught during CI.
#[must_use]
pub fn major_cities() -> Vec<City> {
    let file: CityRegistryFile = toml::de::from_str(CITIES_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse city registry: {e}"));

    for city in &file.cities {
        assert!(
            city.coordinates.is_valid(),
            "City '{}' has out-of-range coordinates",
            city.name
        );
    }

    file.cities
}

/// All states selectable in the location facet.
#[must_use]
pub const fn states() -> &'static [&'static str] {
    &[
        "Andhra Pradesh",
        "Arunachal Pradesh",
        "Assam",
        "Bihar",
        "Chhattisgarh",
        "Goa",
        "Gujarat",
        "Haryana",
        "Himachal Pradesh",
        "Jharkhand",
        "Karnataka",
        "Kerala",
        "Madhya Pradesh",
        "Maharashtra",
        "Manipur",
        "Meghalaya",
        "Mizoram",
        "Nagaland",
        "Odisha",
        "Punjab",
        "Rajasthan",
        "Sikkim",
        "Tamil Nadu",
        "Telangana",
        "Tripura",
        "Uttar Pradesh",
        "Uttarakhand",
        "West Bengal",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn loads_all_cities() {
        let cities = major_cities();
        assert_eq!(
            cities.len(),
            EXPECTED_CITY_COUNT,
            "Expected {EXPECTED_CITY_COUNT} cities, found {}. \
             Update EXPECTED_CITY_COUNT after adding/removing cities.",
            cities.len()
        );
    }

    #[test]
    fn city_names_are_unique() {
        let cities = major_cities();
        let mut seen = BTreeSet::new();
        for city in &cities {
            assert!(seen.insert(&city.name), "Duplicate city name: {}", city.name);
        }
    }

    #[test]
    fn all_cities_have_required_fields() {
        for city in &major_cities() {
            assert!(!city.name.is_empty(), "City has empty name");
            assert!(!city.state.is_empty(), "City {} has empty state", city.name);
            assert!(
                city.coordinates.is_valid(),
                "City {} has invalid coordinates",
                city.name
            );
            assert!(city.population > 0, "City {} has zero population", city.name);
            assert!(
                city.lawyer_count > 0,
                "City {} has zero lawyer count",
                city.name
            );
        }
    }

    #[test]
    fn city_states_appear_in_state_list() {
        // Delhi is a union territory and intentionally absent from the
        // state facet list, matching the source tables.
        let states: BTreeSet<&str> = states().iter().copied().collect();
        for city in &major_cities() {
            if city.state == "Delhi" {
                continue;
            }
            assert!(
                states.contains(city.state.as_str()),
                "City {} references unknown state {}",
                city.name,
                city.state
            );
        }
    }
}
