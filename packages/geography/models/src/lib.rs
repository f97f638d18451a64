#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! City and geographic coordinate types.
//!
//! These types back both the city registry (the globe picker's marker
//! list) and the directory generator's city/state assignment. They are
//! independent of the lawyer record data.

use serde::{Deserialize, Serialize};

/// A longitude/latitude pair in degrees.
///
/// Invariant: latitude in [-90, 90] and longitude in [-180, 180]. The
/// sphere projection math assumes this; [`GeoPoint::new`] enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
}

impl GeoPoint {
    /// Creates a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateRangeError`] if either component is outside
    /// its valid range.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, CoordinateRangeError> {
        if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateRangeError {
                longitude,
                latitude,
            });
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Whether this point satisfies the coordinate invariant.
    ///
    /// Used to re-validate points that arrive through deserialization,
    /// which bypasses [`GeoPoint::new`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude) && (-90.0..=90.0).contains(&self.latitude)
    }
}

/// Error returned when constructing a [`GeoPoint`] outside the valid
/// latitude/longitude ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateRangeError {
    /// The rejected longitude.
    pub longitude: f64,
    /// The rejected latitude.
    pub latitude: f64,
}

impl std::fmt::Display for CoordinateRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "coordinates ({}, {}) outside longitude [-180,180] / latitude [-90,90]",
            self.longitude, self.latitude
        )
    }
}

impl std::error::Error for CoordinateRangeError {}

/// A city in the static registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// City name.
    pub name: String,
    /// State the city belongs to.
    pub state: String,
    /// Geographic location.
    pub coordinates: GeoPoint,
    /// Resident population.
    pub population: u64,
    /// Number of directory lawyers in this city; drives marker sizing
    /// on the globe, nothing else.
    pub lawyer_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let p = GeoPoint::new(77.1025, 28.7041).expect("valid");
        assert!(p.is_valid());
        assert!((p.longitude - 77.1025).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_range_boundaries() {
        assert!(GeoPoint::new(-180.0, -90.0).is_ok());
        assert!(GeoPoint::new(180.0, 90.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(GeoPoint::new(180.1, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -90.5).is_err());
        let err = GeoPoint::new(200.0, 95.0).unwrap_err();
        assert!(err.to_string().contains("200"));
    }
}
