//! Longitude/latitude to sphere-surface projection and marker sizing.

use counsel_map_geography_models::GeoPoint;

use crate::math::Vec3;

/// Radius of the globe mesh.
pub const GLOBE_RADIUS: f64 = 80.0;

/// Base marker radius added to the size term.
pub const MARKER_BASE_RADIUS: f64 = 0.5;

/// Projects a coordinate pair onto a sphere of the given radius.
///
/// Standard equirectangular-to-Cartesian mapping. The sign conventions
/// here are load-bearing: markers must line up with the reference
/// imagery, so any change shifts every city off its coast.
#[must_use]
pub fn project_to_sphere(point: GeoPoint, radius: f64) -> Vec3 {
    let phi = (90.0 - point.latitude).to_radians();
    let theta = (point.longitude + 180.0).to_radians();

    Vec3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Marker radius for a city's lawyer count.
///
/// Logarithmic, so very different counts produce visually similar
/// markers; keeps dense regions from occluding each other.
#[must_use]
pub fn marker_radius(lawyer_count: u32) -> f64 {
    f64::from(lawyer_count.max(1)).ln() / 3.0 + MARKER_BASE_RADIUS
}
