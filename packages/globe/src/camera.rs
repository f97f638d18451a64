//! Orbiting perspective camera.
//!
//! The camera orbits the origin on an azimuth/pitch sphere; the globe's
//! auto-spin is a separate rotation owned by the scene. Drag adjusts the
//! orbit angles, scroll adjusts the distance within a clamped range.

use crate::math::Vec3;
use crate::picking::Ray;

/// Vertical field of view in degrees.
pub const FOV_Y_DEGREES: f64 = 45.0;

/// Near clip plane distance.
pub const NEAR_PLANE: f64 = 0.1;

/// Far clip plane distance; also the picking cut-off.
pub const FAR_PLANE: f64 = 1000.0;

/// Initial camera distance from the globe center.
pub const DEFAULT_DISTANCE: f64 = 200.0;

/// Closest allowed zoom.
pub const MIN_DISTANCE: f64 = 100.0;

/// Farthest allowed zoom.
pub const MAX_DISTANCE: f64 = 300.0;

/// Orbit radians per dragged pixel.
const ROTATE_SPEED: f64 = 0.005;

/// Pitch clamp, just short of the poles so the view basis never
/// degenerates.
const MAX_PITCH: f64 = std::f64::consts::FRAC_PI_2 - 0.01;

const WORLD_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// An orbiting perspective camera looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    azimuth: f64,
    pitch: f64,
    distance: f64,
    aspect: f64,
}

impl OrbitCamera {
    /// Creates a camera at the default distance on the +Z axis.
    #[must_use]
    pub const fn new(aspect: f64) -> Self {
        Self {
            azimuth: 0.0,
            pitch: 0.0,
            distance: DEFAULT_DISTANCE,
            aspect,
        }
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.pitch.cos() * self.azimuth.sin(),
            self.distance * self.pitch.sin(),
            self.distance * self.pitch.cos() * self.azimuth.cos(),
        )
    }

    /// Current distance from the origin.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Applies a pointer drag of `(dx, dy)` pixels to the orbit angles.
    pub fn orbit(&mut self, dx_px: f64, dy_px: f64) {
        self.azimuth -= dx_px * ROTATE_SPEED;
        self.pitch = (self.pitch + dy_px * ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Applies a scroll delta to the distance, clamped to
    /// [`MIN_DISTANCE`, `MAX_DISTANCE`].
    pub fn zoom(&mut self, delta: f64) {
        self.distance = (self.distance + delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Updates the aspect ratio after a surface resize.
    pub fn set_aspect(&mut self, aspect: f64) {
        if aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Builds the world-space ray under a pointer position.
    ///
    /// `(x_px, y_px)` are surface pixels with the origin at the top-left,
    /// matching pointer events.
    #[must_use]
    pub fn screen_ray(&self, x_px: f64, y_px: f64, width: f64, height: f64) -> Option<Ray> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        let ndc_x = (x_px / width) * 2.0 - 1.0;
        let ndc_y = -((y_px / height) * 2.0 - 1.0);

        let position = self.position();
        let forward = (Vec3::ZERO - position).normalize()?;
        let right = forward.cross(WORLD_UP).normalize()?;
        let up = right.cross(forward);

        let half_height = (FOV_Y_DEGREES.to_radians() / 2.0).tan();
        let half_width = half_height * self.aspect;

        let direction = (forward
            + right.scale(ndc_x * half_width)
            + up.scale(ndc_y * half_height))
        .normalize()?;

        Some(Ray::new(position, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_sits_on_positive_z() {
        let camera = OrbitCamera::new(1.0);
        let position = camera.position();
        assert!(position.x.abs() < 1e-12);
        assert!(position.y.abs() < 1e-12);
        assert!((position.z - DEFAULT_DISTANCE).abs() < 1e-12);
    }

    #[test]
    fn center_ray_points_at_the_origin() {
        let camera = OrbitCamera::new(1.0);
        let ray = camera.screen_ray(400.0, 300.0, 800.0, 600.0).expect("ray");
        // Direction should be -Z toward the origin.
        assert!((ray.direction.z + 1.0).abs() < 1e-9);
        assert!(ray.direction.x.abs() < 1e-9);
        assert!(ray.direction.y.abs() < 1e-9);
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut camera = OrbitCamera::new(1.0);
        camera.zoom(-500.0);
        assert!((camera.distance() - MIN_DISTANCE).abs() < 1e-12);
        camera.zoom(1000.0);
        assert!((camera.distance() - MAX_DISTANCE).abs() < 1e-12);
    }

    #[test]
    fn pitch_clamps_short_of_the_poles() {
        let mut camera = OrbitCamera::new(1.0);
        camera.orbit(0.0, 1e6);
        // The basis must stay well-defined at the clamp.
        assert!(camera.screen_ray(0.0, 0.0, 800.0, 600.0).is_some());
    }

    #[test]
    fn orbit_moves_the_camera() {
        let mut camera = OrbitCamera::new(1.0);
        let before = camera.position();
        camera.orbit(50.0, 0.0);
        assert_ne!(camera.position(), before);
        // Orbiting preserves the distance.
        assert!((camera.position().length() - DEFAULT_DISTANCE).abs() < 1e-9);
    }
}
