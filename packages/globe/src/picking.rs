//! Analytic ray/sphere hit testing for markers.

use crate::math::Vec3;

/// A ray in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Ray direction; normalized by the camera before it gets here.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray.
    #[must_use]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }
}

/// Entry distance of `ray` into a sphere, or `None` on a miss.
///
/// If the origin is inside the sphere the exit distance is returned, so
/// the result is always >= 0.
#[must_use]
pub fn ray_sphere_entry(ray: &Ray, center: Vec3, radius: f64) -> Option<f64> {
    let to_origin = ray.origin - center;
    // Quadratic in t with a = 1 for a unit direction.
    let b = 2.0 * ray.direction.dot(to_origin);
    let c = to_origin.dot(to_origin) - radius * radius;

    let discriminant = b * b - 4.0 * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t_near = (-b - sqrt_d) / 2.0;
    let t_far = (-b + sqrt_d) / 2.0;

    if t_near >= 0.0 {
        Some(t_near)
    } else if t_far >= 0.0 {
        Some(t_far)
    } else {
        None
    }
}

/// Picks the nearest sphere hit by `ray` from `(center, radius)` pairs.
///
/// Ordering contract: the closest entry distance wins; equal distances
/// break toward the lower index, so picking stays deterministic when
/// markers overlap.
#[must_use]
pub fn pick_nearest(ray: &Ray, spheres: &[(Vec3, f64)], max_distance: f64) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (index, (center, radius)) in spheres.iter().enumerate() {
        let Some(t) = ray_sphere_entry(ray, *center, *radius) else {
            continue;
        };
        if t > max_distance {
            continue;
        }

        best = match best {
            None => Some((index, t)),
            Some((_, best_t)) if t < best_t => Some((index, t)),
            other => other,
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x_axis_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn hits_a_sphere_dead_on() {
        let t = ray_sphere_entry(&x_axis_ray(), Vec3::new(10.0, 0.0, 0.0), 2.0).expect("hit");
        assert!((t - 8.0).abs() < 1e-12);
    }

    #[test]
    fn misses_an_offset_sphere() {
        assert!(ray_sphere_entry(&x_axis_ray(), Vec3::new(10.0, 5.0, 0.0), 2.0).is_none());
    }

    #[test]
    fn sphere_behind_the_origin_is_a_miss() {
        assert!(ray_sphere_entry(&x_axis_ray(), Vec3::new(-10.0, 0.0, 0.0), 2.0).is_none());
    }

    #[test]
    fn origin_inside_returns_exit_distance() {
        let t = ray_sphere_entry(&x_axis_ray(), Vec3::ZERO, 3.0).expect("hit");
        assert!((t - 3.0).abs() < 1e-12);
    }

    #[test]
    fn nearest_sphere_wins() {
        let spheres = vec![
            (Vec3::new(20.0, 0.0, 0.0), 1.0),
            (Vec3::new(10.0, 0.0, 0.0), 1.0),
        ];
        let (index, t) = pick_nearest(&x_axis_ray(), &spheres, f64::MAX).expect("hit");
        assert_eq!(index, 1);
        assert!((t - 9.0).abs() < 1e-12);
    }

    #[test]
    fn equal_distances_break_toward_lower_index() {
        let spheres = vec![
            (Vec3::new(10.0, 0.0, 0.0), 1.0),
            (Vec3::new(10.0, 0.0, 0.0), 1.0),
        ];
        let (index, _) = pick_nearest(&x_axis_ray(), &spheres, f64::MAX).expect("hit");
        assert_eq!(index, 0);
    }

    #[test]
    fn max_distance_cuts_off_far_hits() {
        let spheres = vec![(Vec3::new(100.0, 0.0, 0.0), 1.0)];
        assert!(pick_nearest(&x_axis_ray(), &spheres, 50.0).is_none());
    }
}
