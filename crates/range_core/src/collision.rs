//! Primitive collision shapes and intersection algorithms
//!
//! Provides the ray and axis-aligned box tests used for hit resolution.
//! Targets are upright panels that never rotate, so a world-space AABB per
//! target is exact.

use crate::foundation::math::Vec3;

/// A ray for hit testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (normalized on construction)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a ray test against the target pool
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Index of the hit target within the pool
    pub index: usize,
    /// The distance from the ray origin to the hit point
    pub distance: f32,
    /// The point of intersection in world space
    pub point: Vec3,
}

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates a new AABB from explicit corners
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from a center point and half extents
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Check if a point lies inside the box
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Test ray intersection with this box using the slab method
    ///
    /// Returns the entry distance along the ray, `Some(0.0)` when the ray
    /// starts inside the box, or `None` on a miss or when the box is
    /// entirely behind the origin.
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let direction = ray.direction[axis];
            if direction.abs() < f32::EPSILON {
                // Parallel to this slab: must already be between the planes
                if ray.origin[axis] < self.min[axis] || ray.origin[axis] > self.max[axis] {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / direction;
            let mut t0 = (self.min[axis] - ray.origin[axis]) * inv;
            let mut t1 = (self.max[axis] - ray.origin[axis]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        if t_exit < 0.0 {
            return None; // Box entirely behind the ray origin
        }

        Some(t_enter.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb::from_center_half_extents(center, Vec3::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn test_ray_hits_box_ahead() {
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        let aabb = unit_box_at(Vec3::new(0.0, 0.0, -5.0));

        let t = aabb.intersect_ray(&ray).expect("should hit");
        assert_relative_eq!(t, 4.5, epsilon = 1e-5);
        assert_relative_eq!(ray.point_at(t).z, -4.5, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_misses_offset_box() {
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        let aabb = unit_box_at(Vec3::new(3.0, 0.0, -5.0));
        assert!(aabb.intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_box_behind_origin_not_hit() {
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        let aabb = unit_box_at(Vec3::new(0.0, 0.0, 5.0));
        assert!(aabb.intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_ray_starting_inside_hits_at_zero() {
        let ray = Ray::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0));
        let aabb = unit_box_at(Vec3::zeros());
        assert_relative_eq!(aabb.intersect_ray(&ray).expect("inside"), 0.0);
    }

    #[test]
    fn test_axis_parallel_ray_outside_slab() {
        // Ray runs parallel to the box face but offset above it
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let aabb = unit_box_at(Vec3::new(0.0, 0.0, -5.0));
        assert!(aabb.intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_contains() {
        let aabb = unit_box_at(Vec3::zeros());
        assert!(aabb.contains(Vec3::new(0.25, -0.25, 0.0)));
        assert!(!aabb.contains(Vec3::new(0.75, 0.0, 0.0)));
    }
}
