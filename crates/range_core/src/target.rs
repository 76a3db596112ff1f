//! Moving target pool
//!
//! A fixed-size pool of upright panel targets. Each target oscillates
//! laterally between two bounds and carries a hit-point counter. Destroyed
//! targets are replaced in place by a fresh spawn, so the pool size is
//! constant for the life of a session.

use crate::collision::{Aabb, Ray, RayHit};
use crate::config::TargetConfig;
use crate::foundation::math::Vec3;
use rand::Rng;

/// A single shootable target
#[derive(Debug, Clone)]
pub struct Target {
    /// Center position in world space
    pub position: Vec3,

    /// Lateral speed in units per second; the sign is the current direction
    pub lateral_speed: f32,

    /// Remaining hits before the target is destroyed
    pub hit_points: u32,
}

impl Target {
    /// World-space bounding box for this target
    #[must_use]
    pub fn aabb(&self, half_extents: Vec3) -> Aabb {
        Aabb::from_center_half_extents(self.position, half_extents)
    }
}

/// Fixed-size pool of moving targets
#[derive(Debug)]
pub struct TargetPool {
    targets: Vec<Target>,
    config: TargetConfig,
}

impl TargetPool {
    /// Spawn a full pool of `config.count` targets
    pub fn new<R: Rng>(config: TargetConfig, rng: &mut R) -> Self {
        let targets = (0..config.count).map(|_| spawn(&config, rng)).collect();
        Self { targets, config }
    }

    /// Number of targets in the pool (constant for the session)
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the pool is empty (only for a zero-count config)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate over the live targets
    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    /// Get a target by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    /// Advance lateral oscillation by one frame
    ///
    /// Targets reverse direction on reaching either lateral bound.
    pub fn advance(&mut self, dt: f32) {
        let bound = self.config.lateral_bound;
        for target in &mut self.targets {
            target.position.x += target.lateral_speed * dt;
            if target.position.x > bound || target.position.x < -bound {
                target.position.x = target.position.x.clamp(-bound, bound);
                target.lateral_speed = -target.lateral_speed;
            }
        }
    }

    /// Find the nearest target along a ray
    ///
    /// Every target's box is tested; the smallest positive distance wins.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let half_extents = self.half_extents();
        let mut closest: Option<RayHit> = None;

        for (index, target) in self.targets.iter().enumerate() {
            if let Some(distance) = target.aabb(half_extents).intersect_ray(ray) {
                if closest.map_or(true, |hit| distance < hit.distance) {
                    closest = Some(RayHit {
                        index,
                        distance,
                        point: ray.point_at(distance),
                    });
                }
            }
        }

        closest
    }

    /// Apply one hit of damage to a target
    ///
    /// Returns the remaining hit points. At zero the caller is expected to
    /// follow up with [`Self::respawn`].
    pub fn damage(&mut self, index: usize) -> u32 {
        let target = &mut self.targets[index];
        target.hit_points = target.hit_points.saturating_sub(1);
        target.hit_points
    }

    /// Replace the target at `index` with a fresh spawn
    pub fn respawn<R: Rng>(&mut self, index: usize, rng: &mut R) {
        self.targets[index] = spawn(&self.config, rng);
    }

    /// Target half extents from configuration
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        let [hx, hy, hz] = self.config.half_extents;
        Vec3::new(hx, hy, hz)
    }
}

/// Spawn a target at a randomized position in the firing lane
///
/// X is uniform across the lane width, Y is fixed, and Z lands in the band in
/// front of the player, matching the original demo's spawn function.
fn spawn<R: Rng>(config: &TargetConfig, rng: &mut R) -> Target {
    let x = rng.gen_range(-config.spawn_half_width..=config.spawn_half_width);
    let z = -rng.gen_range(config.spawn_depth_min..=config.spawn_depth_max);
    let speed = rng.gen_range(config.min_speed..=config.max_speed);
    let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

    Target {
        position: Vec3::new(x, config.spawn_height, z),
        lateral_speed: speed * direction,
        hit_points: config.hit_points.max(1),
    }
}
