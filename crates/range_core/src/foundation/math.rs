//! Math utilities and types
//!
//! Provides the fundamental math types used throughout the game core.

pub use nalgebra::{Rotation3, Unit, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    #[must_use]
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Linear interpolation
    #[must_use]
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

/// Rotate a vector around the world Y axis
///
/// Used to carry camera-local movement into world space: movement input is
/// expressed relative to where the player is facing, then rotated by the
/// camera's current yaw.
#[must_use]
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    Rotation3::from_axis_angle(&Vec3::y_axis(), angle) * v
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotate_y_quarter_turn() {
        // Facing -Z, a quarter turn left (positive yaw) faces -X
        let forward = Vec3::new(0.0, 0.0, -1.0);
        let rotated = rotate_y(forward, constants::HALF_PI);
        assert_relative_eq!(rotated.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_y_preserves_height() {
        let v = Vec3::new(1.0, 2.5, -3.0);
        let rotated = rotate_y(v, 1.234);
        assert_relative_eq!(rotated.y, 2.5, epsilon = 1e-6);
        assert_relative_eq!(rotated.magnitude(), v.magnitude(), epsilon = 1e-5);
    }
}
