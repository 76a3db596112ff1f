//! First-person camera controller
//!
//! Converts held movement keys and accumulated mouse deltas into a camera
//! position and orientation update each frame. Yaw rotates freely; pitch is
//! clamped to straight up / straight down. Movement ignores pitch so looking
//! at the floor does not slow the player down, matching the original demo.
//!
//! There is deliberately no collision with the arena walls: the player can
//! walk through boundaries. That gap is carried over from the demo this core
//! reimplements.

use crate::collision::Ray;
use crate::config::CameraConfig;
use crate::foundation::math::{constants, rotate_y, utils, Vec3};
use crate::input::InputState;

/// First-person camera with yaw/pitch orientation
#[derive(Debug, Clone)]
pub struct FpsCamera {
    /// Camera position in world space
    pub position: Vec3,

    /// Rotation around the world Y axis in radians; 0 faces -Z
    pub yaw: f32,

    /// Rotation around the camera-local X axis in radians, clamped to
    /// [-pi/2, pi/2]
    pub pitch: f32,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Near clipping plane distance
    pub near: f32,

    /// Far clipping plane distance
    pub far: f32,
}

impl FpsCamera {
    /// Create a camera from configuration, standing at the spawn point
    #[must_use]
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.eye_height, config.start_distance),
            yaw: 0.0,
            pitch: 0.0,
            fov: utils::deg_to_rad(config.fov_degrees),
            aspect: config.aspect,
            near: config.near,
            far: config.far,
        }
    }

    /// Apply accumulated mouse motion to yaw and pitch
    ///
    /// Pitch is clamped every call, so no amount of cumulative mouse movement
    /// can flip the camera past vertical.
    pub fn apply_mouse_delta(&mut self, dx: f64, dy: f64, sensitivity: f32) {
        self.yaw -= dx as f32 * sensitivity;
        self.pitch = (self.pitch - dy as f32 * sensitivity)
            .clamp(-constants::HALF_PI, constants::HALF_PI);
    }

    /// Move the camera from held movement keys
    ///
    /// Builds a camera-local displacement from the four movement flags,
    /// rotates it into the current yaw, and adds it to the position. Axes are
    /// independent, so diagonal movement is faster by sqrt(2) — the original
    /// behaves the same way.
    pub fn advance(&mut self, input: &InputState, speed: f32, dt: f32) {
        let step = speed * dt;
        let mut local = Vec3::zeros();

        if input.forward {
            local.z -= step;
        }
        if input.backward {
            local.z += step;
        }
        if input.left {
            local.x -= step;
        }
        if input.right {
            local.x += step;
        }

        if local != Vec3::zeros() {
            self.position += rotate_y(local, self.yaw);
        }
    }

    /// The view forward vector derived from yaw and pitch
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Ray from the camera through the screen center
    ///
    /// Fire actions always aim at the crosshair, which sits at NDC (0, 0),
    /// so the aim ray is simply position + forward.
    #[must_use]
    pub fn aim_ray(&self) -> Ray {
        Ray::new(self.position, self.forward())
    }

    /// Snap the view toward a world-space direction
    ///
    /// Sets yaw and pitch so that [`Self::forward`] points along `direction`.
    /// Pitch is clamped as usual.
    pub fn look_toward(&mut self, direction: Vec3) {
        let horizontal = (direction.x * direction.x + direction.z * direction.z).sqrt();
        self.yaw = (-direction.x).atan2(-direction.z);
        self.pitch = direction
            .y
            .atan2(horizontal)
            .clamp(-constants::HALF_PI, constants::HALF_PI);
    }

    /// Update the aspect ratio for viewport changes
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use approx::assert_relative_eq;

    fn camera() -> FpsCamera {
        FpsCamera::new(&CameraConfig::default())
    }

    #[test]
    fn test_forward_at_rest_faces_negative_z() {
        let cam = camera();
        let forward = cam.forward();
        assert_relative_eq!(forward.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(forward.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(forward.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pitch_clamped_under_extreme_motion() {
        let mut cam = camera();
        for _ in 0..1_000 {
            cam.apply_mouse_delta(0.0, -10_000.0, 0.002);
        }
        assert!(cam.pitch <= constants::HALF_PI);

        for _ in 0..1_000 {
            cam.apply_mouse_delta(0.0, 10_000.0, 0.002);
        }
        assert!(cam.pitch >= -constants::HALF_PI);
    }

    #[test]
    fn test_advance_moves_along_view_direction() {
        let mut cam = camera();
        let mut input = InputState::new();
        input.set_key(KeyCode::W, true);

        // Quarter turn left: forward is now -X
        cam.yaw = constants::HALF_PI;
        let start = cam.position;
        cam.advance(&input, 5.0, 0.1);

        assert_relative_eq!(cam.position.x, start.x - 0.5, epsilon = 1e-5);
        assert_relative_eq!(cam.position.z, start.z, epsilon = 1e-5);
        assert_relative_eq!(cam.position.y, start.y, epsilon = 1e-5);
    }

    #[test]
    fn test_advance_without_input_is_stationary() {
        let mut cam = camera();
        let input = InputState::new();
        let start = cam.position;
        cam.advance(&input, 5.0, 1.0);
        assert_eq!(cam.position, start);
    }

    #[test]
    fn test_look_toward_round_trips_through_forward() {
        let mut cam = camera();
        let direction = Vec3::new(3.0, 1.5, -4.0).normalize();
        cam.look_toward(direction);
        let forward = cam.forward();
        assert_relative_eq!(forward.x, direction.x, epsilon = 1e-5);
        assert_relative_eq!(forward.y, direction.y, epsilon = 1e-5);
        assert_relative_eq!(forward.z, direction.z, epsilon = 1e-5);
    }

    #[test]
    fn test_movement_ignores_pitch() {
        let mut cam = camera();
        cam.pitch = -1.0; // Looking at the floor
        let mut input = InputState::new();
        input.set_key(KeyCode::W, true);

        let start = cam.position;
        cam.advance(&input, 5.0, 0.2);
        assert_relative_eq!(cam.position.y, start.y, epsilon = 1e-6);
        assert_relative_eq!(cam.position.z, start.z - 1.0, epsilon = 1e-5);
    }
}
