//! Configuration system
//!
//! All gameplay tuning lives here: movement speed, mouse sensitivity, target
//! pool sizing, spawn ranges, and scoring. Every field has a default matching
//! the original demo's constants, so a missing or partial config file still
//! yields a playable session.

use serde::{Deserialize, Serialize};

/// Configuration trait for types loadable from TOML or RON files
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player movement, health, and contact-damage settings
    pub player: PlayerConfig,

    /// Target pool sizing, motion, and scoring settings
    pub targets: TargetConfig,

    /// Camera projection settings
    pub camera: CameraConfig,
}

impl GameConfig {
    /// Load configuration from `path`, falling back to defaults if the file
    /// does not exist or fails to parse
    #[must_use]
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(e) => {
                log::warn!("Using default config ({path}: {e})");
                Self::default()
            }
        }
    }
}

impl Config for GameConfig {}

/// Player configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Movement speed in world units per second
    pub move_speed: f32,

    /// Mouse sensitivity in radians per pixel of mouse movement
    pub mouse_sensitivity: f32,

    /// Starting and maximum health
    pub max_health: u32,

    /// Health drained per frame of target contact
    pub contact_damage: u32,

    /// Distance below which a target damages the player
    pub contact_radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            mouse_sensitivity: 0.002,
            max_health: 100,
            contact_damage: 1,
            contact_radius: 2.0,
        }
    }
}

/// Target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Number of targets kept alive in the pool
    pub count: usize,

    /// Hits required to destroy a target
    pub hit_points: u32,

    /// Points awarded per hit that leaves the target standing
    pub hit_score: u32,

    /// Points awarded when a target is destroyed
    pub destroy_score: u32,

    /// Lateral oscillation bound on X; targets reverse at +/- this value
    pub lateral_bound: f32,

    /// Minimum lateral speed in units per second
    pub min_speed: f32,

    /// Maximum lateral speed in units per second
    pub max_speed: f32,

    /// Spawn range on X is +/- this value
    pub spawn_half_width: f32,

    /// Height targets spawn at
    pub spawn_height: f32,

    /// Nearest spawn distance in front of the origin
    pub spawn_depth_min: f32,

    /// Farthest spawn distance in front of the origin
    pub spawn_depth_max: f32,

    /// Target half extents (half width, half height, half thickness)
    pub half_extents: [f32; 3],
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            count: 5,
            hit_points: 3,
            hit_score: 10,
            destroy_score: 50,
            lateral_bound: 20.0,
            min_speed: 0.6,
            max_speed: 1.8,
            spawn_half_width: 20.0,
            spawn_height: 1.0,
            spawn_depth_min: 5.0,
            spawn_depth_max: 45.0,
            half_extents: [0.5, 1.0, 0.05],
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,

    /// Aspect ratio (width / height) before the first resize event
    pub aspect: f32,

    /// Near clipping plane distance
    pub near: f32,

    /// Far clipping plane distance
    pub far: f32,

    /// Eye height above the floor
    pub eye_height: f32,

    /// Starting distance back from the origin on Z
    pub start_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            eye_height: 1.6,
            start_distance: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_constants() {
        let config = GameConfig::default();
        assert_eq!(config.player.max_health, 100);
        assert_eq!(config.targets.count, 5);
        assert!((config.player.move_speed - 5.0).abs() < f32::EPSILON);
        assert!((config.player.contact_radius - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            [player]
            move_speed = 8.0
            "#,
        )
        .expect("partial config should parse");

        assert!((config.player.move_speed - 8.0).abs() < f32::EPSILON);
        assert_eq!(config.player.max_health, 100);
        assert_eq!(config.targets.count, 5);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GameConfig::default();
        let text = toml::to_string_pretty(&config).expect("serialize");
        let parsed: GameConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.targets.hit_points, config.targets.hit_points);
        assert_eq!(parsed.player.contact_damage, config.player.contact_damage);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = GameConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default())
            .expect("serialize");
        let parsed: GameConfig = ron::from_str(&text).expect("parse");
        assert_eq!(parsed.targets.destroy_score, config.targets.destroy_score);
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let result = GameConfig::load_from_file("settings.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
