//! Game configuration
//!
//! Every tunable the gameplay layer reads, with defaults matching the
//! shipped levels. Loadable from TOML or RON through [`Config`].

use golf_engine::config::Config;
use golf_engine::foundation::math::constants::PI;
use golf_engine::physics::PhysicsSettings;
use serde::{Deserialize, Serialize};

/// Top-level game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Physics step settings
    pub physics: PhysicsSettings,
    /// Swing timing and strength
    pub swing: SwingConfig,
    /// Sizes and values used when building a level
    pub level: LevelConfig,
    /// Player movement and camera limits
    pub player: PlayerConfig,
}

impl Config for GameConfig {}

/// Swing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwingConfig {
    /// Charge cap, in seconds of holding
    pub max_charge: f32,
    /// Speed of the release sweep, in multiples of power per second
    pub release_rate: f32,
    /// Speed of the return to rest after the sweep
    pub recovery_rate: f32,
    /// Reach of the club beyond the target's radius
    pub hit_radius: f32,
    /// Velocity given by a full-power swing
    pub max_hit_velocity: f32,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            max_charge: 0.5,
            release_rate: 8.0,
            recovery_rate: 6.0,
            hit_radius: 1.0,
            max_hit_velocity: 10.0,
        }
    }
}

/// Level construction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Hole radius at scale 1
    pub hole_radius_start: f32,
    /// Ball radius
    pub ball_radius_start: f32,
    /// Pickup radius
    pub item_radius: f32,
    /// Hole growth per absorbed pickup
    pub item_pickup_value: f32,
    /// Friction of the ground plane
    pub ground_friction: f32,
    /// Height added to the ball and hole on load so they start clear of the ground
    pub spawn_lift: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            hole_radius_start: 0.5,
            ball_radius_start: 0.2,
            item_radius: 0.3,
            item_pickup_value: 0.2,
            ground_friction: 0.7,
            spawn_lift: 0.2,
        }
    }
}

/// Player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Walking speed in units per second
    pub speed: f32,
    /// Speed multiplier while sprinting
    pub sprint_multiplier: f32,
    /// Lowest camera pitch (looking straight down)
    pub pitch_min: f32,
    /// Highest camera pitch (looking straight up)
    pub pitch_max: f32,
    /// Pitch at which the club starts moving to the aim pose; swings need a lower pitch
    pub aim_pitch_start: f32,
    /// Pitch at which the club is fully in the aim pose
    pub aim_pitch_end: f32,
    /// Vertical field of view used to scale look input
    pub fovy: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            sprint_multiplier: 3.0,
            pitch_min: 0.0,
            pitch_max: PI,
            aim_pitch_start: 0.65,
            aim_pitch_end: 0.35,
            fovy: 60.0_f32.to_radians(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.swing.max_charge, 0.5);
        assert_eq!(config.level.ground_friction, 0.7);
        assert_eq!(config.physics.drag, 0.7);
        assert!(config.player.aim_pitch_end < config.player.aim_pitch_start);
    }

    #[test]
    fn test_nested_toml_override() {
        let config = GameConfig::from_toml_str(
            "[swing]\nmax_hit_velocity = 12.5\n\n[physics]\ndrag = 0.1\n",
        )
        .unwrap();
        assert_eq!(config.swing.max_hit_velocity, 12.5);
        assert_eq!(config.swing.hit_radius, 1.0);
        assert_eq!(config.physics.drag, 0.1);
        assert_eq!(config.level, LevelConfig::default());
    }
}
