//! Tunable constants for the physics step

use crate::config::Config;
use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// What to do when a moving body in a contact is effectively at rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StationaryPolicy {
    /// Skip only the affected contact
    #[default]
    SkipPair,
    /// Stop resolving and skip integration for the whole step
    AbortStep,
}

/// Physics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Gravity acceleration (Z-up world)
    pub gravity: Vec3,
    /// Linear drag coefficient
    pub drag: f32,
    /// Speeds below this count as stationary during contact response
    pub stationary_speed: f32,
    /// Handling of stationary bodies in contacts
    pub stationary_policy: StationaryPolicy,
    /// Ball/hole penetration needed to finish the level
    pub goal_depth: f32,
    /// Base strength of the hole's pull on the ball
    pub pull_strength_start: f32,
    /// Pulls weaker than this are not applied
    pub min_pull_strength: f32,
    /// Lower bound for the ball/hole distance in the pull formula
    pub pull_distance_epsilon: f32,
    /// Contacts this close to tangential skip position correction
    pub tangent_epsilon: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, 0.0, -9.8),
            drag: 0.7,
            stationary_speed: 1e-5,
            stationary_policy: StationaryPolicy::SkipPair,
            goal_depth: 0.1,
            pull_strength_start: 1.0,
            min_pull_strength: 0.5,
            pull_distance_epsilon: 0.005,
            tangent_epsilon: 1e-4,
        }
    }
}

impl Config for PhysicsSettings {}

impl PhysicsSettings {
    /// Settings with no gravity, drag or pull, for kinematic tests and tools
    pub fn frictionless() -> Self {
        Self {
            gravity: Vec3::zeros(),
            drag: 0.0,
            pull_strength_start: 0.0,
            ..Self::default()
        }
    }
}
