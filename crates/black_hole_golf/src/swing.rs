//! Club swing state machine and hit impulse
//!
//! Holding the swing button winds the club back; the held time becomes the
//! swing power. Releasing sweeps the club forward and queues exactly one hit,
//! which [`Swing::take_hit`] hands to the frame loop.

use crate::config::{PlayerConfig, SwingConfig};
use golf_engine::foundation::math::{utils, Vec3};
use golf_engine::physics::{ObjectKey, PhysicsWorld};
use golf_engine::scene::{Scene, TransformId};
use log::{debug, trace};

/// Phase of the swing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwingPhase {
    /// At rest, or returning to rest after a sweep
    #[default]
    Idle,
    /// Button held, charging
    Backswinging,
    /// Button released, club sweeping forward
    Releasing,
}

/// Swing state for one player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Swing {
    phase: SwingPhase,
    /// Club angle; positive while wound back, negative after the sweep
    angle: f32,
    power: f32,
    hit_pending: bool,
}

impl Swing {
    /// Create an idle swing
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    pub fn phase(&self) -> SwingPhase {
        self.phase
    }

    /// Club angle used to pose the club
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Power of the last charged swing
    pub fn power(&self) -> f32 {
        self.power
    }

    /// Start winding back
    ///
    /// Only allowed from [`SwingPhase::Idle`] while the camera looks down past
    /// the aim threshold. Returns whether the backswing started.
    pub fn begin(&mut self, camera_pitch: f32, player: &PlayerConfig) -> bool {
        if self.phase != SwingPhase::Idle || camera_pitch >= player.aim_pitch_start {
            return false;
        }
        self.phase = SwingPhase::Backswinging;
        true
    }

    /// Let go of the club and queue a hit
    pub fn release(&mut self) -> bool {
        if self.phase != SwingPhase::Backswinging {
            return false;
        }
        self.phase = SwingPhase::Releasing;
        self.hit_pending = true;
        debug!("swing released at power {:.3}", self.power);
        true
    }

    /// Advance the club angle by `elapsed` seconds
    pub fn update(&mut self, elapsed: f32, config: &SwingConfig) {
        match self.phase {
            SwingPhase::Backswinging => {
                self.angle = (self.angle + elapsed).min(config.max_charge);
                self.power = self.angle;
            }
            SwingPhase::Releasing => {
                self.angle -= self.power * config.release_rate * elapsed;
                if self.angle <= -self.power {
                    self.angle = -self.power;
                    self.phase = SwingPhase::Idle;
                }
            }
            SwingPhase::Idle => {
                if self.angle < 0.0 {
                    self.angle += self.power * config.recovery_rate * elapsed;
                } else {
                    self.angle = 0.0;
                }
            }
        }
        trace!("swing {:?} angle {:.3}", self.phase, self.angle);
    }

    /// Consume the queued hit, returning its power
    pub fn take_hit(&mut self) -> Option<f32> {
        std::mem::take(&mut self.hit_pending).then_some(self.power)
    }
}

/// Apply a swing of `power` from `player` to `target`
///
/// The hit lands only when the target's center is within the club reach plus
/// the target's current radius. The velocity change points along the player's
/// local -X axis and scales linearly with power up to `max_hit_velocity`.
/// Returns whether the target was hit.
pub fn apply_hit(
    world: &mut PhysicsWorld,
    scene: &Scene,
    target: ObjectKey,
    player: TransformId,
    power: f32,
    config: &SwingConfig,
    target_radius: f32,
) -> bool {
    if power <= 0.0 || config.max_charge <= 0.0 {
        return false;
    }
    let Some(object) = world.get(target) else {
        return false;
    };
    let target_position = scene.world_position(object.transform);
    let distance = (target_position - scene.world_position(player)).norm();
    if distance > config.hit_radius + target_radius {
        debug!("swing missed: target {distance:.2} away");
        return false;
    }

    let facing = scene.local_to_world(player).transform_vector(&Vec3::new(-1.0, 0.0, 0.0));
    let Some(forward) = utils::safe_normalize(facing) else {
        return false;
    };
    let Some(body) = world.get_mut(target).and_then(|object| object.body_mut()) else {
        return false;
    };

    let mass = body.mass();
    let impulse = mass * (power / config.max_charge) * config.max_hit_velocity * forward;
    body.velocity += impulse / mass;
    debug!("swing hit: velocity now {:?}", body.velocity);
    true
}
