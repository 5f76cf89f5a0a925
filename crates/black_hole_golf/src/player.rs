//! Player movement, camera look and club pose
//!
//! The player walks in the plane of its own local X/Y axes and turns about
//! world Z. The camera, parented to the player, only pitches; its pitch is
//! tracked here so the swing gate and club pose can read it without
//! decomposing matrices.

use crate::config::PlayerConfig;
use crate::level::LevelRoles;
use golf_engine::foundation::math::{utils, Quat, Vec3};
use golf_engine::scene::Scene;

/// Movement buttons held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    /// Strafe left
    pub left: bool,
    /// Strafe right
    pub right: bool,
    /// Walk forward
    pub forward: bool,
    /// Walk backward
    pub back: bool,
    /// Sprint modifier
    pub sprint: bool,
}

impl MoveInput {
    /// Direction in the player's local X/Y plane, unit length or zero
    pub fn direction(&self) -> Vec3 {
        let axis = |neg: bool, pos: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));
        let raw = Vec3::new(axis(self.left, self.right), axis(self.back, self.forward), 0.0);
        utils::safe_normalize(raw).unwrap_or_else(Vec3::zeros)
    }
}

/// Walk the player for `elapsed` seconds
pub fn move_player(
    scene: &mut Scene,
    roles: &LevelRoles,
    input: &MoveInput,
    elapsed: f32,
    config: &PlayerConfig,
) {
    let direction = input.direction();
    if direction == Vec3::zeros() {
        return;
    }
    let speed = if input.sprint {
        config.speed * config.sprint_multiplier
    } else {
        config.speed
    };
    let Some(player) = scene.transform_mut(roles.player) else {
        return;
    };
    let frame = player.make_local_to_parent();
    let right = frame.fixed_view::<3, 1>(0, 0).into_owned();
    let forward = frame.fixed_view::<3, 1>(0, 1).into_owned();
    let step = direction * speed * elapsed;
    player.position += step.x * right + step.y * forward;
}

/// Turn the player and pitch the camera
///
/// `motion` is the look delta in screen heights; it is scaled by the field of
/// view so a full-screen drag turns by one `fovy`. Returns the new pitch.
pub fn look(
    scene: &mut Scene,
    roles: &LevelRoles,
    pitch: f32,
    motion: (f32, f32),
    config: &PlayerConfig,
) -> f32 {
    let (dx, dy) = motion;
    if let Some(player) = scene.transform_mut(roles.player) {
        player.rotation =
            player.rotation * Quat::from_axis_angle(&Vec3::z_axis(), -dx * config.fovy);
    }

    let target = (pitch + dy * config.fovy).clamp(config.pitch_min, config.pitch_max);
    let adjust = target - pitch;
    if let Some(camera) = scene.transform_mut(roles.camera.transform) {
        camera.rotation = camera.rotation * Quat::from_axis_angle(&Vec3::x_axis(), adjust);
    }
    target
}

/// How far the club has moved into the aim pose, 0 to 1
pub fn aim_blend(pitch: f32, config: &PlayerConfig) -> f32 {
    let span = config.aim_pitch_start - config.aim_pitch_end;
    if span <= 0.0 {
        return if pitch < config.aim_pitch_start { 1.0 } else { 0.0 };
    }
    let clamped = pitch.clamp(config.aim_pitch_end, config.aim_pitch_start);
    1.0 - (clamped - config.aim_pitch_end) / span
}

/// Place the club between the two hand anchors and tilt it by the swing angle
pub fn pose_club(
    scene: &mut Scene,
    roles: &LevelRoles,
    pitch: f32,
    swing_angle: f32,
    config: &PlayerConfig,
) {
    let hand = scene.world_position(roles.hand);
    let aim_hand = scene.world_position(roles.aim_hand);
    let yaw = scene
        .transform(roles.player)
        .map_or(0.0, |player| player.rotation.euler_angles().2);
    let blend = aim_blend(pitch, config);

    if let Some(club) = scene.transform_mut(roles.club) {
        club.position = utils::lerp_vec3(hand, aim_hand, blend);
        club.rotation = Quat::from_axis_angle(&Vec3::z_axis(), yaw)
            * Quat::from_axis_angle(&Vec3::y_axis(), -swing_angle);
    }
}
