//! Frame loop for playing a sequence of levels
//!
//! [`PlayMode`] owns the level list and a working copy of the current scene.
//! Input events (look, swing button, reset) are applied as they arrive;
//! [`PlayMode::update`] then advances the game by one frame. Finishing a
//! level or asking for a reset only records the level to load; the load
//! happens at the start of the following update, outside the physics step.

use crate::config::GameConfig;
use crate::level::{Level, LevelError};
use crate::player::{self, MoveInput};
use crate::swing::{self, Swing};
use golf_engine::foundation::math::constants::HALF_PI;
use golf_engine::physics::StepReport;
use golf_engine::scene::Scene;
use log::{debug, info};

/// What one update did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Physics step outcome
    pub step: StepReport,
    /// A queued swing connected with the hole this frame
    pub hit: bool,
    /// Index of the level switched to at the start of this frame
    pub level_changed: Option<usize>,
}

/// Game state while playing
#[derive(Debug)]
pub struct PlayMode {
    config: GameConfig,
    levels: Vec<Scene>,
    index: usize,
    scene: Scene,
    level: Level,
    swing: Swing,
    camera_pitch: f32,
    pending_load: Option<usize>,
}

impl PlayMode {
    /// Start playing `levels` from the first one
    pub fn new(levels: Vec<Scene>, config: GameConfig) -> Result<Self, LevelError> {
        let first = levels.first().ok_or(LevelError::NoLevels)?;
        let mut scene = first.clone();
        let level = Level::load(&mut scene, &config)?;
        info!("playing level 1 of {}", levels.len());
        Ok(Self {
            config,
            levels,
            index: 0,
            scene,
            level,
            swing: Swing::new(),
            camera_pitch: HALF_PI,
            pending_load: None,
        })
    }

    /// Current level index
    pub fn level_index(&self) -> usize {
        self.index
    }

    /// Number of levels in rotation
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Working scene of the current level
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current level
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Swing state
    pub fn swing(&self) -> &Swing {
        &self.swing
    }

    /// Tracked camera pitch, 0 looking straight down
    pub fn camera_pitch(&self) -> f32 {
        self.camera_pitch
    }

    /// Level that will load at the start of the next update, if any
    pub fn pending_load(&self) -> Option<usize> {
        self.pending_load
    }

    /// Apply a look delta in screen heights
    pub fn look(&mut self, motion: (f32, f32)) {
        self.camera_pitch = player::look(
            &mut self.scene,
            &self.level.roles,
            self.camera_pitch,
            motion,
            &self.config.player,
        );
    }

    /// Swing button pressed
    pub fn begin_swing(&mut self) -> bool {
        self.swing.begin(self.camera_pitch, &self.config.player)
    }

    /// Swing button released
    pub fn release_swing(&mut self) -> bool {
        self.swing.release()
    }

    /// Reload the current level from its pristine scene on the next update
    pub fn request_reset(&mut self) {
        self.pending_load = Some(self.index);
    }

    /// Load level `index` from its pristine scene immediately
    pub fn load(&mut self, index: usize) -> Result<(), LevelError> {
        let pristine = self.levels.get(index).ok_or(LevelError::OutOfRange {
            index,
            count: self.levels.len(),
        })?;
        let mut scene = pristine.clone();
        let level = Level::load(&mut scene, &self.config)?;

        self.scene = scene;
        self.level = level;
        self.index = index;
        self.swing = Swing::new();
        self.camera_pitch = HALF_PI;
        self.pending_load = None;
        info!("playing level {} of {}", index + 1, self.levels.len());
        Ok(())
    }

    /// Advance the game by `elapsed` seconds
    pub fn update(&mut self, elapsed: f32, input: &MoveInput) -> Result<FrameReport, LevelError> {
        let mut report = FrameReport::default();

        if let Some(index) = self.pending_load.take() {
            self.load(index)?;
            report.level_changed = Some(index);
        }

        let purged = self.level.world.purge_deleted();
        if purged > 0 {
            debug!("purged {purged} absorbed objects");
        }

        let roles = self.level.roles;
        player::move_player(&mut self.scene, &roles, input, elapsed, &self.config.player);

        self.swing.update(elapsed, &self.config.swing);
        if let Some(power) = self.swing.take_hit() {
            let hole_radius = self.config.level.hole_radius_start * self.level.hole_scale(&self.scene);
            report.hit = swing::apply_hit(
                &mut self.level.world,
                &self.scene,
                roles.hole,
                roles.player,
                power,
                &self.config.swing,
                hole_radius,
            );
        }

        player::pose_club(
            &mut self.scene,
            &roles,
            self.camera_pitch,
            self.swing.angle(),
            &self.config.player,
        );

        report.step = self.level.world.step(&mut self.scene, elapsed);
        if report.step.goal_reached && self.pending_load.is_none() {
            info!("level {} complete", self.index + 1);
            self.pending_load = Some((self.index + 1) % self.levels.len());
        }

        Ok(report)
    }
}
