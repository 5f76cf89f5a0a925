//! # Black Hole Golf
//!
//! Gameplay layer over [`golf_engine`]: the player swings a club at a hole
//! that grows by swallowing pickups, and the level ends once the hole
//! swallows the ball.
//!
//! - [`level`] builds a physics world from a scene's naming convention
//! - [`swing`] turns a held button into a one-shot hit on the hole
//! - [`player`] walks the player, pitches the camera and poses the club
//! - [`play_mode`] runs the frame loop over a rotation of levels

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod demo_levels;
pub mod level;
pub mod play_mode;
pub mod player;
pub mod swing;

pub use config::GameConfig;
pub use level::{Level, LevelError, LevelRoles};
pub use play_mode::{FrameReport, PlayMode};
pub use player::MoveInput;
pub use swing::{Swing, SwingPhase};
