//! Headless run through the built-in levels
//!
//! Aims at the hole, charges a full swing and lets physics run until the
//! level is finished or time runs out. Pass a TOML or RON file to override
//! the default tuning.

use black_hole_golf::{demo_levels, GameConfig, MoveInput, PlayMode};
use golf_engine::config::Config;
use golf_engine::foundation::logging;
use log::{info, warn};

const DT: f32 = 1.0 / 60.0;
const LEVEL_TIMEOUT: f32 = 12.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading config from {path}");
            GameConfig::load_from_file(&path)?
        }
        None => GameConfig::default(),
    };

    let mut play = PlayMode::new(demo_levels::all(), config.clone())?;
    let idle = MoveInput::default();

    for _ in 0..play.level_count() {
        let level = play.level_index();
        play.look((0.0, -1.0));
        play.begin_swing();
        let mut clock = 0.0;
        while clock < config.swing.max_charge {
            play.update(DT, &idle)?;
            clock += DT;
        }
        play.release_swing();

        let mut finished = false;
        while clock < LEVEL_TIMEOUT {
            let report = play.update(DT, &idle)?;
            clock += DT;
            if report.hit {
                info!("hole struck at power {:.2}", play.swing().power());
            }
            if !report.step.absorbed.is_empty() {
                info!(
                    "{} pickup(s) absorbed, hole scale now {:.2}",
                    report.step.absorbed.len(),
                    play.level().hole_scale(play.scene())
                );
            }
            if report.level_changed.is_some() {
                finished = true;
                break;
            }
        }

        if finished {
            info!("level {} finished in {clock:.2}s", level + 1);
        } else {
            warn!(
                "level {} timed out, {} pickups left",
                level + 1,
                play.level().remaining_pickups()
            );
            let next = (level + 1) % play.level_count();
            play.load(next)?;
        }
    }

    Ok(())
}
