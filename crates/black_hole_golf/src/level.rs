//! Level construction from a named scene
//!
//! A level is an ordinary [`Scene`] whose transforms follow a naming
//! convention. [`Level::load`] scans it once, resolves the roles the game
//! needs and builds the matching [`PhysicsWorld`].
//!
//! | Name          | Role                                              |
//! |---------------|---------------------------------------------------|
//! | `Player`      | walking body, yaw source for swings               |
//! | `Hand`        | club anchor while walking                         |
//! | `AimHand`     | club anchor while aiming                          |
//! | `Club`        | posed every frame                                 |
//! | `Ground`      | static plane, normal +Z                           |
//! | `Wall*`       | static box from the mesh bounds of the same name  |
//! | `Item*`       | static sphere pickup                              |
//! | `Hole`        | dynamic sphere, absorbs pickups, swing target     |
//! | `Ball`        | dynamic sphere, pulled toward the hole            |

use crate::config::GameConfig;
use golf_engine::foundation::math::Vec3;
use golf_engine::physics::{
    Attraction, Collider, CollisionObject, ObjectFlags, ObjectKey, PhysicsWorld,
};
use golf_engine::scene::{Camera, Scene, TransformId};
use log::info;
use thiserror::Error;

/// Errors raised while building a level
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// A required transform was not found
    #[error("level has no transform named '{0}'")]
    MissingTransform(&'static str),

    /// The scene must carry exactly one camera
    #[error("level must have exactly one camera, found {0}")]
    CameraCount(usize),

    /// A wall transform has no mesh bounds to size its box
    #[error("no mesh bounds for wall '{0}'")]
    MissingMesh(String),

    /// The level list was empty
    #[error("no levels to play")]
    NoLevels,

    /// A level index past the end of the list
    #[error("level index {index} out of range ({count} levels)")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Number of levels
        count: usize,
    },
}

/// Transform and object handles resolved at load time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRoles {
    /// Walking body
    pub player: TransformId,
    /// Club anchor while walking
    pub hand: TransformId,
    /// Club anchor while aiming
    pub aim_hand: TransformId,
    /// Club transform
    pub club: TransformId,
    /// The single level camera
    pub camera: Camera,
    /// Ball object
    pub ball: ObjectKey,
    /// Hole object
    pub hole: ObjectKey,
}

/// A loaded level: its physics world plus resolved roles
#[derive(Debug, Clone)]
pub struct Level {
    /// Collision objects of the level
    pub world: PhysicsWorld,
    /// Named roles
    pub roles: LevelRoles,
}

#[derive(Default)]
struct Found {
    player: Option<TransformId>,
    hand: Option<TransformId>,
    aim_hand: Option<TransformId>,
    club: Option<TransformId>,
    hole: Option<TransformId>,
    ball: Option<TransformId>,
}

impl Level {
    /// Build a level from `scene`
    ///
    /// The ball and hole are lifted by the configured spawn height, which
    /// mutates the scene; callers load from a working copy.
    pub fn load(scene: &mut Scene, config: &GameConfig) -> Result<Self, LevelError> {
        let sizes = &config.level;
        let mut world = PhysicsWorld::new(config.physics.clone());
        let mut found = Found::default();

        let named: Vec<(TransformId, String)> = scene
            .transforms()
            .map(|(id, transform)| (id, transform.name.clone()))
            .collect();

        for (id, name) in named {
            match name.as_str() {
                "Player" => found.player = Some(id),
                "Hand" => found.hand = Some(id),
                "AimHand" => found.aim_hand = Some(id),
                "Club" => found.club = Some(id),
                "Hole" => found.hole = Some(id),
                "Ball" => found.ball = Some(id),
                "Ground" => {
                    world.insert(
                        CollisionObject::new_static(id, Some(Collider::plane(Vec3::z(), 0.0)))
                            .with_friction(sizes.ground_friction),
                    );
                }
                wall if wall.starts_with("Wall") => {
                    let bounds = scene
                        .mesh_bounds(wall)
                        .ok_or_else(|| LevelError::MissingMesh(wall.to_string()))?;
                    world.insert(CollisionObject::new_static(
                        id,
                        Some(Collider::cuboid(bounds.min, bounds.max)),
                    ));
                }
                item if item.starts_with("Item") => {
                    world.insert(
                        CollisionObject::new_static(
                            id,
                            Some(Collider::sphere(Vec3::zeros(), sizes.item_radius)),
                        )
                        .with_flags(ObjectFlags::PICKUP)
                        .with_pickup_value(sizes.item_pickup_value),
                    );
                }
                _ => {}
            }
        }

        let player = found.player.ok_or(LevelError::MissingTransform("Player"))?;
        let hand = found.hand.ok_or(LevelError::MissingTransform("Hand"))?;
        let aim_hand = found.aim_hand.ok_or(LevelError::MissingTransform("AimHand"))?;
        let club = found.club.ok_or(LevelError::MissingTransform("Club"))?;
        let hole_id = found.hole.ok_or(LevelError::MissingTransform("Hole"))?;
        let ball_id = found.ball.ok_or(LevelError::MissingTransform("Ball"))?;

        let camera = match scene.cameras() {
            [camera] => *camera,
            cameras => return Err(LevelError::CameraCount(cameras.len())),
        };

        for id in [ball_id, hole_id] {
            if let Some(transform) = scene.transform_mut(id) {
                transform.position.z += sizes.spawn_lift;
            }
        }

        let ball = world.insert(
            CollisionObject::new_dynamic(
                ball_id,
                Some(Collider::sphere(Vec3::zeros(), sizes.ball_radius_start)),
                1.0,
            )
            .with_flags(ObjectFlags::BALL),
        );
        let hole = world.insert(
            CollisionObject::new_dynamic(
                hole_id,
                Some(Collider::sphere(Vec3::zeros(), sizes.hole_radius_start)),
                1.0,
            )
            .with_flags(ObjectFlags::HOLE),
        );
        world.set_attraction(Some(Attraction { body: ball, attractor: hole }));

        info!(
            "level loaded: {} transforms, {} collision objects",
            scene.len(),
            world.len()
        );

        Ok(Self {
            world,
            roles: LevelRoles { player, hand, aim_hand, club, camera, ball, hole },
        })
    }

    /// Current hole scale, the largest axis scale of its transform
    pub fn hole_scale(&self, scene: &Scene) -> f32 {
        self.world
            .get(self.roles.hole)
            .and_then(|hole| scene.transform(hole.transform))
            .map_or(1.0, |transform| transform.max_scale())
    }

    /// Number of pickups not yet absorbed
    pub fn remaining_pickups(&self) -> usize {
        self.world
            .iter()
            .filter(|(_, object)| object.is_pickup() && !object.to_delete())
            .count()
    }
}
