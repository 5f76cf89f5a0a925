//! # Golf Engine
//!
//! Scene, collision and rigid-body core for a small real-time 3D golf game.
//!
//! ## Features
//!
//! - **Colliders**: sphere, plane and axis-aligned box shapes in model space
//! - **Narrow Phase**: pairwise tests producing contact normal and depth
//! - **Collision Pipeline**: damped reflection, pickup absorption, goal detection
//! - **Integration**: gravity, linear drag and a pull toward an attractor
//! - **Arena Handles**: objects and transforms addressed by stable slot-map keys
//!
//! ## Quick Start
//!
//! ```rust
//! use golf_engine::prelude::*;
//!
//! let mut scene = Scene::new();
//! let mut world = PhysicsWorld::new(PhysicsSettings::default());
//!
//! let ground = scene.add_transform(SceneTransform::named("Ground"));
//! world.insert(CollisionObject::new_static(ground, Some(Collider::plane(Vec3::z(), 0.0))));
//!
//! let ball = scene.add_transform(SceneTransform::named("Ball").with_position(Vec3::new(0.0, 0.0, 1.0)));
//! world.insert(CollisionObject::new_dynamic(ball, Some(Collider::sphere(Vec3::zeros(), 0.2)), 1.0));
//!
//! for _ in 0..60 {
//!     world.step(&mut scene, 1.0 / 60.0);
//! }
//! assert!(scene.transform(ball).unwrap().position.z > 0.0);
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{Mat4, Quat, Vec3},
        physics::{
            Attraction, Collider, CollisionObject, CollisionPoints, ObjectFlags, ObjectKey,
            PhysicsSettings, PhysicsWorld, RigidBody, StationaryPolicy, StepReport,
        },
        scene::{Aabb, Camera, Scene, SceneTransform, TransformId},
    };
}
