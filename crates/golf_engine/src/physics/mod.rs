//! Physics module for collision detection and response
//!
//! Point-mass rigid bodies, sphere/plane/box colliders and a single-pass
//! collision pipeline. Every pair is tested each frame; there is no broad
//! phase, no contact caching and no rotational dynamics.
//!
//! One [`PhysicsWorld::step`] runs, in order:
//! 1. narrow-phase detection over all collidable pairs
//! 2. resolution of the contacts in detection order
//! 3. integration of every dynamic body

pub mod collision;
pub mod integrator;
pub mod object;
pub mod pipeline;
pub mod settings;
pub mod world;

#[cfg(test)]
mod tests;

pub use collision::{test_collision, Collider, CollisionPoints, WorldCollider};
pub use object::{CollisionObject, ObjectFlags, RigidBody};
pub use settings::{PhysicsSettings, StationaryPolicy};
pub use world::{Attraction, Collision, ObjectKey, PhysicsWorld, StepReport};
