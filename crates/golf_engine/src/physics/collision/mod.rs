//! Collision shapes and narrow-phase testing
//!
//! Colliders are stored in model space and carry no position of their own.
//! Each test maps both shapes into world space through the owning
//! transform's local-to-world matrix and compares the results.
//!
//! # Module Organization
//!
//! - [`primitives`] - World-space sphere, plane and box tests
//! - [`shape`] - Model-space [`Collider`] and its world-space counterpart

pub mod primitives;
pub mod shape;

pub use primitives::{BoundingSphere, CollisionPoints, Plane};
pub use shape::{Collider, WorldCollider};

use crate::foundation::math::Mat4;

/// Test two colliders placed by their local-to-world matrices.
///
/// The returned normal points from `a` toward `b`.
pub fn test_collision(
    a: &Collider,
    a_to_world: &Mat4,
    b: &Collider,
    b_to_world: &Mat4,
) -> CollisionPoints {
    a.to_world_space(a_to_world)
        .test(&b.to_world_space(b_to_world))
}
