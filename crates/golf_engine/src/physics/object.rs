//! Collision objects and rigid bodies
//!
//! A [`CollisionObject`] ties a scene transform to an optional collider,
//! surface coefficients and gameplay role flags. Dynamic objects carry a
//! [`RigidBody`] payload; static ones do not, so velocity and force are only
//! reachable through [`CollisionObject::body`] / [`CollisionObject::body_mut`].

use super::collision::Collider;
use crate::foundation::math::Vec3;
use crate::scene::TransformId;
use bitflags::bitflags;

/// Smallest mass a rigid body may carry
pub const MIN_MASS: f32 = 1e-4;

bitflags! {
    /// Gameplay roles a collision object can play
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ObjectFlags: u8 {
        /// The player's projectile
        const BALL = 1 << 0;
        /// The receptacle that absorbs pickups and ends the level
        const HOLE = 1 << 1;
        /// Absorbed by the hole on contact
        const PICKUP = 1 << 2;
    }
}

/// Linear state of a dynamic object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    mass: f32,
    /// Velocity in units per second
    pub velocity: Vec3,
    /// Force accumulated for the next integration step
    pub force: Vec3,
}

impl RigidBody {
    /// Create a body at rest
    pub fn new(mass: f32) -> Self {
        Self {
            mass: sanitize_mass(mass),
            velocity: Vec3::zeros(),
            force: Vec3::zeros(),
        }
    }

    /// Mass of the body, always positive
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set the mass; non-positive or non-finite values are clamped
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = sanitize_mass(mass);
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }
}

fn sanitize_mass(mass: f32) -> f32 {
    if mass.is_finite() && mass >= MIN_MASS {
        mass
    } else {
        log::debug!("Rigid body mass {mass} clamped to {MIN_MASS}");
        MIN_MASS
    }
}

/// Whether an object moves under physics
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Never moved by the simulation
    Static,
    /// Integrated every step
    Dynamic(RigidBody),
}

/// An entity taking part in collision testing
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionObject {
    /// Transform owned by the scene
    pub transform: TransformId,
    /// Shape; `None` keeps the object out of narrow-phase testing
    pub collider: Option<Collider>,
    /// Velocity scale applied to bodies bouncing off this surface
    pub friction: f32,
    /// Strength of the normal reflection for bodies bouncing off this surface
    pub damp: f32,
    /// Hole growth granted when this object is absorbed
    pub pickup_value: f32,
    /// Gameplay roles
    pub flags: ObjectFlags,
    motion: Motion,
    to_delete: bool,
}

impl CollisionObject {
    /// Create a static object
    pub fn new_static(transform: TransformId, collider: Option<Collider>) -> Self {
        Self {
            transform,
            collider,
            friction: 1.0,
            damp: 1.0,
            pickup_value: 0.0,
            flags: ObjectFlags::empty(),
            motion: Motion::Static,
            to_delete: false,
        }
    }

    /// Create a dynamic object (rigid body) at rest
    pub fn new_dynamic(transform: TransformId, collider: Option<Collider>, mass: f32) -> Self {
        Self {
            motion: Motion::Dynamic(RigidBody::new(mass)),
            ..Self::new_static(transform, collider)
        }
    }

    /// Builder pattern: Set friction
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Builder pattern: Set damp
    pub fn with_damp(mut self, damp: f32) -> Self {
        self.damp = damp;
        self
    }

    /// Builder pattern: Add role flags
    pub fn with_flags(mut self, flags: ObjectFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Builder pattern: Set pickup value
    pub fn with_pickup_value(mut self, value: f32) -> Self {
        self.pickup_value = value;
        self
    }

    /// Builder pattern: Set initial velocity; ignored for static objects
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        if let Some(body) = self.body_mut() {
            body.velocity = velocity;
        }
        self
    }

    /// Whether the object is integrated by the simulation
    pub fn is_dynamic(&self) -> bool {
        matches!(self.motion, Motion::Dynamic(_))
    }

    /// Rigid body state, for dynamic objects
    pub fn body(&self) -> Option<&RigidBody> {
        match &self.motion {
            Motion::Dynamic(body) => Some(body),
            Motion::Static => None,
        }
    }

    /// Mutable rigid body state, for dynamic objects
    pub fn body_mut(&mut self) -> Option<&mut RigidBody> {
        match &mut self.motion {
            Motion::Dynamic(body) => Some(body),
            Motion::Static => None,
        }
    }

    /// Whether this object is the ball
    pub fn is_ball(&self) -> bool {
        self.flags.contains(ObjectFlags::BALL)
    }

    /// Whether this object is the hole
    pub fn is_hole(&self) -> bool {
        self.flags.contains(ObjectFlags::HOLE)
    }

    /// Whether this object can be absorbed
    pub fn is_pickup(&self) -> bool {
        self.flags.contains(ObjectFlags::PICKUP)
    }

    /// Whether the object was soft-deleted
    pub fn to_delete(&self) -> bool {
        self.to_delete
    }

    /// Soft-delete; the object is skipped from now on and purged between frames
    pub fn mark_for_deletion(&mut self) {
        self.to_delete = true;
    }

    /// Whether the object takes part in narrow-phase testing
    pub fn is_collidable(&self) -> bool {
        self.collider.is_some() && !self.to_delete
    }
}
