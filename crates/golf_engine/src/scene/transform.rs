//! Scene transforms
//!
//! Position, rotation and scale relative to an optional parent. World-space
//! queries that need the parent chain live on [`Scene`](super::Scene).

use super::TransformId;
use crate::foundation::math::{Mat4, Quat, Vec3};

/// A named, parented transform owned by the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTransform {
    /// Name used for level-load lookups
    pub name: String,
    /// Parent transform, if any
    pub parent: Option<TransformId>,
    /// Position relative to the parent
    pub position: Vec3,
    /// Rotation relative to the parent
    pub rotation: Quat,
    /// Scale relative to the parent
    pub scale: Vec3,
}

impl SceneTransform {
    /// Identity transform with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Builder pattern: Set position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set scale (uniform)
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// TRS matrix mapping local coordinates into the parent's space
    pub fn make_local_to_parent(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Largest absolute scale component
    pub fn max_scale(&self) -> f32 {
        self.scale.abs().max()
    }
}
