//! Minimal scene collaborator for the physics core
//!
//! The scene owns every transform. Physics and gameplay refer to transforms
//! through [`TransformId`] handles, look them up by name once at level load,
//! and read mesh bounding extents to build box colliders.

pub mod bounds;
pub mod transform;

pub use bounds::Aabb;
pub use transform::SceneTransform;

use crate::foundation::math::{Mat4, Point3, Vec3};
use slotmap::{new_key_type, SlotMap};
use std::collections::HashMap;

new_key_type! {
    /// Stable handle to a transform owned by a [`Scene`]
    pub struct TransformId;
}

/// A camera attached to a scene transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Transform the camera looks through
    pub transform: TransformId,
    /// Vertical field of view in radians
    pub fovy: f32,
}

/// Named transforms, cameras and mesh bounds for one level
#[derive(Debug, Clone, Default)]
pub struct Scene {
    transforms: SlotMap<TransformId, SceneTransform>,
    /// Insertion order, so name scans are deterministic
    order: Vec<TransformId>,
    mesh_bounds: HashMap<String, Aabb>,
    cameras: Vec<Camera>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transform and return its handle
    pub fn add_transform(&mut self, transform: SceneTransform) -> TransformId {
        let id = self.transforms.insert(transform);
        self.order.push(id);
        id
    }

    /// Add a transform parented to `parent`
    pub fn add_child(&mut self, parent: TransformId, mut transform: SceneTransform) -> TransformId {
        transform.parent = Some(parent);
        self.add_transform(transform)
    }

    /// Register the local-space bounds of the mesh called `name`
    pub fn add_mesh_bounds(&mut self, name: impl Into<String>, bounds: Aabb) {
        self.mesh_bounds.insert(name.into(), bounds);
    }

    /// Attach a camera to an existing transform
    pub fn add_camera(&mut self, camera: Camera) {
        self.cameras.push(camera);
    }

    /// Borrow a transform
    pub fn transform(&self, id: TransformId) -> Option<&SceneTransform> {
        self.transforms.get(id)
    }

    /// Mutably borrow a transform
    pub fn transform_mut(&mut self, id: TransformId) -> Option<&mut SceneTransform> {
        self.transforms.get_mut(id)
    }

    /// Transforms in the order they were added
    pub fn transforms(&self) -> impl Iterator<Item = (TransformId, &SceneTransform)> {
        self.order
            .iter()
            .filter_map(move |&id| self.transforms.get(id).map(|t| (id, t)))
    }

    /// First transform with the given name
    pub fn find(&self, name: &str) -> Option<TransformId> {
        self.transforms()
            .find(|(_, t)| t.name == name)
            .map(|(id, _)| id)
    }

    /// Local-space bounds of a named mesh
    pub fn mesh_bounds(&self, name: &str) -> Option<Aabb> {
        self.mesh_bounds.get(name).copied()
    }

    /// Cameras in the scene
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// Number of transforms
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the scene has no transforms
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Compose the chain of local-to-parent matrices up to the root.
    ///
    /// Returns identity for an unknown handle. A parent cycle is cut after
    /// as many hops as there are transforms.
    pub fn local_to_world(&self, id: TransformId) -> Mat4 {
        let mut matrix = Mat4::identity();
        let mut current = Some(id);
        let mut hops = 0;
        while let Some(cur) = current {
            let Some(transform) = self.transforms.get(cur) else { break };
            matrix = transform.make_local_to_parent() * matrix;
            current = transform.parent;
            hops += 1;
            if hops > self.transforms.len() {
                log::warn!("Transform parent cycle detected at '{}'", transform.name);
                break;
            }
        }
        matrix
    }

    /// World-space origin of a transform
    pub fn world_position(&self, id: TransformId) -> Vec3 {
        self.local_to_world(id).transform_point(&Point3::origin()).coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Quat;
    use approx::assert_relative_eq;

    #[test]
    fn test_find_by_name() {
        let mut scene = Scene::new();
        let ground = scene.add_transform(SceneTransform::named("Ground"));
        let ball = scene.add_transform(SceneTransform::named("Ball"));

        assert_eq!(scene.find("Ground"), Some(ground));
        assert_eq!(scene.find("Ball"), Some(ball));
        assert_eq!(scene.find("Hole"), None);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_world_position_follows_parent_chain() {
        let mut scene = Scene::new();
        let parent = scene.add_transform(
            SceneTransform::named("Camera")
                .with_position(Vec3::new(1.0, 0.0, 2.0))
                .with_rotation(Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2)),
        );
        let child = scene.add_child(
            parent,
            SceneTransform::named("Hand").with_position(Vec3::new(1.0, 0.0, 0.0)),
        );

        // Rotating +X by 90 degrees about Z gives +Y.
        assert_relative_eq!(scene.world_position(child), Vec3::new(1.0, 1.0, 2.0), epsilon = 1e-5);
        assert_relative_eq!(scene.world_position(parent), Vec3::new(1.0, 0.0, 2.0), epsilon = 1e-6);
    }

    #[test]
    fn test_mesh_bounds_lookup() {
        let mut scene = Scene::new();
        scene.add_mesh_bounds("Wall.001", Aabb::new(Vec3::new(-1.0, -0.1, 0.0), Vec3::new(1.0, 0.1, 1.0)));
        assert!(scene.mesh_bounds("Wall.001").is_some());
        assert!(scene.mesh_bounds("Wall.002").is_none());
    }
}
