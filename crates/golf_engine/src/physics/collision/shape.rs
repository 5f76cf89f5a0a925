//! Model-space colliders and their world-space counterparts
//!
//! Collider geometry is stored in local coordinates and transformed to world
//! space on demand for each test. Boxes stay axis-aligned after the
//! transform; they are never promoted to oriented boxes.

use super::primitives::{test_box_box, BoundingSphere, CollisionPoints, Plane};
use crate::foundation::math::{utils, Mat4, Matrix3, Point3, Vec3};
use crate::scene::Aabb;

/// Collision shape stored in MODEL SPACE
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// Sphere offset from the owning transform's origin
    Sphere {
        /// Center offset in local space
        center: Vec3,
        /// Radius before scaling
        radius: f32,
    },
    /// Infinite plane; everything below it is solid
    Plane {
        /// Unit normal in local space
        normal: Vec3,
        /// Signed distance from the local origin
        distance: f32,
    },
    /// Axis-aligned box given by local min/max corners
    Box(Aabb),
}

impl Collider {
    /// Creates a sphere collider
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere { center, radius: radius.abs() }
    }

    /// Creates a plane collider; a degenerate normal falls back to +Z
    pub fn plane(normal: Vec3, distance: f32) -> Self {
        let normal = utils::safe_normalize(normal).unwrap_or_else(|| {
            log::warn!("Plane collider created with zero normal, using +Z");
            Vec3::z()
        });
        Self::Plane { normal, distance }
    }

    /// Creates a box collider from local mesh extents
    pub fn cuboid(min: Vec3, max: Vec3) -> Self {
        Self::Box(Aabb::new(min.inf(&max), min.sup(&max)))
    }

    /// Transform this shape into world space for testing
    pub fn to_world_space(&self, local_to_world: &Mat4) -> WorldCollider {
        match *self {
            Self::Sphere { center, radius } => {
                let world_center = local_to_world.transform_point(&Point3::from(center)).coords;
                WorldCollider::Sphere(BoundingSphere::new(
                    world_center,
                    radius * max_axis_scale(local_to_world),
                ))
            }
            Self::Plane { normal, distance } => {
                let linear: Matrix3<f32> = local_to_world.fixed_view::<3, 3>(0, 0).into_owned();
                let point = local_to_world
                    .transform_point(&Point3::from(normal * distance))
                    .coords;
                // Normals transform by the inverse transpose.
                let world_normal = linear
                    .try_inverse()
                    .and_then(|inv| utils::safe_normalize(inv.transpose() * normal))
                    .unwrap_or(normal);
                WorldCollider::Plane(Plane::new(world_normal, world_normal.dot(&point)))
            }
            Self::Box(aabb) => WorldCollider::Box(aabb.transformed(local_to_world)),
        }
    }
}

/// Largest column length of the linear part of `matrix`
fn max_axis_scale(matrix: &Mat4) -> f32 {
    (0..3)
        .map(|c| matrix.fixed_view::<3, 1>(0, c).magnitude())
        .fold(0.0, f32::max)
}

/// World-space collision shape (temporary, for testing only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldCollider {
    /// World-space sphere
    Sphere(BoundingSphere),
    /// World-space half-space
    Plane(Plane),
    /// World-space axis-aligned box
    Box(Aabb),
}

impl WorldCollider {
    /// Test this shape against another; the normal points from `self` to `other`
    pub fn test(&self, other: &WorldCollider) -> CollisionPoints {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => a.test_sphere(b),

            (Self::Sphere(sphere), Self::Plane(plane)) => sphere.test_plane(plane),
            (Self::Plane(plane), Self::Sphere(sphere)) => sphere.test_plane(plane).flipped(),

            (Self::Sphere(sphere), Self::Box(aabb)) => sphere.test_box(aabb),
            (Self::Box(aabb), Self::Sphere(sphere)) => sphere.test_box(aabb).flipped(),

            (Self::Plane(plane), Self::Box(aabb)) => plane.test_box(aabb),
            (Self::Box(aabb), Self::Plane(plane)) => plane.test_box(aabb).flipped(),

            (Self::Box(a), Self::Box(b)) => test_box_box(a, b),

            // Two infinite planes either never meet or always do; neither is useful.
            (Self::Plane(_), Self::Plane(_)) => CollisionPoints::none(),
        }
    }

    /// Sphere radius in world space, if this is a sphere
    pub fn radius(&self) -> Option<f32> {
        match self {
            Self::Sphere(sphere) => Some(sphere.radius),
            _ => None,
        }
    }
}
