//! World-space primitives and their pairwise intersection tests
//!
//! Every test reports a [`CollisionPoints`] whose normal points from the
//! first argument toward the second. Degenerate geometry (coincident sphere
//! centers) is reported as no collision instead of producing a NaN normal.

use crate::foundation::math::{utils, Vec3};
use crate::scene::Aabb;

/// Outcome of a narrow-phase test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPoints {
    /// Whether the shapes overlap
    pub has_collision: bool,
    /// Unit contact normal from the first shape toward the second
    pub normal: Vec3,
    /// Penetration depth along the normal, only meaningful on collision
    pub depth: f32,
}

impl CollisionPoints {
    /// No contact
    pub fn none() -> Self {
        Self {
            has_collision: false,
            normal: Vec3::zeros(),
            depth: 0.0,
        }
    }

    /// A contact with the given normal and depth
    pub fn new(normal: Vec3, depth: f32) -> Self {
        Self {
            has_collision: true,
            normal,
            depth: depth.max(0.0),
        }
    }

    /// Same contact seen from the other shape
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }
}

/// A sphere in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Sphere against sphere
    pub fn test_sphere(&self, other: &BoundingSphere) -> CollisionPoints {
        let offset = other.center - self.center;
        let distance = offset.magnitude();
        let radius_sum = self.radius + other.radius;
        if distance >= radius_sum {
            return CollisionPoints::none();
        }

        match utils::safe_normalize(offset) {
            Some(normal) => CollisionPoints::new(normal, radius_sum - distance),
            None => {
                log::debug!("Coincident sphere centers at {:?}, contact ignored", self.center);
                CollisionPoints::none()
            }
        }
    }

    /// Sphere against a half-space
    pub fn test_plane(&self, plane: &Plane) -> CollisionPoints {
        let depth = self.radius - plane.signed_distance(self.center);
        if depth > 0.0 {
            CollisionPoints::new(-plane.normal, depth)
        } else {
            CollisionPoints::none()
        }
    }

    /// Sphere against an axis-aligned box
    pub fn test_box(&self, aabb: &Aabb) -> CollisionPoints {
        let closest = aabb.clamp_point(self.center);
        let outward = self.center - closest;
        let distance = outward.magnitude();

        if let Some(box_to_sphere) = utils::safe_normalize(outward) {
            if distance >= self.radius {
                return CollisionPoints::none();
            }
            return CollisionPoints::new(-box_to_sphere, self.radius - distance);
        }

        // Center inside the box: push out through the nearest face.
        let (axis, sign, face_distance) = nearest_face(aabb, self.center);
        let mut box_to_sphere = Vec3::zeros();
        box_to_sphere[axis] = sign;
        CollisionPoints::new(-box_to_sphere, self.radius + face_distance)
    }
}

/// A half-space `dot(normal, p) <= distance` in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing out of the solid side
    pub normal: Vec3,
    /// Signed distance of the plane from the origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane; the normal is expected to be unit length
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Signed distance of `point` above the plane
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) - self.distance
    }

    /// Plane against an axis-aligned box; normal points from the plane into the box
    pub fn test_box(&self, aabb: &Aabb) -> CollisionPoints {
        // Corner reaching furthest below the plane.
        let deepest = Vec3::new(
            if self.normal.x > 0.0 { aabb.min.x } else { aabb.max.x },
            if self.normal.y > 0.0 { aabb.min.y } else { aabb.max.y },
            if self.normal.z > 0.0 { aabb.min.z } else { aabb.max.z },
        );
        let depth = -self.signed_distance(deepest);
        if depth > 0.0 {
            CollisionPoints::new(self.normal, depth)
        } else {
            CollisionPoints::none()
        }
    }
}

/// Box against box, separating along the axis of least overlap
pub fn test_box_box(a: &Aabb, b: &Aabb) -> CollisionPoints {
    let overlap = a.max.inf(&b.max) - a.min.sup(&b.min);
    if overlap.iter().any(|&o| o <= 0.0) {
        return CollisionPoints::none();
    }

    let axis = overlap.imin();
    let direction = b.center()[axis] - a.center()[axis];
    let mut normal = Vec3::zeros();
    normal[axis] = if direction < 0.0 { -1.0 } else { 1.0 };
    CollisionPoints::new(normal, overlap[axis])
}

/// Closest face of `aabb` to an interior point: (axis, outward sign, distance)
fn nearest_face(aabb: &Aabb, point: Vec3) -> (usize, f32, f32) {
    let mut best = (0, 1.0, f32::INFINITY);
    for axis in 0..3 {
        let to_min = point[axis] - aabb.min[axis];
        let to_max = aabb.max[axis] - point[axis];
        if to_min < best.2 {
            best = (axis, -1.0, to_min);
        }
        if to_max < best.2 {
            best = (axis, 1.0, to_max);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb::from_center_extents(center, Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_sphere_sphere_overlap() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
        let points = a.test_sphere(&b);
        assert!(points.has_collision);
        assert_relative_eq!(points.depth, 0.5, epsilon = 1e-6);
        assert_relative_eq!(points.normal, Vec3::x(), epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_sphere_separated() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(2.5, 0.0, 0.0), 1.0);
        assert!(!a.test_sphere(&b).has_collision);
    }

    #[test]
    fn test_sphere_sphere_coincident_centers_is_guarded() {
        let a = BoundingSphere::new(Vec3::new(1.0, 2.0, 3.0), 1.0);
        let b = BoundingSphere::new(Vec3::new(1.0, 2.0, 3.0), 0.5);
        let points = a.test_sphere(&b);
        assert!(!points.has_collision);
        assert!(points.normal.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_sphere_plane_overlap_and_clearance() {
        let ground = Plane::new(Vec3::z(), 0.0);

        let low = BoundingSphere::new(Vec3::new(0.0, 0.0, 0.3), 0.5).test_plane(&ground);
        assert!(low.has_collision);
        assert_relative_eq!(low.depth, 0.2, epsilon = 1e-6);
        // Sphere is first, so the normal points from the sphere into the plane.
        assert_relative_eq!(low.normal, -Vec3::z(), epsilon = 1e-6);

        let high = BoundingSphere::new(Vec3::new(0.0, 0.0, 0.6), 0.5).test_plane(&ground);
        assert!(!high.has_collision);
    }

    #[test]
    fn test_sphere_box_face_contact() {
        let wall = unit_box_at(Vec3::zeros());
        let sphere = BoundingSphere::new(Vec3::new(1.3, 0.0, 0.0), 0.5);
        let points = sphere.test_box(&wall);
        assert!(points.has_collision);
        assert_relative_eq!(points.depth, 0.2, epsilon = 1e-5);
        assert_relative_eq!(points.normal, -Vec3::x(), epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_box_center_inside_uses_nearest_face() {
        let wall = unit_box_at(Vec3::zeros());
        let sphere = BoundingSphere::new(Vec3::new(0.0, 0.0, 0.8), 0.25);
        let points = sphere.test_box(&wall);
        assert!(points.has_collision);
        assert_relative_eq!(points.depth, 0.45, epsilon = 1e-5);
        assert_relative_eq!(points.normal, -Vec3::z(), epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_box_miss() {
        let wall = unit_box_at(Vec3::zeros());
        let sphere = BoundingSphere::new(Vec3::new(2.0, 2.0, 0.0), 0.5);
        assert!(!sphere.test_box(&wall).has_collision);
    }

    #[test]
    fn test_box_box_least_penetration_axis() {
        let a = unit_box_at(Vec3::zeros());
        let b = unit_box_at(Vec3::new(0.2, 1.5, 0.0));
        let points = test_box_box(&a, &b);
        assert!(points.has_collision);
        assert_relative_eq!(points.depth, 0.5, epsilon = 1e-6);
        assert_relative_eq!(points.normal, Vec3::y(), epsilon = 1e-6);

        let reversed = test_box_box(&b, &a);
        assert_relative_eq!(reversed.normal, -Vec3::y(), epsilon = 1e-6);
    }

    #[test]
    fn test_box_box_touching_faces_do_not_collide() {
        let a = unit_box_at(Vec3::zeros());
        let b = unit_box_at(Vec3::new(2.0, 0.0, 0.0));
        assert!(!test_box_box(&a, &b).has_collision);
    }

    #[test]
    fn test_plane_box() {
        let ground = Plane::new(Vec3::z(), 0.0);
        let sunk = unit_box_at(Vec3::new(0.0, 0.0, 0.75));
        let points = ground.test_box(&sunk);
        assert!(points.has_collision);
        assert_relative_eq!(points.depth, 0.25, epsilon = 1e-6);
        assert_relative_eq!(points.normal, Vec3::z(), epsilon = 1e-6);

        let floating = unit_box_at(Vec3::new(0.0, 0.0, 1.5));
        assert!(!ground.test_box(&floating).has_collision);
    }
}
