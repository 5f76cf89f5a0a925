//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the few helpers the simulation needs.
//! The world is Z-up: gravity pulls along -Z and the ground plane normal is +Z.

pub use nalgebra::{Matrix3, Matrix4, Unit, UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Lengths below this are treated as zero when normalizing
    pub const NORMALIZE_EPSILON: f32 = 1e-6;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Component-wise linear interpolation between two vectors
    pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
        a + (b - a) * t
    }

    /// Normalize `v`, or `None` when it is too short to carry a direction
    pub fn safe_normalize(v: Vec3) -> Option<Vec3> {
        v.try_normalize(constants::NORMALIZE_EPSILON)
    }

    /// Uniform scale vector
    pub fn splat(value: f32) -> Vec3 {
        Vec3::new(value, value, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_safe_normalize_rejects_zero() {
        assert!(utils::safe_normalize(Vec3::zeros()).is_none());
        assert!(utils::safe_normalize(Vec3::new(1e-9, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_safe_normalize_unit_length() {
        let n = utils::safe_normalize(Vec3::new(3.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n, Vec3::new(0.6, 0.0, 0.8), epsilon = 1e-6);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_relative_eq!(utils::lerp(2.0, 4.0, 0.0), 2.0);
        assert_relative_eq!(utils::lerp(2.0, 4.0, 1.0), 4.0);
        let mid = utils::lerp_vec3(Vec3::zeros(), Vec3::new(2.0, 2.0, 2.0), 0.5);
        assert_relative_eq!(mid, utils::splat(1.0));
    }
}
