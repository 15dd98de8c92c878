//! Minimal 3D math for hand-joint positions.
//!
//! Joint positions arrive from the tracking provider in world space and are
//! compared in the hand-root local frame, so the only operations the toolkit
//! needs are vector arithmetic, Euclidean distance, and the inverse rigid
//! transform of the root. No general-purpose linear algebra is required.

use serde::{Deserialize, Serialize};

/// A 3D position or direction, single precision.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Vec3) -> f32 {
        (self - other).length()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A unit quaternion representing a 3D rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    /// X component of the vector part
    pub x: f32,
    /// Y component of the vector part
    pub y: f32,
    /// Z component of the vector part
    pub z: f32,
    /// Scalar part
    pub w: f32,
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Quat = Quat {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Build a rotation of `angle` radians around `axis`.
    ///
    /// The axis is normalized; a zero axis yields the identity rotation.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len = axis.length();
        if len <= f32::EPSILON {
            return Quat::IDENTITY;
        }
        let (sin, cos) = (angle * 0.5).sin_cos();
        let s = sin / len;
        Quat {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: cos,
        }
    }

    /// The inverse rotation (conjugate; valid for unit quaternions).
    pub fn conjugate(self) -> Quat {
        Quat {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Rotate a vector by this quaternion.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        // v' = v + 2w(u x v) + 2(u x (u x v)) with u the vector part
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Quat::IDENTITY
    }
}

/// The hand root's rigid transform: position and orientation in world space.
///
/// Joint positions are stored relative to this frame so a gesture reads the
/// same wherever the hand is held.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RootTransform {
    /// World-space position of the hand root
    pub position: Vec3,
    /// World-space orientation of the hand root
    pub rotation: Quat,
}

impl RootTransform {
    /// The identity transform (local frame == world frame).
    pub const IDENTITY: RootTransform = RootTransform {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a transform from position and rotation.
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Transform a world-space point into the hand-root local frame.
    pub fn point_to_local(&self, world: Vec3) -> Vec3 {
        self.rotation.conjugate().rotate(world - self.position)
    }

    /// Transform a local-frame point back into world space.
    pub fn point_to_world(&self, local: Vec3) -> Vec3 {
        self.rotation.rotate(local) + self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -2.0, 0.5);
        assert_close(a + b, Vec3::new(5.0, 0.0, 3.5));
        assert_close(a - b, Vec3::new(-3.0, 4.0, 2.5));
        assert_close(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert!((a.dot(b) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        assert!((a.distance(b) - 2.0f32.sqrt()).abs() < 1e-6);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn quarter_turn_about_z() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        assert_close(q.rotate(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 1.0, 0.0));
        assert_close(q.rotate(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn conjugate_undoes_rotation() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, -0.5), 0.83);
        let v = Vec3::new(0.2, -1.1, 3.0);
        assert_close(q.conjugate().rotate(q.rotate(v)), v);
    }

    #[test]
    fn zero_axis_is_identity() {
        let q = Quat::from_axis_angle(Vec3::ZERO, 1.0);
        assert_eq!(q, Quat::IDENTITY);
    }

    #[test]
    fn local_world_roundtrip() {
        let root = RootTransform::new(
            Vec3::new(10.0, -2.0, 5.0),
            Quat::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 1.2),
        );
        let world = Vec3::new(11.0, 0.0, 4.0);
        assert_close(root.point_to_world(root.point_to_local(world)), world);
    }

    #[test]
    fn identity_transform_is_noop() {
        let p = Vec3::new(3.0, 4.0, 5.0);
        assert_close(RootTransform::IDENTITY.point_to_local(p), p);
        assert_close(RootTransform::IDENTITY.point_to_world(p), p);
    }

    #[test]
    fn translation_only_offsets_points() {
        let root = RootTransform::new(Vec3::new(1.0, 1.0, 1.0), Quat::IDENTITY);
        assert_close(
            root.point_to_local(Vec3::new(2.0, 3.0, 4.0)),
            Vec3::new(1.0, 2.0, 3.0),
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_vec3() -> impl Strategy<Value = Vec3> {
            (-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0)
                .prop_map(|(x, y, z)| Vec3::new(x, y, z))
        }

        proptest! {
            #[test]
            fn rotation_preserves_length(
                axis in arb_vec3(),
                angle in -6.3f32..6.3,
                v in arb_vec3(),
            ) {
                let q = Quat::from_axis_angle(axis, angle);
                let rotated = q.rotate(v);
                prop_assert!((rotated.length() - v.length()).abs() < 1e-3);
            }

            #[test]
            fn local_world_roundtrip_holds(
                position in arb_vec3(),
                axis in arb_vec3(),
                angle in -6.3f32..6.3,
                point in arb_vec3(),
            ) {
                let root = RootTransform::new(position, Quat::from_axis_angle(axis, angle));
                let back = root.point_to_world(root.point_to_local(point));
                prop_assert!(back.distance(point) < 1e-3);
            }
        }
    }
}
