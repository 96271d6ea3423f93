//! Rigid transforms (rotation + translation).

use std::fmt;
use std::ops::Mul;

use approx::AbsDiffEq;
use cgmath::{EuclideanSpace, InnerSpace, Matrix3, Matrix4, Rad, SquareMatrix};

use crate::{EPSILON, Float, Point3, Vector3};

/// Rigid transform in 3D space, stored as a homogeneous 4x4 matrix.
///
/// Multiplication composes transforms: `a * b` applies `b` first, then `a`.
#[derive(Copy, Clone, PartialEq)]
pub struct Transform(Matrix4<Float>);

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        // cgmath matrices are column-major; print rows for readability
        f.debug_list()
            .entries((0..4).map(|row| [m.x[row], m.y[row], m.z[row], m.w[row]]))
            .finish()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::ident()
    }
}

impl Transform {
    /// Constructs the identity transform.
    pub fn ident() -> Self {
        Self(Matrix4::identity())
    }
    /// Constructs a translation by `delta`.
    pub fn from_translation(delta: Vector3) -> Self {
        Self(Matrix4::from_translation(delta))
    }
    /// Constructs a rotation by `angle` around the line through `pivot` in the
    /// direction of `axis`, following the right-hand rule.
    ///
    /// Returns `None` if `axis` is (approximately) zero.
    pub fn rotation_about(pivot: Point3, axis: Vector3, angle: Rad<Float>) -> Option<Self> {
        let len = axis.magnitude();
        if len < EPSILON || !len.is_finite() {
            return None;
        }
        let to_origin = Matrix4::from_translation(-pivot.to_vec());
        let rot = Matrix4::from_axis_angle(axis / len, angle);
        let from_origin = Matrix4::from_translation(pivot.to_vec());
        Some(Self(from_origin * rot * to_origin))
    }

    /// Transforms a point.
    pub fn transform_point(&self, p: Point3) -> Point3 {
        cgmath::Transform::transform_point(&self.0, p)
    }
    /// Transforms a vector, ignoring translation.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        cgmath::Transform::transform_vector(&self.0, v)
    }

    /// Returns the translation part of the transform.
    pub fn translation(&self) -> Vector3 {
        self.0.w.truncate()
    }
    /// Returns the rotation part of the transform.
    pub fn rotation(&self) -> Matrix3<Float> {
        Matrix3::from_cols(self.0.x.truncate(), self.0.y.truncate(), self.0.z.truncate())
    }

    /// Returns whether two transforms are approximately equal, comparing the
    /// rotation part within `EPSILON` and the translation part within
    /// `translation_epsilon`.
    ///
    /// Rotation entries are unitless but translations scale with the size of
    /// the geometry, so the two need different tolerances.
    pub fn approx_eq_scaled(&self, other: &Self, translation_epsilon: Float) -> bool {
        self.rotation().abs_diff_eq(&other.rotation(), EPSILON)
            && self
                .translation()
                .abs_diff_eq(&other.translation(), translation_epsilon)
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform(self.0 * rhs.0)
    }
}

impl AbsDiffEq for Transform {
    type Epsilon = Float;

    fn default_epsilon() -> Float {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Float) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}
