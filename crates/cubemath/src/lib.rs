//! Vector, rigid transform, and bounding-box primitives for the cube puzzle.

pub use {approx, cgmath};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Length along one axis, in model units.
pub type Length = Float;

/// Point in 3D space.
pub type Point3 = cgmath::Point3<Float>;

/// Vector (direction and magnitude) in 3D space.
pub type Vector3 = cgmath::Vector3<Float>;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

pub mod approx_cmp;
pub mod axis;
pub mod bounds;
pub mod sign;
pub mod transform;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::approx_cmp::*;
    pub use crate::axis::Axis;
    pub use crate::bounds::Aabb;
    pub use crate::sign::Sign;
    pub use crate::transform::Transform;
    pub use crate::traits::*;
    pub use crate::{EPSILON, Float, Length, Point3, Vector3};
}
pub use prelude::*;

/// Traits only.
pub mod traits {
    pub use approx::AbsDiffEq;
    pub use cgmath::{EuclideanSpace, InnerSpace};
}
