//! Coordinate axes.

use strum::{Display, EnumIter};

use crate::{Float, Point3, Sign, Vector3};

/// One of the three coordinate axes.
#[derive(Display, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}
impl Axis {
    /// Returns the index of the axis (0 for X, 1 for Y, 2 for Z).
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the unit vector along the axis, pointing toward `sign`.
    pub fn unit_vector(self, sign: Sign) -> Vector3 {
        let mut ret = Vector3::new(0.0, 0.0, 0.0);
        ret[self.index()] = sign.float();
        ret
    }

    /// Returns the coordinate of a point along the axis.
    pub fn coord(self, p: Point3) -> Float {
        p[self.index()]
    }
}
