//! Axis-aligned bounding boxes.

use cgmath::EuclideanSpace;
use strum::IntoEnumIterator;

use crate::{Axis, Float, Point3, Sign, Vector3, approx_eq_within};

/// Axis-aligned bounding box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    /// Corner with the smallest coordinates.
    pub min: Point3,
    /// Corner with the largest coordinates.
    pub max: Point3,
}
impl Aabb {
    /// Constructs a box containing a single point.
    pub fn from_point(p: Point3) -> Self {
        Self { min: p, max: p }
    }
    /// Constructs a box from its origin corner and its size along each axis.
    pub fn from_origin_and_size(origin: Point3, size: Vector3) -> Self {
        Self::from_point(origin).expand(origin + size)
    }

    /// Returns the smallest box containing `self` and `p`.
    #[must_use]
    pub fn expand(self, p: Point3) -> Self {
        Self {
            min: Point3::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z)),
            max: Point3::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z)),
        }
    }
    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        self.expand(other.min).expand(other.max)
    }

    /// Returns the eight corners of the box.
    pub fn corners(&self) -> [Point3; 8] {
        let [a, b] = [self.min, self.max];
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, b.y, b.z),
            Point3::new(b.x, b.y, b.z),
        ]
    }

    /// Returns the center of the box.
    pub fn center(&self) -> Point3 {
        self.min.midpoint(self.max)
    }
    /// Returns the extreme coordinate of the box along `axis`: the maximum for
    /// [`Sign::Pos`] and the minimum for [`Sign::Neg`].
    pub fn extremum(&self, axis: Axis, sign: Sign) -> Float {
        match sign {
            Sign::Neg => axis.coord(self.min),
            Sign::Pos => axis.coord(self.max),
        }
    }

    /// Returns whether the interiors of two boxes overlap by more than
    /// `epsilon` along every axis.
    pub fn overlaps(&self, other: &Self, epsilon: Float) -> bool {
        Axis::iter().all(|axis| {
            let lo = axis.coord(self.min).max(axis.coord(other.min));
            let hi = axis.coord(self.max).min(axis.coord(other.max));
            hi > lo && !approx_eq_within(&hi, &lo, epsilon)
        })
    }
}
