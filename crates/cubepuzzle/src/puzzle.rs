use cubemath::prelude::*;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{Color, CubeParams, GRID_SIZE, MoveHistory};

/// Logical position of a sub-cube in the solved layout.
///
/// Each coordinate is in the range `0..3`. This never changes after the puzzle
/// is built, no matter where the sub-cube has been moved.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct GridIndex {
    /// Position along the X axis.
    pub i: u8,
    /// Position along the Y axis.
    pub j: u8,
    /// Position along the Z axis.
    pub k: u8,
}
impl GridIndex {
    /// Constructs a grid index.
    pub const fn new(i: u8, j: u8, k: u8) -> Self {
        Self { i, j, k }
    }

    /// Returns an iterator over all 27 grid indices, in the order that
    /// sub-cubes are stored.
    pub fn iter() -> impl Iterator<Item = GridIndex> {
        iproduct!(0..GRID_SIZE, 0..GRID_SIZE, 0..GRID_SIZE).map(|(i, j, k)| Self::new(i, j, k))
    }

    /// Returns the position along `axis`.
    pub fn get(self, axis: Axis) -> u8 {
        match axis {
            Axis::X => self.i,
            Axis::Y => self.j,
            Axis::Z => self.k,
        }
    }

    /// Returns the storage index of the sub-cube, or `None` if the grid index
    /// is out of range.
    pub fn to_usize(self) -> Option<usize> {
        let n = GRID_SIZE;
        (self.i < n && self.j < n && self.k < n).then(|| {
            let n = n as usize;
            (self.i as usize * n + self.j as usize) * n + self.k as usize
        })
    }
}

/// Planar surface of a sub-cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    axis: Axis,
    sign: Sign,
    /// Center of the face before any transform is applied.
    local_center: Point3,
    color: Color,
}
impl Face {
    pub(crate) fn new(axis: Axis, sign: Sign, local_center: Point3) -> Self {
        Self {
            axis,
            sign,
            local_center,
            color: Color::Neutral,
        }
    }

    /// Returns the axis that the face was perpendicular to at construction.
    pub fn axis(&self) -> Axis {
        self.axis
    }
    /// Returns which end of [`Self::axis()`] the face was on at construction.
    pub fn sign(&self) -> Sign {
        self.sign
    }
    /// Returns the outward normal of the face before any transform is applied.
    pub fn local_normal(&self) -> Vector3 {
        self.axis.unit_vector(self.sign)
    }
    /// Returns the center of the face before any transform is applied.
    pub fn local_center(&self) -> Point3 {
        self.local_center
    }

    /// Returns the center of the face after applying `transform`.
    pub fn world_center(&self, transform: &Transform) -> Point3 {
        transform.transform_point(self.local_center)
    }
    /// Returns the outward normal of the face after applying `transform`.
    pub fn world_normal(&self, transform: &Transform) -> Vector3 {
        transform.transform_vector(self.local_normal())
    }

    /// Returns the color of the face.
    pub fn color(&self) -> Color {
        self.color
    }
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// One of the 27 pieces of the puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct SubCube {
    grid_index: GridIndex,
    /// Box occupied by the sub-cube before any transform is applied.
    local_bounds: Aabb,
    pub(crate) current_transform: Transform,
    pub(crate) faces: [Face; 6],
}
impl SubCube {
    /// Constructs a sub-cube with side length `edge` whose lowest corner is at
    /// `origin`, placed in the world by `transform`.
    pub(crate) fn new(
        grid_index: GridIndex,
        origin: Point3,
        edge: Length,
        transform: Transform,
    ) -> Self {
        let local_bounds = Aabb::from_origin_and_size(origin, Vector3::new(edge, edge, edge));
        let center = local_bounds.center();
        let faces = [
            (Axis::X, Sign::Neg),
            (Axis::X, Sign::Pos),
            (Axis::Y, Sign::Neg),
            (Axis::Y, Sign::Pos),
            (Axis::Z, Sign::Neg),
            (Axis::Z, Sign::Pos),
        ]
        .map(|(axis, sign)| Face::new(axis, sign, center + axis.unit_vector(sign) * (edge / 2.0)));
        Self {
            grid_index,
            local_bounds,
            current_transform: transform,
            faces,
        }
    }

    /// Returns the logical position of the sub-cube in the solved layout.
    pub fn grid_index(&self) -> GridIndex {
        self.grid_index
    }
    /// Returns the box occupied by the sub-cube before any transform is
    /// applied.
    pub fn local_bounds(&self) -> Aabb {
        self.local_bounds
    }
    /// Returns the accumulated transform of the sub-cube.
    pub fn current_transform(&self) -> &Transform {
        &self.current_transform
    }
    /// Returns the six faces of the sub-cube.
    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    /// Returns the corners of the sub-cube in world space.
    pub fn world_corners(&self) -> [Point3; 8] {
        self.local_bounds
            .corners()
            .map(|p| self.current_transform.transform_point(p))
    }
    /// Returns the world-space bounding box of the sub-cube.
    pub fn world_bounds(&self) -> Aabb {
        let [first, rest @ ..] = self.world_corners();
        rest.into_iter().fold(Aabb::from_point(first), Aabb::expand)
    }
    /// Returns the center of the sub-cube in world space.
    pub fn world_center(&self) -> Point3 {
        self.current_transform
            .transform_point(self.local_bounds.center())
    }
    /// Returns the extreme world coordinate of the sub-cube along `axis`.
    pub fn extremum(&self, axis: Axis, sign: Sign) -> Float {
        self.world_bounds().extremum(axis, sign)
    }

    /// Returns the face whose outward normal currently points toward `sign`
    /// along `axis`.
    pub fn face_toward(&self, axis: Axis, sign: Sign) -> Option<&Face> {
        let target = axis.unit_vector(sign);
        self.faces
            .iter()
            .find(|face| approx_eq(&face.world_normal(&self.current_transform), &target))
    }
}

/// 3x3x3 cube puzzle.
///
/// Construct one using [`PuzzleCube::new()`], or [`crate::build()`] followed
/// by [`crate::assign_colors()`].
#[derive(Debug, Clone)]
pub struct PuzzleCube {
    params: CubeParams,
    radius: Length,
    /// Transform that centers the assembly on the origin, shared by every
    /// sub-cube when the puzzle is built.
    baseline: Transform,
    /// Sub-cubes, indexed by [`GridIndex::to_usize()`].
    pub(crate) sub_cubes: Vec<SubCube>,
    pub(crate) history: MoveHistory,
    pub(crate) colored: bool,
}
impl PuzzleCube {
    /// Builds a new puzzle and colors its outward faces.
    pub fn new(params: CubeParams) -> crate::Result<Self> {
        let mut cube = crate::build(params)?;
        crate::assign_colors(&mut cube)?;
        Ok(cube)
    }

    pub(crate) fn from_parts(
        params: CubeParams,
        radius: Length,
        baseline: Transform,
        sub_cubes: Vec<SubCube>,
    ) -> Self {
        Self {
            params,
            radius,
            baseline,
            sub_cubes,
            history: MoveHistory::new(),
            colored: false,
        }
    }

    /// Returns the parameters that the puzzle was built from.
    pub fn params(&self) -> CubeParams {
        self.params
    }
    /// Returns the half-extent of the assembled cube along any axis.
    pub fn radius(&self) -> Length {
        self.radius
    }
    /// Returns the tolerance used when comparing lengths on this puzzle.
    ///
    /// This is [`EPSILON`] scaled by the distance between adjacent sub-cube
    /// centers, so that comparisons behave the same at any size.
    pub fn tolerance(&self) -> Length {
        EPSILON * self.params.spacing()
    }
    /// Returns the transform shared by every sub-cube right after building.
    pub fn baseline_transform(&self) -> &Transform {
        &self.baseline
    }

    /// Returns all 27 sub-cubes.
    pub fn sub_cubes(&self) -> &[SubCube] {
        &self.sub_cubes
    }
    /// Returns the sub-cube at a logical grid position.
    pub fn sub_cube(&self, grid_index: GridIndex) -> Option<&SubCube> {
        self.sub_cubes.get(grid_index.to_usize()?)
    }

    /// Returns the move history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Returns whether surface colors have been assigned.
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Returns the world-space bounding box of the whole assembly.
    pub fn bounds(&self) -> Aabb {
        self.sub_cubes
            .iter()
            .map(SubCube::world_bounds)
            .reduce(Aabb::union)
            .unwrap_or_else(|| Aabb::from_point(Point3::origin()))
    }

    /// Returns whether every sub-cube is back in the pose it had right after
    /// building.
    pub fn is_solved(&self) -> bool {
        self.sub_cubes
            .iter()
            .all(|sub_cube| {
                let t = &sub_cube.current_transform;
                t.approx_eq_scaled(&self.baseline, self.tolerance())
            })
    }

    /// Returns the number of faces with each color, in declaration order of
    /// [`Color`].
    pub fn color_counts(&self) -> Vec<(Color, usize)> {
        let faces = || self.sub_cubes.iter().flat_map(|sub_cube| &sub_cube.faces);
        Color::iter()
            .map(|color| (color, faces().filter(|face| face.color() == color).count()))
            .collect()
    }
}
