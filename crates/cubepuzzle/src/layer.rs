use cubemath::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{Display, EnumIter, EnumString, VariantArray};

use crate::{Color, GridIndex, PIECES_PER_LAYER, PuzzleCube, SUB_CUBE_COUNT};

/// One of the six outer layers of the puzzle.
#[derive(
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    VariantArray,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum FaceId {
    /// Layer at the minimum X coordinate.
    #[strum(to_string = "Left", serialize = "L")]
    Left,
    /// Layer at the maximum X coordinate.
    #[strum(to_string = "Right", serialize = "R")]
    Right,
    /// Layer at the minimum Y coordinate.
    #[strum(to_string = "Front", serialize = "F")]
    Front,
    /// Layer at the maximum Y coordinate.
    #[strum(to_string = "Back", serialize = "B")]
    Back,
    /// Layer at the maximum Z coordinate.
    #[strum(to_string = "Up", serialize = "U")]
    Up,
    /// Layer at the minimum Z coordinate.
    #[strum(to_string = "Down", serialize = "D")]
    Down,
}
impl FaceId {
    /// Returns the coordinate axis perpendicular to the layer.
    pub fn axis(self) -> Axis {
        match self {
            FaceId::Left | FaceId::Right => Axis::X,
            FaceId::Front | FaceId::Back => Axis::Y,
            FaceId::Up | FaceId::Down => Axis::Z,
        }
    }
    /// Returns which end of [`Self::axis()`] the layer is on.
    pub fn sign(self) -> Sign {
        match self {
            FaceId::Left | FaceId::Front | FaceId::Down => Sign::Neg,
            FaceId::Right | FaceId::Back | FaceId::Up => Sign::Pos,
        }
    }
    /// Returns the outward unit vector of the layer, which is also the axis of
    /// rotation when turning it.
    pub fn axis_vector(self) -> Vector3 {
        self.axis().unit_vector(self.sign())
    }
    /// Returns the layer on the opposite side of the puzzle.
    pub fn opposite(self) -> Self {
        match self {
            FaceId::Left => FaceId::Right,
            FaceId::Right => FaceId::Left,
            FaceId::Front => FaceId::Back,
            FaceId::Back => FaceId::Front,
            FaceId::Up => FaceId::Down,
            FaceId::Down => FaceId::Up,
        }
    }
    /// Returns the single-letter symbol used in move notation.
    pub fn symbol(self) -> char {
        match self {
            FaceId::Left => 'L',
            FaceId::Right => 'R',
            FaceId::Front => 'F',
            FaceId::Back => 'B',
            FaceId::Up => 'U',
            FaceId::Down => 'D',
        }
    }
}

/// Sub-cubes currently forming one outer layer, with the line to rotate them
/// around.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSelection {
    /// Layer that was selected.
    pub face: FaceId,
    /// Indices into [`PuzzleCube::sub_cubes()`].
    pub pieces: SmallVec<[usize; PIECES_PER_LAYER]>,
    /// Outward unit vector of the layer.
    pub axis: Vector3,
    /// Center of the outer plane of the layer.
    pub pivot: Point3,
}
impl LayerSelection {
    /// Returns the grid indices of the selected sub-cubes.
    pub fn grid_indices<'a>(
        &'a self,
        cube: &'a PuzzleCube,
    ) -> impl 'a + Iterator<Item = GridIndex> {
        self.pieces.iter().map(|&i| cube.sub_cubes()[i].grid_index())
    }
}

/// Selects the sub-cubes that currently form the outer layer `face`.
///
/// The layer is found from the current geometry rather than from grid indices:
/// it is every sub-cube whose extremum along the layer's axis matches the
/// extremum of the whole assembly. The pivot is the center of the assembly's
/// bounding box, moved onto that outer plane.
pub fn select_layer(cube: &PuzzleCube, face: FaceId) -> LayerSelection {
    let axis = face.axis();
    let sign = face.sign();

    let extrema: SmallVec<[Float; SUB_CUBE_COUNT]> = cube
        .sub_cubes()
        .iter()
        .map(|sub_cube| sub_cube.extremum(axis, sign))
        .collect();
    let ext = extrema
        .iter()
        .copied()
        .reduce(|a, b| sign.extremum(a, b))
        .unwrap_or(0.0);

    let mut pivot = cube.bounds().center();
    pivot[axis.index()] = ext;

    let epsilon = cube.tolerance();
    let pieces = extrema
        .iter()
        .enumerate()
        .filter(|(_, e)| approx_eq_within(*e, &ext, epsilon))
        .map(|(i, _)| i)
        .collect();

    LayerSelection {
        face,
        pieces,
        axis: face.axis_vector(),
        pivot,
    }
}

impl PuzzleCube {
    /// Selects the sub-cubes that currently form the outer layer `face`. See
    /// [`select_layer()`].
    pub fn select_layer(&self, face: FaceId) -> LayerSelection {
        select_layer(self, face)
    }

    /// Returns the colors currently showing on the outer face `face`, along
    /// with the grid index of the sub-cube showing each one.
    pub fn visible_colors(&self, face: FaceId) -> Vec<(GridIndex, Color)> {
        let selection = self.select_layer(face);
        selection
            .pieces
            .iter()
            .filter_map(|&i| {
                let sub_cube = &self.sub_cubes()[i];
                let visible = sub_cube.face_toward(face.axis(), face.sign())?;
                Some((sub_cube.grid_index(), visible.color()))
            })
            .collect()
    }
}
