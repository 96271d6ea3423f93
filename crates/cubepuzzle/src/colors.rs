use cubemath::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantArray};

use crate::{PuzzleCube, PuzzleError, Result};

/// Color label of a sub-cube face.
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
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    /// Faces on the `+X` side of the solved puzzle.
    Red,
    /// Faces on the `-X` side of the solved puzzle.
    Orange,
    /// Faces on the `+Y` side of the solved puzzle.
    DarkBlue,
    /// Faces on the `-Y` side of the solved puzzle.
    Green,
    /// Faces on the `+Z` side of the solved puzzle.
    White,
    /// Faces on the `-Z` side of the solved puzzle.
    Yellow,
    /// Faces hidden inside the solved puzzle.
    Neutral,
}
impl Color {
    /// Returns the color of a face whose center is at `center`, on a puzzle
    /// with half-extent `radius`.
    ///
    /// Axes are checked in X, Y, Z order, so a point on an edge of the
    /// assembly gets the color of the first matching axis.
    pub fn for_face_center(center: Point3, radius: Length) -> Self {
        [
            (Axis::X, Color::Red, Color::Orange),
            (Axis::Y, Color::DarkBlue, Color::Green),
            (Axis::Z, Color::White, Color::Yellow),
        ]
        .into_iter()
        .find_map(|(axis, pos, neg)| {
            let coord = axis.coord(center);
            let epsilon = EPSILON * radius;
            if approx_eq_within(&coord, &radius, epsilon) {
                Some(pos)
            } else if approx_eq_within(&coord, &-radius, epsilon) {
                Some(neg)
            } else {
                None
            }
        })
        .unwrap_or(Color::Neutral)
    }

    /// Returns whether the color is shown on the outside of the puzzle.
    pub fn is_outward(self) -> bool {
        self != Color::Neutral
    }

    /// Returns a CSS/X11 color name suitable for a host renderer.
    pub fn css_name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "darkorange",
            Color::DarkBlue => "darkblue",
            Color::Green => "green",
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Neutral => "dimgray",
        }
    }
    /// Returns the sRGB value of [`Self::css_name()`].
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::Red => [0xFF, 0x00, 0x00],
            Color::Orange => [0xFF, 0x8C, 0x00],
            Color::DarkBlue => [0x00, 0x00, 0x8B],
            Color::Green => [0x00, 0x80, 0x00],
            Color::White => [0xFF, 0xFF, 0xFF],
            Color::Yellow => [0xFF, 0xFF, 0x00],
            Color::Neutral => [0x69, 0x69, 0x69],
        }
    }
}

/// Colors every face of a freshly built puzzle according to which outer plane
/// of the assembly it lies on.
///
/// This must be called exactly once, before any rotation. It reads the current
/// geometry, so calling it after a rotation would mis-color faces. A second
/// call, or a call on a puzzle that has been turned, returns
/// [`PuzzleError::AlreadyColored`].
pub fn assign_colors(cube: &mut PuzzleCube) -> Result<()> {
    if cube.colored || !cube.is_solved() {
        return Err(PuzzleError::AlreadyColored);
    }

    let radius = cube.radius();
    for sub_cube in &mut cube.sub_cubes {
        let transform = sub_cube.current_transform;
        for face in &mut sub_cube.faces {
            face.set_color(Color::for_face_center(face.world_center(&transform), radius));
        }
    }
    cube.colored = true;

    log::debug!("assigned colors: {:?}", cube.color_counts());
    Ok(())
}
