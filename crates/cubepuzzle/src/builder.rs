use cubemath::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{GRID_SIZE, GridIndex, PuzzleCube, PuzzleError, Result, SUB_CUBE_COUNT, SubCube};

/// Dimensions of the puzzle.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct CubeParams {
    /// Edge length of each sub-cube.
    pub edge: Length,
    /// Space between adjacent sub-cubes.
    pub margin: Length,
}
impl Default for CubeParams {
    fn default() -> Self {
        Self {
            edge: 10.0,
            margin: 1.5,
        }
    }
}
impl CubeParams {
    /// Constructs puzzle dimensions.
    pub fn new(edge: Length, margin: Length) -> Self {
        Self { edge, margin }
    }

    /// Returns the distance between the lowest corners of adjacent sub-cubes.
    pub fn spacing(&self) -> Length {
        self.edge + self.margin
    }
    /// Returns the half-extent of the assembled cube along any axis.
    pub fn radius(&self) -> Length {
        (GRID_SIZE as Float * self.spacing() - self.margin) / 2.0
    }

    /// Returns an error if the edge length is not positive or the margin is
    /// negative.
    pub fn validate(&self) -> Result<()> {
        let &Self { edge, margin } = self;
        if edge.is_finite() && edge > 0.0 && margin.is_finite() && margin >= 0.0 {
            Ok(())
        } else {
            Err(PuzzleError::InvalidDimension { edge, margin })
        }
    }
}

/// Builds the 27 sub-cubes of an uncolored puzzle, centered on the origin.
///
/// Every sub-cube is laid out at its grid offset and then moved by the same
/// centering translation, which becomes its initial transform.
pub fn build(params: CubeParams) -> Result<PuzzleCube> {
    params.validate()?;

    let spacing = params.spacing();
    let radius = params.radius();
    let baseline = Transform::from_translation(Vector3::new(-radius, -radius, -radius));

    let sub_cubes: Vec<SubCube> = GridIndex::iter()
        .map(|grid_index| {
            let origin = Point3::new(
                grid_index.i as Float * spacing,
                grid_index.j as Float * spacing,
                grid_index.k as Float * spacing,
            );
            SubCube::new(grid_index, origin, params.edge, baseline)
        })
        .collect();
    debug_assert_eq!(sub_cubes.len(), SUB_CUBE_COUNT);

    log::debug!(
        "built {} sub-cubes (edge {}, margin {}, radius {radius})",
        sub_cubes.len(),
        params.edge,
        params.margin,
    );

    Ok(PuzzleCube::from_parts(params, radius, baseline, sub_cubes))
}
