use proptest::prelude::*;
use strum::VariantArray;

use crate::*;

mod solve;

fn arb_move() -> impl Strategy<Value = Move> {
    (
        prop::sample::select(FaceId::VARIANTS),
        prop::sample::select(Direction::VARIANTS),
    )
        .prop_map(|(face, direction)| Move::new(face, direction))
}

fn transforms(cube: &PuzzleCube) -> Vec<cubemath::Transform> {
    cube.sub_cubes()
        .iter()
        .map(|sub_cube| *sub_cube.current_transform())
        .collect()
}

/// Moves a sub-cube outward along +Z so that it alone forms the Up layer.
pub(crate) fn lift_sub_cube(cube: &mut PuzzleCube, grid_index: GridIndex) {
    let i = grid_index.to_usize().unwrap();
    let t = &mut cube.sub_cubes[i].current_transform;
    *t = cubemath::Transform::from_translation(cubemath::Vector3::new(0.0, 0.0, 1.0)) * *t;
}
