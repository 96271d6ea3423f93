use cubemath::assert_approx_eq;
use pretty_assertions::assert_eq;

use super::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_solve_restores_transforms(
        moves in prop::collection::vec(arb_move(), 0..12),
        frames in 1_u32..6,
    ) {
        let mut cube = PuzzleCube::new(CubeParams::default()).unwrap();
        let before = transforms(&cube);
        let anim = TwistAnimation::with_frames(frames).unwrap();

        cube.apply_moves(moves.iter().copied(), &anim, &mut NoRedraw).unwrap();
        prop_assert_eq!(cube.history().moves(), moves.as_slice());

        cube.solve(&anim, &mut NoRedraw).unwrap();
        prop_assert!(cube.history().is_empty());
        prop_assert!(cube.is_solved());
        for (sub_cube, old) in cube.sub_cubes().iter().zip(&before) {
            assert_approx_eq!(*sub_cube.current_transform(), *old);
        }
    }

    #[test]
    fn proptest_notation_roundtrip(moves in prop::collection::vec(arb_move(), 0..20)) {
        let history = MoveHistory::from(moves.clone());
        prop_assert_eq!(history.to_string().parse::<MoveHistory>(), Ok(history));
    }
}

#[test]
fn test_rotate_is_reversible_on_scrambled_cube() {
    let mut cube = PuzzleCube::new(CubeParams::new(2.0, 0.25)).unwrap();
    let anim = TwistAnimation::default();
    cube.apply_moves(notation::parse_moves("F R U B L D").unwrap(), &anim, &mut NoRedraw)
        .unwrap();
    let before = transforms(&cube);

    let twist = Move::new(FaceId::Down, Direction::CounterClockwise);
    cube.rotate(twist, &anim, &mut NoRedraw).unwrap();
    cube.rotate(twist.rev(), &anim, &mut NoRedraw).unwrap();
    for (sub_cube, old) in cube.sub_cubes().iter().zip(&before) {
        assert_approx_eq!(*sub_cube.current_transform(), *old);
    }
    assert_eq!(cube.history().len(), 8);
}
