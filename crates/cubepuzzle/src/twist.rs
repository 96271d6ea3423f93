use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use cubemath::cgmath::{Deg, Rad};
use cubemath::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantArray};

use crate::{
    DEFAULT_FRAMES_PER_TWIST, FaceId, LayerSelection, PIECES_PER_LAYER, PuzzleCube, PuzzleError,
    Result,
};

/// Angle of one twist, in degrees.
pub const TWIST_ANGLE: Float = 90.0;

/// Direction to turn a layer, as seen when looking at the layer from outside
/// the puzzle.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    /// Clockwise.
    #[strum(to_string = "clockwise", serialize = "cw")]
    Clockwise,
    /// Counterclockwise.
    #[strum(to_string = "counter_clockwise", serialize = "counterclockwise", serialize = "ccw")]
    CounterClockwise,
}
impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
    /// Returns the signed angle of a full twist around the layer's outward
    /// axis.
    pub fn angle(self) -> Deg<Float> {
        match self {
            Direction::Clockwise => Deg(-TWIST_ANGLE),
            Direction::CounterClockwise => Deg(TWIST_ANGLE),
        }
    }
}

/// Quarter turn of one outer layer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Layer to turn.
    pub face: FaceId,
    /// Direction to turn it.
    pub direction: Direction,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face.symbol())?;
        if self.direction == Direction::CounterClockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}
impl FromStr for Move {
    type Err = PuzzleError;

    /// Parses a single quarter turn such as `U` or `R'`.
    fn from_str(s: &str) -> Result<Self> {
        match crate::notation::parse_moves(s)?.as_slice() {
            &[mv] => Ok(mv),
            _ => Err(PuzzleError::InvalidMove(s.to_string())),
        }
    }
}
impl Move {
    /// Constructs a move.
    pub const fn new(face: FaceId, direction: Direction) -> Self {
        Self { face, direction }
    }
    /// Constructs a move from a face name and direction name, such as
    /// `("Up", "cw")`.
    pub fn from_names(face: &str, direction: &str) -> Result<Self> {
        let invalid = || PuzzleError::InvalidMove(format!("{face} {direction}"));
        Ok(Self {
            face: face.parse().map_err(|_| invalid())?,
            direction: direction.parse().map_err(|_| invalid())?,
        })
    }
    /// Returns the move that undoes this one: same face, opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }
}

/// How a twist is animated.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TwistAnimation {
    /// Number of frames that each twist is split into.
    pub frames: NonZeroU32,
}
impl Default for TwistAnimation {
    fn default() -> Self {
        Self {
            frames: NonZeroU32::new(DEFAULT_FRAMES_PER_TWIST).unwrap_or(NonZeroU32::MIN),
        }
    }
}
impl TwistAnimation {
    /// Constructs animation settings with the given number of frames per
    /// twist, or returns `None` if `frames` is zero.
    pub fn with_frames(frames: u32) -> Option<Self> {
        NonZeroU32::new(frames).map(|frames| Self { frames })
    }
}

/// One step of a twist animation, passed to a [`FramePresenter`] after it has
/// been applied to the puzzle.
#[derive(Debug, Copy, Clone)]
pub struct AnimationFrame<'a> {
    /// Puzzle, with this frame already applied.
    pub cube: &'a PuzzleCube,
    /// Move being animated.
    pub twist: Move,
    /// Frame number, starting at 1.
    pub frame: u32,
    /// Total number of frames in the twist.
    pub frame_count: u32,
    /// Indices into [`PuzzleCube::sub_cubes()`] of the sub-cubes that moved.
    pub pieces: &'a [usize],
    /// Transform that was applied to each of [`Self::pieces`] this frame.
    pub incremental: &'a Transform,
}
impl AnimationFrame<'_> {
    /// Returns whether this is the last frame of the twist.
    pub fn is_last(&self) -> bool {
        self.frame == self.frame_count
    }
}

/// Host capability that is notified each time an animation frame is ready to
/// be drawn.
pub trait FramePresenter {
    /// Called once per frame, after the frame's transform has been applied.
    fn present_frame(&mut self, frame: &AnimationFrame<'_>);
}
impl<F: FnMut(&AnimationFrame<'_>)> FramePresenter for F {
    fn present_frame(&mut self, frame: &AnimationFrame<'_>) {
        self(frame);
    }
}

/// Frame presenter that does nothing.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoRedraw;
impl FramePresenter for NoRedraw {
    fn present_frame(&mut self, _frame: &AnimationFrame<'_>) {}
}

impl PuzzleCube {
    /// Turns an outer layer by a quarter turn, animating it frame by frame,
    /// and records the move in the history.
    ///
    /// This blocks until every frame has been applied and presented.
    pub fn rotate(
        &mut self,
        twist: Move,
        animation: &TwistAnimation,
        presenter: &mut impl FramePresenter,
    ) -> Result<()> {
        self.animate_twist(twist, animation, presenter)?;
        self.history.record(twist);
        Ok(())
    }

    /// Turns an outer layer without touching the history.
    ///
    /// The layer is selected once, before the first frame. If it does not
    /// contain exactly [`PIECES_PER_LAYER`] sub-cubes, no frame is applied.
    pub(crate) fn animate_twist(
        &mut self,
        twist: Move,
        animation: &TwistAnimation,
        presenter: &mut impl FramePresenter,
    ) -> Result<()> {
        let LayerSelection {
            pieces,
            axis,
            pivot,
            ..
        } = self.select_layer(twist.face);
        if pieces.len() != PIECES_PER_LAYER {
            log::warn!(
                "layer {} has {} sub-cubes instead of {PIECES_PER_LAYER}",
                twist.face,
                pieces.len(),
            );
            return Err(PuzzleError::InvalidMove(twist.to_string()));
        }

        let frame_count = animation.frames.get();
        let angle_change = Rad::from(twist.direction.angle()) / frame_count as Float;
        let incremental = Transform::rotation_about(pivot, axis, angle_change)
            .ok_or_else(|| PuzzleError::InvalidMove(twist.to_string()))?;

        log::debug!("twisting {twist} over {frame_count} frames");
        for frame in 1..=frame_count {
            for &i in &pieces {
                let t = &mut self.sub_cubes[i].current_transform;
                *t = incremental * *t;
            }
            log::trace!("presenting frame {frame}/{frame_count} of {twist}");
            presenter.present_frame(&AnimationFrame {
                cube: self,
                twist,
                frame,
                frame_count,
                pieces: &pieces,
                incremental: &incremental,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cubemath::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{Color, CubeParams, GridIndex};

    fn new_cube() -> PuzzleCube {
        PuzzleCube::new(CubeParams::default()).unwrap()
    }

    #[test]
    fn test_rotate_bad_layer_changes_nothing() {
        let mut cube = new_cube();
        crate::tests::lift_sub_cube(&mut cube, GridIndex::new(1, 1, 2));
        assert_eq!(cube.select_layer(FaceId::Up).pieces.len(), 1);
        let before: Vec<Transform> = cube
            .sub_cubes()
            .iter()
            .map(|sub_cube| *sub_cube.current_transform())
            .collect();

        let mut frames = 0;
        assert_eq!(
            cube.rotate(
                Move::new(FaceId::Up, Direction::Clockwise),
                &TwistAnimation::default(),
                &mut |_: &AnimationFrame<'_>| frames += 1,
            ),
            Err(PuzzleError::InvalidMove("U".to_string())),
        );
        assert_eq!(frames, 0);
        assert!(cube.history().is_empty());
        for (sub_cube, old) in cube.sub_cubes().iter().zip(&before) {
            assert_eq!(sub_cube.current_transform(), old);
        }

        // Other layers can still turn.
        cube.rotate(
            Move::new(FaceId::Down, Direction::Clockwise),
            &TwistAnimation::default(),
            &mut NoRedraw,
        )
        .unwrap();
        assert_eq!(cube.history().len(), 1);
    }

    #[test]
    fn test_direction_parse_and_rev() {
        assert_eq!("cw".parse(), Ok(Direction::Clockwise));
        assert_eq!("CCW".parse(), Ok(Direction::CounterClockwise));
        assert_eq!("counter_clockwise".parse(), Ok(Direction::CounterClockwise));
        assert!("sideways".parse::<Direction>().is_err());
        for d in Direction::iter() {
            assert_eq!(d.rev().rev(), d);
            assert_eq!(d.rev().angle(), -d.angle());
        }
    }

    #[test]
    fn test_move_from_names() {
        assert_eq!(
            Move::from_names("Up", "clockwise"),
            Ok(Move::new(FaceId::Up, Direction::Clockwise)),
        );
        assert_eq!(
            Move::from_names("Middle", "cw"),
            Err(PuzzleError::InvalidMove("Middle cw".to_string())),
        );
        assert_eq!(
            Move::from_names("L", "spin"),
            Err(PuzzleError::InvalidMove("L spin".to_string())),
        );
    }

    #[test]
    fn test_rotate_frames() {
        let mut cube = new_cube();
        let anim = TwistAnimation::default();
        let twist = Move::new(FaceId::Up, Direction::Clockwise);

        let mut frames = vec![];
        cube.rotate(twist, &anim, &mut |frame: &AnimationFrame<'_>| {
            assert_eq!(frame.twist, twist);
            assert_eq!(frame.pieces.len(), PIECES_PER_LAYER);
            frames.push((frame.frame, frame.frame_count, frame.is_last()));
        })
        .unwrap();

        assert_eq!(frames.len(), DEFAULT_FRAMES_PER_TWIST as usize);
        assert_eq!(frames.first(), Some(&(1, 15, false)));
        assert_eq!(frames.last(), Some(&(15, 15, true)));
        assert_eq!(cube.history().moves(), &[twist]);
    }

    #[test]
    fn test_rotate_up_clockwise_moves_pieces() {
        let mut cube = new_cube();
        let anim = TwistAnimation::default();
        cube.rotate(Move::new(FaceId::Up, Direction::Clockwise), &anim, &mut NoRedraw)
            .unwrap();

        // Looking down at the top, clockwise carries the -X/+Y corner to +X/+Y.
        let moved = cube.sub_cube(GridIndex::new(0, 2, 2)).unwrap();
        assert_approx_eq!(moved.world_center(), Point3::new(11.5, 11.5, 11.5));

        // Pieces below the top layer stay put.
        let below = cube.sub_cube(GridIndex::new(0, 2, 1)).unwrap();
        assert_eq!(below.current_transform(), cube.baseline_transform());

        // The top still shows white, but the side colors have cycled.
        assert!(cube.visible_colors(FaceId::Up).iter().all(|&(_, c)| c == Color::White));
        let right: Vec<Color> = cube
            .visible_colors(FaceId::Right)
            .into_iter()
            .filter(|&(g, _)| g.k == 2)
            .map(|(_, c)| c)
            .collect();
        assert_eq!(right, vec![Color::DarkBlue; 3]);
    }

    #[test]
    fn test_rotate_and_reverse() {
        for face in FaceId::iter() {
            for direction in Direction::iter() {
                let mut cube = new_cube();
                let anim = TwistAnimation::default();
                let before: Vec<Transform> = cube
                    .sub_cubes()
                    .iter()
                    .map(|sub_cube| *sub_cube.current_transform())
                    .collect();

                let twist = Move::new(face, direction);
                cube.rotate(twist, &anim, &mut NoRedraw).unwrap();
                assert!(!cube.is_solved());
                cube.rotate(twist.rev(), &anim, &mut NoRedraw).unwrap();

                for (sub_cube, old) in cube.sub_cubes().iter().zip(&before) {
                    assert_approx_eq!(*sub_cube.current_transform(), *old);
                }
                assert_eq!(cube.history().moves(), &[twist, twist.rev()]);
            }
        }
    }

    #[test]
    fn test_four_quarter_turns() {
        let mut cube = new_cube();
        let anim = TwistAnimation::with_frames(4).unwrap();
        for _ in 0..4 {
            cube.rotate(Move::new(FaceId::Right, Direction::CounterClockwise), &anim, &mut NoRedraw)
                .unwrap();
        }
        assert!(cube.is_solved());
        assert_eq!(cube.history().len(), 4);
    }

    #[test]
    fn test_rotate_single_frame() {
        let mut single = new_cube();
        let mut smooth = new_cube();
        let twist = Move::new(FaceId::Front, Direction::Clockwise);
        single
            .rotate(twist, &TwistAnimation::with_frames(1).unwrap(), &mut NoRedraw)
            .unwrap();
        smooth
            .rotate(twist, &TwistAnimation::default(), &mut NoRedraw)
            .unwrap();
        for (a, b) in single.sub_cubes().iter().zip(smooth.sub_cubes()) {
            assert_approx_eq!(*a.current_transform(), *b.current_transform());
        }
        assert!(TwistAnimation::with_frames(0).is_none());
    }
}
