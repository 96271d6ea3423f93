use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    CubeParams, Direction, FaceId, FramePresenter, Move, PuzzleCube, PuzzleError, Result,
    TwistAnimation,
};

/// Puzzle session shared between threads.
///
/// Hold the lock for the whole of a rotation or solve.
pub type SharedSession = Arc<Mutex<PuzzleSession>>;

/// Container owned by a host application, holding at most one puzzle along
/// with the animation settings used to turn it.
#[derive(Debug, Default, Clone)]
pub struct PuzzleSession {
    cube: Option<PuzzleCube>,
    animation: TwistAnimation,
}
impl PuzzleSession {
    /// Constructs a session with no puzzle and default animation settings.
    pub fn new() -> Self {
        Self::default()
    }
    /// Constructs a session with no puzzle.
    pub fn with_animation(animation: TwistAnimation) -> Self {
        Self {
            cube: None,
            animation,
        }
    }
    /// Wraps the session for sharing between threads.
    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    /// Returns the animation settings.
    pub fn animation(&self) -> &TwistAnimation {
        &self.animation
    }

    /// Builds and colors a new puzzle, replacing any existing one.
    ///
    /// If building fails, the existing puzzle is kept.
    pub fn create_cube(&mut self, params: CubeParams) -> Result<&PuzzleCube> {
        let cube = PuzzleCube::new(params)?;
        if self.cube.is_some() {
            log::info!("replacing existing puzzle");
        }
        Ok(&*self.cube.insert(cube))
    }
    /// Discards the puzzle, if there is one.
    pub fn reset(&mut self) {
        self.cube = None;
    }

    /// Returns whether a puzzle has been built.
    pub fn is_initialized(&self) -> bool {
        self.cube.is_some()
    }
    /// Returns the puzzle.
    pub fn cube(&self) -> Result<&PuzzleCube> {
        self.cube.as_ref().ok_or(PuzzleError::NotInitialized)
    }
    fn cube_mut(&mut self) -> Result<&mut PuzzleCube> {
        self.cube.as_mut().ok_or(PuzzleError::NotInitialized)
    }

    /// Turns an outer layer. See [`PuzzleCube::rotate()`].
    pub fn rotate(
        &mut self,
        face: FaceId,
        direction: Direction,
        presenter: &mut impl FramePresenter,
    ) -> Result<()> {
        let animation = self.animation;
        self.cube_mut()?
            .rotate(Move::new(face, direction), &animation, presenter)
    }

    /// Parses a move sequence and applies it. Nothing is applied if any token
    /// fails to parse.
    pub fn rotate_notation(
        &mut self,
        moves: &str,
        presenter: &mut impl FramePresenter,
    ) -> Result<()> {
        let animation = self.animation;
        let cube = self.cube_mut()?;
        let moves = crate::notation::parse_moves(moves)?;
        cube.apply_moves(moves, &animation, presenter)
    }

    /// Undoes every recorded move. See [`PuzzleCube::solve()`].
    pub fn solve(&mut self, presenter: &mut impl FramePresenter) -> Result<()> {
        let animation = self.animation;
        self.cube_mut()?.solve(&animation, presenter)
    }
}
