//! 3x3x3 layer-turning cube puzzle: geometry, surface colors, animated layer
//! rotation, and move history.
//!
//! # Example
//!
//! ```rust
//! use cubepuzzle::prelude::*;
//!
//! let mut cube = PuzzleCube::new(CubeParams::default()).unwrap();
//! assert_eq!(cube.radius(), 16.5);
//!
//! let anim = TwistAnimation::default();
//! cube.rotate(Move::new(FaceId::Up, Direction::Clockwise), &anim, &mut NoRedraw)
//!     .unwrap();
//! assert_eq!(cube.history().len(), 1);
//!
//! cube.solve(&anim, &mut NoRedraw).unwrap();
//! assert!(cube.history().is_empty());
//! assert!(cube.is_solved());
//! ```

pub use cubemath;
pub use prelude::*;

mod builder;
mod colors;
mod error;
mod history;
mod layer;
pub mod notation;
mod puzzle;
mod session;
mod twist;

#[cfg(test)]
mod tests;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::builder::{CubeParams, build};
    pub use crate::colors::{Color, assign_colors};
    pub use crate::error::{PuzzleError, Result};
    pub use crate::history::MoveHistory;
    pub use crate::layer::{FaceId, LayerSelection, select_layer};
    pub use crate::puzzle::{Face, GridIndex, PuzzleCube, SubCube};
    pub use crate::session::{PuzzleSession, SharedSession};
    pub use crate::twist::{
        AnimationFrame, Direction, FramePresenter, Move, NoRedraw, TwistAnimation,
    };
}

/// Number of sub-cubes along each edge of the puzzle.
pub const GRID_SIZE: u8 = 3;

/// Total number of sub-cubes in the puzzle.
pub const SUB_CUBE_COUNT: usize = 27;

/// Number of sub-cubes in one outer layer.
pub const PIECES_PER_LAYER: usize = 9;

/// Default number of animation frames per quarter turn.
pub const DEFAULT_FRAMES_PER_TWIST: u32 = 15;
