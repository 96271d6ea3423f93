use cubemath::Float;

/// Error produced by a puzzle operation.
///
/// All of these are precondition failures; the operation that produced one has
/// not modified the puzzle.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    /// Edge length must be positive and margin must be non-negative.
    #[error("invalid cube dimensions (edge {edge}, margin {margin})")]
    InvalidDimension {
        /// Requested edge length of each sub-cube.
        edge: Float,
        /// Requested space between sub-cubes.
        margin: Float,
    },
    /// Unrecognized face or direction, or a layer that cannot be turned.
    #[error("invalid move {0:?}")]
    InvalidMove(String),
    /// Operation requires a puzzle but none has been built.
    #[error("no puzzle has been built")]
    NotInitialized,
    /// Surface colors can only be assigned once, to a freshly built puzzle.
    #[error("surface colors have already been assigned")]
    AlreadyColored,
}

/// Result type for puzzle operations.
pub type Result<T, E = PuzzleError> = std::result::Result<T, E>;
