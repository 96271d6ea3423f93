use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FramePresenter, Move, PuzzleCube, PuzzleError, Result, TwistAnimation};

/// Ordered list of moves applied to a puzzle, oldest first.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct MoveHistory {
    moves: Vec<Move>,
}
impl fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::notation::format_moves(&self.moves))
    }
}
impl FromStr for MoveHistory {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        crate::notation::parse_moves(s).map(|moves| Self { moves })
    }
}
impl From<Vec<Move>> for MoveHistory {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}
impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl MoveHistory {
    /// Constructs an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move.
    pub fn record(&mut self, twist: Move) {
        self.moves.push(twist);
    }
    /// Removes and returns the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }
    /// Removes every move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Returns the moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    /// Returns the most recent move.
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }
    /// Returns the number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    /// Returns whether there are no moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    /// Returns an iterator over the moves, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl PuzzleCube {
    /// Undoes every recorded move, newest first, by replaying its inverse
    /// with the same animation as a normal rotation. Inverse moves are not
    /// recorded and the history is empty afterward.
    ///
    /// If a move fails partway through, the moves that have not been undone
    /// yet are left in the history and the error is returned.
    pub fn solve(
        &mut self,
        animation: &TwistAnimation,
        presenter: &mut impl FramePresenter,
    ) -> Result<()> {
        let mut pending = std::mem::take(&mut self.history);
        log::debug!("solving by undoing {} moves", pending.len());

        while let Some(twist) = pending.pop() {
            if let Err(e) = self.animate_twist(twist.rev(), animation, presenter) {
                log::error!("error undoing {twist}: {e}");
                pending.record(twist);
                self.history = pending;
                return Err(e);
            }
        }

        Ok(())
    }

    /// Applies every move in `moves` in order, recording each one.
    pub fn apply_moves(
        &mut self,
        moves: impl IntoIterator<Item = Move>,
        animation: &TwistAnimation,
        presenter: &mut impl FramePresenter,
    ) -> Result<()> {
        moves
            .into_iter()
            .try_for_each(|twist| self.rotate(twist, animation, presenter))
    }
}
