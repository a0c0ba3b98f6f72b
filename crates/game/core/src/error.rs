//! Invalid-argument errors for game-core.
//!
//! The rules themselves are total: rejected moves are reported as outcomes,
//! not errors. The only failures are malformed inputs caught while building
//! the typed values the rules operate on.

use crate::state::Position;

/// Errors raised when constructing grid values from untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Coordinates outside `[0, GRID_SIZE - 1]` on either axis.
    #[error("position ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    /// A movement delta that is not one of the four unit vectors.
    #[error("delta ({row}, {col}) is not an orthogonal unit step")]
    InvalidDelta { row: i32, col: i32 },

    /// Two placements requested the same cell.
    #[error("cell {position} is assigned more than once")]
    Overlap { position: Position },
}
