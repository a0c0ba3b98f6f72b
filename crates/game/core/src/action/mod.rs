//! Player intents accepted by the engine.
//!
//! The game has a single action, a one-cell move. It runs through the same
//! two phases every time: `pre_validate` decides whether the move is accepted
//! at all, and `apply` resolves it against the board.

mod movement;

pub use movement::{Direction, MoveAction, MoveRejection};
