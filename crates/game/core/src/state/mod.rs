//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the board, the player
//! position and the session lifecycle. Callers clone or query this state but
//! mutate it exclusively through the engine.
mod board;
mod position;
mod session;

pub use board::{Board, CellContent, Hazard, Placements};
pub use position::Position;
pub use session::{GameStatus, Hint, Session};
