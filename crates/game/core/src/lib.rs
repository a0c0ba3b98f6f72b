//! Deterministic Wumpus World rules shared across clients.
//!
//! `game-core` defines the canonical rules (board generation, perception, move
//! resolution, visibility) and exposes pure APIs that the runtime and any
//! other embedding can reuse. All session mutation flows through
//! [`engine::GameEngine`]; supporting crates depend on the types re-exported
//! here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod generator;
pub mod perception;
pub mod state;
pub mod visibility;

pub use action::{Direction, MoveAction, MoveRejection};
pub use config::GameConfig;
pub use engine::{GameEngine, MoveOutcome, RewardWon, resolve_move};
pub use env::{PcgRng, RngOracle, compute_seed};
pub use error::GridError;
pub use generator::GridGenerator;
pub use perception::{Perception, perceive};
pub use state::{Board, CellContent, GameStatus, Hazard, Hint, Placements, Position, Session};
pub use visibility::{TileView, display_content_of, is_revealed, visible_grid};
