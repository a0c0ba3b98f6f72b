//! The per-game aggregate the engine mutates.

use std::fmt;

use crate::env::RngOracle;
use crate::error::GridError;
use crate::generator::GridGenerator;
use crate::perception::{Perception, perceive};
use crate::state::{Board, CellContent, Placements, Position};

/// Lifecycle of a single game.
///
/// `Playing` is the only state that accepts moves; `Dead` and `Won` are
/// absorbing until a new session is started.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Playing,
    Dead,
    Won,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Message shown to the player after the latest position change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hint {
    /// Still playing; what the player senses from the neighbouring cells.
    Sensed(Perception),
    /// Walked into a pit or the wumpus.
    TerribleFate,
    /// Walked onto the gold.
    FoundGold,
}

impl Hint {
    pub const fn message(self) -> &'static str {
        match self {
            Hint::Sensed(perception) => perception.message(),
            Hint::TerribleFate => "You have met a terrible fate...",
            Hint::FoundGold => "You found the gold! You win!",
        }
    }

    pub const fn perception(self) -> Option<Perception> {
        match self {
            Hint::Sensed(perception) => Some(perception),
            Hint::TerribleFate | Hint::FoundGold => None,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Canonical snapshot of one game: board, player position, status and hint.
///
/// Collected rewards are not part of the session; they belong to whoever
/// mints them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) player: Position,
    pub(crate) status: GameStatus,
    pub(crate) hint: Hint,
}

impl Session {
    /// Starts a game on `board` with the player at `player`.
    ///
    /// `player` must be the cell holding [`CellContent::Player`]; use
    /// [`Session::from_placements`] to build both consistently.
    pub fn new(board: Board, player: Position) -> Self {
        debug_assert_eq!(board.get(player), CellContent::Player);
        let hint = Hint::Sensed(perceive(player, &board));
        Self {
            board,
            player,
            status: GameStatus::Playing,
            hint,
        }
    }

    /// Starts a game on a hand-built board.
    pub fn from_placements(placements: &Placements) -> Result<Self, GridError> {
        let board = Board::from_placements(placements)?;
        Ok(Self::new(board, placements.player))
    }

    /// Starts a game on a freshly generated board.
    pub fn generate<R>(seed: u64, rng: &R) -> Self
    where
        R: RngOracle + ?Sized,
    {
        let (board, player) = GridGenerator::new(rng).generate(seed);
        Self::new(board, player)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn hint(&self) -> Hint {
        self.hint
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}
