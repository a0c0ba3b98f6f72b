//! Sensory hints derived from the cells around the player.
//!
//! A pit next to the player is felt as a breeze, the wumpus as a stench. Only
//! the four orthogonal neighbours count; the board does not wrap.

use crate::state::{Board, CellContent, Position};

/// What the player senses at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Perception {
    Calm,
    Breeze,
    Stench,
    BreezeAndStench,
}

impl Perception {
    pub const fn from_senses(breeze: bool, stench: bool) -> Self {
        match (breeze, stench) {
            (true, true) => Perception::BreezeAndStench,
            (true, false) => Perception::Breeze,
            (false, true) => Perception::Stench,
            (false, false) => Perception::Calm,
        }
    }

    pub const fn has_breeze(self) -> bool {
        matches!(self, Perception::Breeze | Perception::BreezeAndStench)
    }

    pub const fn has_stench(self) -> bool {
        matches!(self, Perception::Stench | Perception::BreezeAndStench)
    }

    pub const fn message(self) -> &'static str {
        match self {
            Perception::BreezeAndStench => "You feel a breeze and a stench nearby...",
            Perception::Breeze => "You feel a breeze nearby...",
            Perception::Stench => "You smell something foul nearby...",
            Perception::Calm => "All seems calm...",
        }
    }
}

/// Derives the perception at `position` from its in-bounds orthogonal neighbours.
pub fn perceive(position: Position, board: &Board) -> Perception {
    let (breeze, stench) =
        position
            .neighbors()
            .fold((false, false), |(breeze, stench), neighbor| {
                match board.get(neighbor) {
                    CellContent::Pit => (true, stench),
                    CellContent::Wumpus => (breeze, true),
                    _ => (breeze, stench),
                }
            });
    Perception::from_senses(breeze, stench)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Placements;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn board(player: Position, pit: Position, wumpus: Position, gold: Position) -> Board {
        Board::from_placements(&Placements {
            player,
            pit,
            wumpus,
            gold,
        })
        .unwrap()
    }

    #[test]
    fn calm_when_no_hazard_is_adjacent() {
        let board = board(pos(0, 0), pos(0, 1), pos(3, 3), pos(2, 2));
        assert_eq!(perceive(pos(1, 0), &board), Perception::Calm);
    }

    #[test]
    fn breeze_and_stench_take_priority() {
        let board = board(pos(0, 0), pos(1, 2), pos(2, 1), pos(3, 3));
        assert_eq!(perceive(pos(1, 1), &board), Perception::BreezeAndStench);
        assert_eq!(perceive(pos(0, 2), &board), Perception::Breeze);
        assert_eq!(perceive(pos(3, 1), &board), Perception::Stench);
    }

    #[test]
    fn diagonals_are_ignored() {
        let board = board(pos(0, 0), pos(2, 2), pos(0, 2), pos(3, 0));
        assert_eq!(perceive(pos(1, 1), &board), Perception::Calm);
    }

    #[test]
    fn corners_do_not_wrap() {
        // Hazards sit on the opposite edges; with wraparound each corner would sense them.
        let top_left = board(pos(1, 1), pos(3, 0), pos(0, 3), pos(2, 2));
        assert_eq!(perceive(pos(0, 0), &top_left), Perception::Calm);

        let bottom_right = board(pos(1, 1), pos(0, 3), pos(3, 0), pos(2, 2));
        assert_eq!(perceive(pos(3, 3), &bottom_right), Perception::Calm);

        let top_right = board(pos(1, 1), pos(0, 0), pos(3, 3), pos(2, 2));
        assert_eq!(perceive(pos(0, 3), &top_right), Perception::Calm);

        let bottom_left = board(pos(1, 1), pos(3, 3), pos(0, 0), pos(2, 2));
        assert_eq!(perceive(pos(3, 0), &bottom_left), Perception::Calm);
    }

    #[test]
    fn perceive_is_idempotent() {
        let board = board(pos(0, 0), pos(1, 2), pos(2, 1), pos(3, 3));
        for position in Position::all() {
            assert_eq!(perceive(position, &board), perceive(position, &board));
        }
    }

    #[test]
    fn messages_match_perception() {
        assert_eq!(Perception::Calm.message(), "All seems calm...");
        assert_eq!(Perception::Breeze.message(), "You feel a breeze nearby...");
        assert_eq!(
            Perception::Stench.message(),
            "You smell something foul nearby..."
        );
        assert!(Perception::BreezeAndStench.has_breeze());
        assert!(Perception::BreezeAndStench.has_stench());
        assert!(!Perception::Breeze.has_stench());
    }
}
