use crate::config::GameConfig;
use crate::engine::{MoveOutcome, RewardWon};
use crate::error::GridError;
use crate::perception::perceive;
use crate::state::{CellContent, GameStatus, Hint, Position, Session};

/// Why a move left the session untouched.
///
/// Rejections are expected during normal play and are reported as an
/// outcome rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveRejection {
    #[error("game is over ({status})")]
    GameOver { status: GameStatus },

    #[error("moving {direction} from {origin} leaves the grid")]
    OutOfBounds {
        origin: Position,
        direction: Direction,
    },
}

/// High-level movement intent materialised into a canonical action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: Direction,
}

/// The four orthogonal unit steps, in `(row, col)` terms.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta of one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl TryFrom<(i32, i32)> for Direction {
    type Error = GridError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        match (row, col) {
            (-1, 0) => Ok(Direction::Up),
            (1, 0) => Ok(Direction::Down),
            (0, -1) => Ok(Direction::Left),
            (0, 1) => Ok(Direction::Right),
            _ => Err(GridError::InvalidDelta { row, col }),
        }
    }
}

impl MoveAction {
    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Returns the destination cell if the move is accepted.
    pub fn pre_validate(&self, session: &Session) -> Result<Position, MoveRejection> {
        if session.status.is_terminal() {
            return Err(MoveRejection::GameOver {
                status: session.status,
            });
        }

        session
            .player
            .offset(self.direction)
            .ok_or(MoveRejection::OutOfBounds {
                origin: session.player,
                direction: self.direction,
            })
    }

    /// Resolves an accepted move onto `destination`.
    ///
    /// The destination is inspected before anything is written to it. A
    /// hazard stays on its cell when the player dies there; gold is replaced
    /// by the player. The player's position follows the move in every case.
    pub(crate) fn apply(
        &self,
        session: &mut Session,
        destination: Position,
        config: &GameConfig,
    ) -> MoveOutcome {
        let from = session.player;
        session.board.set(from, CellContent::Empty);
        let target = session.board.get(destination);

        let outcome = match target.hazard() {
            Some(hazard) => {
                session.status = GameStatus::Dead;
                session.hint = Hint::TerribleFate;
                MoveOutcome::Died {
                    from,
                    at: destination,
                    hazard,
                }
            }
            None if target == CellContent::Gold => {
                session.board.set(destination, CellContent::Player);
                session.status = GameStatus::Won;
                session.hint = Hint::FoundGold;
                MoveOutcome::Won {
                    from,
                    at: destination,
                    reward: RewardWon::new(config.reward_uri.clone()),
                }
            }
            None => {
                session.board.set(destination, CellContent::Player);
                let perception = perceive(destination, &session.board);
                session.hint = Hint::Sensed(perception);
                MoveOutcome::Moved {
                    from,
                    to: destination,
                    perception,
                }
            }
        };

        session.player = destination;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Placements;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn session() -> Session {
        Session::from_placements(&Placements {
            player: pos(0, 0),
            pit: pos(0, 1),
            wumpus: pos(3, 3),
            gold: pos(2, 2),
        })
        .unwrap()
    }

    #[test]
    fn only_unit_deltas_convert() {
        assert_eq!(Direction::try_from((-1, 0)), Ok(Direction::Up));
        assert_eq!(Direction::try_from((0, 1)), Ok(Direction::Right));
        assert_eq!(
            Direction::try_from((1, 1)),
            Err(GridError::InvalidDelta { row: 1, col: 1 })
        );
        assert!(Direction::try_from((0, 0)).is_err());
        assert!(Direction::try_from((0, 2)).is_err());

        for direction in Direction::ALL {
            assert_eq!(Direction::try_from(direction.delta()), Ok(direction));
        }
    }

    #[test]
    fn directions_parse_from_names() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("LEFT".parse::<Direction>().unwrap(), Direction::Left);
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn pre_validate_rejects_leaving_the_grid() {
        let rejection = MoveAction::new(Direction::Left)
            .pre_validate(&session())
            .unwrap_err();

        assert_eq!(
            rejection,
            MoveRejection::OutOfBounds {
                origin: pos(0, 0),
                direction: Direction::Left,
            }
        );
        assert_eq!(rejection.to_string(), "moving left from (0, 0) leaves the grid");
    }

    #[test]
    fn pre_validate_rejects_after_game_over() {
        let mut session = session();
        session.status = GameStatus::Won;

        assert_eq!(
            MoveAction::new(Direction::Down).pre_validate(&session),
            Err(MoveRejection::GameOver {
                status: GameStatus::Won
            })
        );
    }

    #[test]
    fn pre_validate_returns_destination() {
        assert_eq!(
            MoveAction::new(Direction::Down).pre_validate(&session()),
            Ok(pos(1, 0))
        );
    }
}
