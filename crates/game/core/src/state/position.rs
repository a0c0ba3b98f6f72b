use std::fmt;

use crate::action::Direction;
use crate::config::GameConfig;
use crate::error::GridError;

/// Discrete grid position expressed as `(row, col)`.
///
/// Both coordinates are always inside `[0, GRID_SIZE - 1]`; the only way to
/// build a position from raw numbers is [`Position::new`], which rejects
/// anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Result<Self, GridError> {
        if row < GameConfig::GRID_SIZE && col < GameConfig::GRID_SIZE {
            Ok(Self { row, col })
        } else {
            Err(GridError::OutOfBounds { row, col })
        }
    }

    /// Row-major index; `index` must be below `CELL_COUNT`.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self {
            row: index / GameConfig::GRID_SIZE,
            col: index % GameConfig::GRID_SIZE,
        }
    }

    pub const fn row(self) -> usize {
        self.row
    }

    pub const fn col(self) -> usize {
        self.col
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GameConfig::CELL_COUNT).map(Self::from_index)
    }

    /// The neighbouring cell one step in `direction`, or `None` past the edge.
    pub fn offset(self, direction: Direction) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        let row = self.row.checked_add_signed(d_row as isize)?;
        let col = self.col.checked_add_signed(d_col as isize)?;
        Self::new(row, col).ok()
    }

    /// In-bounds orthogonal neighbours. The grid does not wrap.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.offset(direction))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = GridError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(position: Position) -> Self {
        (position.row, position.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn rejects_coordinates_outside_grid() {
        assert_eq!(
            Position::new(4, 0),
            Err(GridError::OutOfBounds { row: 4, col: 0 })
        );
        assert!(Position::new(0, 4).is_err());
        assert!(Position::new(3, 3).is_ok());
    }

    #[test]
    fn offset_stops_at_edges() {
        assert_eq!(Position::ORIGIN.offset(Direction::Up), None);
        assert_eq!(Position::ORIGIN.offset(Direction::Left), None);
        assert_eq!(Position::ORIGIN.offset(Direction::Down), Some(pos(1, 0)));
        assert_eq!(pos(3, 3).offset(Direction::Right), None);
        assert_eq!(pos(3, 3).offset(Direction::Down), None);
    }

    #[test]
    fn corner_has_two_neighbors_and_center_has_four() {
        let corner: Vec<_> = pos(0, 0).neighbors().collect();
        assert_eq!(corner, vec![pos(1, 0), pos(0, 1)]);

        let center: Vec<_> = pos(1, 2).neighbors().collect();
        assert_eq!(center.len(), 4);
        assert!(!center.contains(&pos(0, 1)), "diagonals are not neighbours");
    }

    #[test]
    fn all_covers_the_board_once() {
        let cells: Vec<_> = Position::all().collect();
        assert_eq!(cells.len(), GameConfig::CELL_COUNT);
        assert_eq!(cells[0], Position::ORIGIN);
        assert_eq!(cells[5], pos(1, 1));
        assert_eq!(cells[15], pos(3, 3));
    }
}
