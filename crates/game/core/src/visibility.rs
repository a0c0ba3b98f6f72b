//! Read-time projection of the board for presentation.
//!
//! While the game is running only the player's own cell is shown; once it
//! ends, the whole board is. Nothing here mutates the session.

use crate::config::GameConfig;
use crate::state::{CellContent, Position, Session};

const N: usize = GameConfig::GRID_SIZE;

/// What a consumer is allowed to see at one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileView {
    Covered,
    Revealed(CellContent),
}

impl TileView {
    /// Stable snake_case key a renderer can map to an image.
    pub fn asset_key(self) -> &'static str {
        match self {
            TileView::Covered => "covered",
            TileView::Revealed(content) => content.into(),
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, TileView::Revealed(_))
    }
}

pub fn is_revealed(position: Position, session: &Session) -> bool {
    position == session.player() || session.is_over()
}

pub fn display_content_of(position: Position, session: &Session) -> TileView {
    if is_revealed(position, session) {
        TileView::Revealed(session.board().get(position))
    } else {
        TileView::Covered
    }
}

/// The whole board as a consumer sees it, row by row.
pub fn visible_grid(session: &Session) -> [[TileView; N]; N] {
    let mut grid = [[TileView::Covered; N]; N];
    for position in Position::all() {
        grid[position.row()][position.col()] = display_content_of(position, session);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Direction, MoveAction};
    use crate::engine::GameEngine;
    use crate::state::Placements;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn scenario() -> Session {
        Session::from_placements(&Placements {
            player: pos(0, 0),
            pit: pos(0, 1),
            wumpus: pos(3, 3),
            gold: pos(2, 2),
        })
        .unwrap()
    }

    fn revealed_count(session: &Session) -> usize {
        Position::all()
            .filter(|position| is_revealed(*position, session))
            .count()
    }

    #[test]
    fn only_player_cell_is_revealed_while_playing() {
        let session = scenario();

        assert_eq!(revealed_count(&session), 1);
        assert_eq!(
            display_content_of(pos(0, 0), &session),
            TileView::Revealed(CellContent::Player)
        );
        assert_eq!(display_content_of(pos(0, 1), &session), TileView::Covered);
        assert_eq!(display_content_of(pos(2, 2), &session), TileView::Covered);
    }

    #[test]
    fn whole_board_is_revealed_after_death() {
        let mut session = scenario();
        GameEngine::new(&mut session)
            .execute(&GameConfig::default(), MoveAction::new(Direction::Right));

        assert_eq!(revealed_count(&session), GameConfig::CELL_COUNT);
        assert_eq!(
            display_content_of(pos(0, 1), &session),
            TileView::Revealed(CellContent::Pit)
        );
        assert_eq!(
            display_content_of(pos(3, 3), &session),
            TileView::Revealed(CellContent::Wumpus)
        );
    }

    #[test]
    fn whole_board_is_revealed_after_win() {
        let mut session = Session::from_placements(&Placements {
            player: pos(2, 1),
            pit: pos(0, 1),
            wumpus: pos(3, 3),
            gold: pos(2, 2),
        })
        .unwrap();
        assert_eq!(revealed_count(&session), 1);

        GameEngine::new(&mut session)
            .execute(&GameConfig::default(), MoveAction::new(Direction::Right));

        assert!(session.is_over());
        assert_eq!(revealed_count(&session), GameConfig::CELL_COUNT);
        assert_eq!(
            display_content_of(pos(2, 2), &session),
            TileView::Revealed(CellContent::Player)
        );
        assert_eq!(
            display_content_of(pos(0, 1), &session),
            TileView::Revealed(CellContent::Pit)
        );
        assert_eq!(
            display_content_of(pos(3, 3), &session),
            TileView::Revealed(CellContent::Wumpus)
        );
    }

    #[test]
    fn visible_grid_matches_cell_queries() {
        let session = scenario();
        let grid = visible_grid(&session);

        for position in Position::all() {
            assert_eq!(
                grid[position.row()][position.col()],
                display_content_of(position, &session)
            );
        }
        assert_eq!(grid[0][0].asset_key(), "player");
        assert_eq!(grid[0][1].asset_key(), "covered");
    }
}
