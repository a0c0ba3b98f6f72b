//! Plain-text rendering of the visible board.

use std::fmt::Write;

use game_core::{CellContent, GameStatus, Session, TileView, visible_grid};

pub fn glyph(tile: TileView) -> char {
    match tile {
        TileView::Covered => '#',
        TileView::Revealed(CellContent::Empty) => '.',
        TileView::Revealed(CellContent::Player) => 'P',
        TileView::Revealed(CellContent::Pit) => 'O',
        TileView::Revealed(CellContent::Wumpus) => 'W',
        TileView::Revealed(CellContent::Gold) => 'G',
    }
}

/// One line per row, cells separated by a space.
pub fn render_board(session: &Session) -> String {
    visible_grid(session)
        .iter()
        .map(|row| {
            row.iter()
                .map(|&tile| glyph(tile).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Account header, board, hint, reward count and the key legend.
///
/// `account` is `None` when no reward chain is connected; `collected` is
/// `None` when the reward count could not be fetched.
pub fn render_screen(session: &Session, account: Option<&str>, collected: Option<usize>) -> String {
    let mut screen = String::new();
    let _ = writeln!(screen, "Account: {}", account.unwrap_or("not connected"));
    let _ = writeln!(screen, "{}", render_board(session));
    let _ = writeln!(screen);
    let _ = writeln!(screen, "{}", session.hint());
    match collected {
        Some(count) => {
            let _ = writeln!(screen, "Gold collected: {count}");
        }
        None => {
            let _ = writeln!(screen, "Gold collected: unavailable");
        }
    }
    let legend = match session.status() {
        GameStatus::Playing => "[w/a/s/d] move  [n] new game  [q] quit",
        GameStatus::Dead | GameStatus::Won => "[n] new game  [q] quit",
    };
    let _ = write!(screen, "{legend}\n> ");
    screen
}
