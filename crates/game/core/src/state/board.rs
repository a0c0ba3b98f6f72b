use crate::config::GameConfig;
use crate::error::GridError;
use crate::state::Position;

const N: usize = GameConfig::GRID_SIZE;

/// What a single board cell holds.
///
/// The string forms (`empty`, `player`, ...) are stable asset keys that
/// renderers map to images.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum CellContent {
    #[default]
    Empty,
    Player,
    Pit,
    Wumpus,
    Gold,
}

impl CellContent {
    /// Returns the hazard this content represents, if any.
    pub const fn hazard(self) -> Option<Hazard> {
        match self {
            CellContent::Pit => Some(Hazard::Pit),
            CellContent::Wumpus => Some(Hazard::Wumpus),
            _ => None,
        }
    }

    pub const fn is_hazard(self) -> bool {
        self.hazard().is_some()
    }
}

/// Cell contents that end the game on entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Hazard {
    Pit,
    Wumpus,
}

impl From<Hazard> for CellContent {
    fn from(hazard: Hazard) -> Self {
        match hazard {
            Hazard::Pit => CellContent::Pit,
            Hazard::Wumpus => CellContent::Wumpus,
        }
    }
}

/// Where the four placed items go when a board is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placements {
    pub player: Position,
    pub pit: Position,
    pub wumpus: Position,
    pub gold: Position,
}

impl Placements {
    /// Placements in generation order: player, pit, wumpus, gold.
    pub fn ordered(&self) -> [(Position, CellContent); GameConfig::PLACED_ITEMS] {
        [
            (self.player, CellContent::Player),
            (self.pit, CellContent::Pit),
            (self.wumpus, CellContent::Wumpus),
            (self.gold, CellContent::Gold),
        ]
    }
}

/// Square grid of cell contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[CellContent; N]; N],
}

impl Board {
    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a board from placements, rejecting any two items on one cell.
    pub fn from_placements(placements: &Placements) -> Result<Self, GridError> {
        let ordered = placements.ordered();
        for (index, (position, _)) in ordered.iter().enumerate() {
            if ordered[..index].iter().any(|(other, _)| other == position) {
                return Err(GridError::Overlap {
                    position: *position,
                });
            }
        }
        Ok(Self::placed(placements))
    }

    /// Writes placements without checking for overlap; later items win.
    pub(crate) fn placed(placements: &Placements) -> Self {
        let mut board = Self::empty();
        for (position, content) in placements.ordered() {
            board.set(position, content);
        }
        board
    }

    pub fn get(&self, position: Position) -> CellContent {
        self.cells[position.row()][position.col()]
    }

    pub(crate) fn set(&mut self, position: Position, content: CellContent) {
        self.cells[position.row()][position.col()] = content;
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[CellContent; N]; N] {
        &self.cells
    }

    /// Every cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellContent)> + '_ {
        Position::all().map(move |position| (position, self.get(position)))
    }

    pub fn count(&self, content: CellContent) -> usize {
        self.cells().filter(|(_, cell)| *cell == content).count()
    }

    /// First cell (row-major) holding `content`.
    pub fn find(&self, content: CellContent) -> Option<Position> {
        self.cells()
            .find(|(_, cell)| *cell == content)
            .map(|(position, _)| position)
    }
}
