//! Random board generation.
//!
//! Placement is rejection sampling: each item draws uniformly random cells
//! until it hits one that no earlier item took. Every draw, including the
//! rejected ones, gets its own seed from [`compute_seed`], so a game seed
//! always yields the same board.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::{RngOracle, compute_seed};
use crate::state::{Board, Placements, Position};

type UsedCells = ArrayVec<Position, { GameConfig::PLACED_ITEMS }>;

/// Builds initial boards from an [`RngOracle`].
#[derive(Clone, Copy, Debug)]
pub struct GridGenerator<'a, R>
where
    R: RngOracle + ?Sized,
{
    rng: &'a R,
}

impl<'a, R> GridGenerator<'a, R>
where
    R: RngOracle + ?Sized,
{
    pub fn new(rng: &'a R) -> Self {
        Self { rng }
    }

    /// Generates a board and the player's starting position.
    pub fn generate(&self, seed: u64) -> (Board, Position) {
        let placements = self.placements(seed);
        (Board::placed(&placements), placements.player)
    }

    /// Draws the player, pit, wumpus and gold cells, in that order.
    ///
    /// Terminates because there are more cells than items to place.
    pub fn placements(&self, seed: u64) -> Placements {
        let mut used = UsedCells::new();
        let mut draw = 0u64;

        let player = self.accept(seed, 0, &mut draw, &mut used);
        let pit = self.accept(seed, 1, &mut draw, &mut used);
        let wumpus = self.accept(seed, 2, &mut draw, &mut used);
        let gold = self.accept(seed, 3, &mut draw, &mut used);

        Placements {
            player,
            pit,
            wumpus,
            gold,
        }
    }

    fn accept(&self, seed: u64, item: u32, draw: &mut u64, used: &mut UsedCells) -> Position {
        loop {
            let candidate = self.sample(compute_seed(seed, *draw, item));
            *draw += 1;
            if !used.contains(&candidate) {
                used.push(candidate);
                return candidate;
            }
        }
    }

    fn sample(&self, draw_seed: u64) -> Position {
        let index = self.rng.below(draw_seed, GameConfig::CELL_COUNT as u32) as usize;
        Position::from_index(index)
    }
}
