//! Read-only environment the rules draw on.
//!
//! The only environmental input of the game is randomness for board
//! placement, exposed through [`RngOracle`] so generation stays reproducible
//! for a given seed.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};
