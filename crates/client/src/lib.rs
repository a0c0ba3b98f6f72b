//! Terminal client for the Wumpus game.
//!
//! The binary is the composition root: it reads configuration, installs file
//! logging, attaches the reward chain, and hands a [`TerminalProvider`] to the
//! runtime's command loop.

pub mod config;
pub mod input;
pub mod logging;
pub mod view;

pub use config::ClientConfig;
pub use input::{RewardView, TerminalProvider, parse_command};
pub use view::{glyph, render_board, render_screen};
