//! Asynchronous abstraction for sourcing player commands.
//!
//! Runtime users plug in [`CommandProvider`] implementations so a session can
//! be driven by a terminal, a UI, or scripted fixtures.
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use game_core::{Direction, Session};
use serde::{Deserialize, Serialize};

use super::errors::Result;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCommand {
    Move(Direction),
    NewGame,
    Quit,
}

/// Trait for providing the next player command.
///
/// Implementations receive a read-only view of the session so they can show
/// it before asking for input.
#[async_trait]
pub trait CommandProvider: Send + Sync {
    async fn next_command(&self, session: &Session) -> Result<PlayerCommand>;
}

/// Replays a fixed list of commands, then quits.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    commands: Mutex<VecDeque<PlayerCommand>>,
}

impl ScriptedProvider {
    pub fn new(commands: impl IntoIterator<Item = PlayerCommand>) -> Self {
        Self {
            commands: Mutex::new(commands.into_iter().collect()),
        }
    }

    /// Convenience for a script made only of moves.
    pub fn moves(directions: impl IntoIterator<Item = Direction>) -> Self {
        Self::new(directions.into_iter().map(PlayerCommand::Move))
    }

    pub fn remaining(&self) -> usize {
        self.commands
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl CommandProvider for ScriptedProvider {
    async fn next_command(&self, _session: &Session) -> Result<PlayerCommand> {
        let next = self
            .commands
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front();
        Ok(next.unwrap_or(PlayerCommand::Quit))
    }
}
