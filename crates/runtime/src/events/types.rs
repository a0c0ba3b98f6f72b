//! Event types for different topics.

use client_blockchain_core::{AccountAddress, MintReceipt, RewardUri};
use game_core::{Direction, GameStatus, Hint, MoveOutcome, Position, RewardWon};
use serde::{Deserialize, Serialize};

/// Events related to the session (game starts and moves)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// A new board was generated and play (re)started
    GameStarted {
        /// 1-based count of games played by this runtime
        game: u64,
        /// `None` when the runtime was handed a prepared session
        seed: Option<u64>,
        player: Position,
        hint: Hint,
    },

    /// A move was submitted and resolved, including ignored moves
    MoveResolved {
        direction: Direction,
        outcome: MoveOutcome,
        status: GameStatus,
        hint: Hint,
    },
}

/// Events related to the reward collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardEvent {
    /// The engine emitted the reward-won trigger
    Won { reward: RewardWon },

    /// The mint transaction was accepted
    Minted { receipt: MintReceipt },

    /// The mint failed; play is unaffected
    MintFailed {
        owner: AccountAddress,
        uri: RewardUri,
        error: String,
    },
}
