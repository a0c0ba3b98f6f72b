//! Reward-chain abstraction layer for the Wumpus game.
//!
//! The game engine only signals that a reward was won. Everything that
//! happens afterwards (finding the player's account, minting the reward
//! token, listing the rewards already collected) lives behind the traits in
//! this crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: RewardChain (composite trait)
//!          ├── WalletProvider
//!          ├── RewardMinter
//!          └── RewardLedger
//!
//! Layer 1: Domain traits (accounts, mints, owned tokens)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_core::{RewardChain, RewardUri};
//!
//! async fn claim(chain: &dyn RewardChain) {
//!     let owner = chain.primary_account().await?;
//!     chain.mint(&owner, &RewardUri::new("/images/gold.png")).await?;
//!     let collected = chain.collected_rewards(&owner).await?;
//! }
//! ```

pub mod memory;
pub mod traits;
pub mod types;

pub use memory::InMemoryRewardChain;
pub use traits::{
    LedgerError, MintError, RewardChain, RewardLedger, RewardMinter, TransportError, WalletError,
    WalletProvider,
};
pub use types::{AccountAddress, MintReceipt, RewardUri, TokenId, TransactionId};
