//! Reward-chain abstraction traits.
//!
//! This module defines a layered abstraction:
//! - Layer 1: WalletProvider, RewardMinter, RewardLedger (game domain)
//! - Layer 2: RewardChain (composite trait)

use async_trait::async_trait;

use crate::types::{AccountAddress, MintReceipt, RewardUri, TokenId};

// ============================================================================
// Error Types
// ============================================================================

/// Transport layer errors.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

/// Wallet access errors.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Wallet exposes no accounts")]
    NoAccounts,

    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),
}

/// Reward minting errors.
#[derive(Debug, thiserror::Error)]
pub enum MintError {
    #[error("Reward URI must not be empty")]
    EmptyUri,

    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),
}

/// Reward enumeration errors.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Token not found: {0}")]
    TokenNotFound(TokenId),

    #[error("Index {index} out of range for owner {owner} (balance {balance})")]
    IndexOutOfRange {
        owner: AccountAddress,
        index: u64,
        balance: u64,
    },

    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),
}

// ============================================================================
// Layer 1: Game Domain Traits
// ============================================================================

/// Access to the player's accounts.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request the accounts the wallet exposes.
    async fn accounts(&self) -> Result<Vec<AccountAddress>, WalletError>;

    /// The account rewards are minted to: the wallet's first account.
    async fn primary_account(&self) -> Result<AccountAddress, WalletError> {
        self.accounts()
            .await?
            .into_iter()
            .next()
            .ok_or(WalletError::NoAccounts)
    }
}

/// Reward token minting.
#[async_trait]
pub trait RewardMinter: Send + Sync {
    /// Mint one reward token with `uri` to `owner`.
    async fn mint(&self, owner: &AccountAddress, uri: &RewardUri)
    -> Result<MintReceipt, MintError>;
}

/// Read access to minted reward tokens.
#[async_trait]
pub trait RewardLedger: Send + Sync {
    /// Total number of reward tokens minted so far.
    async fn total_supply(&self) -> Result<u64, LedgerError>;

    /// Number of tokens held by `owner`.
    async fn balance_of(&self, owner: &AccountAddress) -> Result<u64, LedgerError>;

    /// The `index`-th token held by `owner`.
    async fn token_of_owner_by_index(
        &self,
        owner: &AccountAddress,
        index: u64,
    ) -> Result<TokenId, LedgerError>;

    /// URI stored on `token`.
    async fn token_uri(&self, token: TokenId) -> Result<RewardUri, LedgerError>;

    /// URIs of every token held by `owner`, in ownership order.
    async fn collected_rewards(&self, owner: &AccountAddress) -> Result<Vec<RewardUri>, LedgerError> {
        let balance = self.balance_of(owner).await?;
        let mut uris = Vec::with_capacity(balance as usize);
        for index in 0..balance {
            let token = self.token_of_owner_by_index(owner, index).await?;
            uris.push(self.token_uri(token).await?);
        }
        Ok(uris)
    }
}

// ============================================================================
// Layer 2: Composite Trait
// ============================================================================

/// Everything the game needs from a reward chain.
pub trait RewardChain: WalletProvider + RewardMinter + RewardLedger + Send + Sync {
    /// Backend name (e.g., "InMemory", "Ethereum").
    fn name(&self) -> &str;

    /// Network name (e.g., "mainnet", "testnet", "local").
    fn network(&self) -> &str;
}
