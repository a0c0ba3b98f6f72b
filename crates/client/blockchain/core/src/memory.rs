//! Process-local reward chain.
//!
//! Keeps minted tokens in memory. Used as the default backend of the client
//! and as the collaborator in tests; it can be told to fail or to answer
//! slowly so callers can exercise their error and latency paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::{
    LedgerError, MintError, RewardChain, RewardLedger, RewardMinter, TransportError, WalletError,
    WalletProvider,
};
use crate::types::{AccountAddress, MintReceipt, RewardUri, TokenId, TransactionId};

#[derive(Debug, Default)]
struct Ledger {
    /// Token id is the index; entries are never removed.
    tokens: Vec<(AccountAddress, RewardUri)>,
    transactions: u64,
}

/// In-memory reward chain.
#[derive(Clone, Debug)]
pub struct InMemoryRewardChain {
    accounts: Vec<AccountAddress>,
    ledger: Arc<Mutex<Ledger>>,
    failing: Arc<AtomicBool>,
    latency: Option<Duration>,
}

impl InMemoryRewardChain {
    pub const DEFAULT_ACCOUNT: &'static str = "0x0000000000000000000000000000000000000001";

    pub fn new() -> Self {
        Self::with_accounts(vec![AccountAddress::new(Self::DEFAULT_ACCOUNT)])
    }

    pub fn with_accounts(accounts: Vec<AccountAddress>) -> Self {
        Self {
            accounts,
            ledger: Arc::new(Mutex::new(Ledger::default())),
            failing: Arc::new(AtomicBool::new(false)),
            latency: None,
        }
    }

    /// Delay every mint by `latency` before it is recorded.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make subsequent mints fail with a transport error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryRewardChain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletProvider for InMemoryRewardChain {
    async fn accounts(&self) -> Result<Vec<AccountAddress>, WalletError> {
        Ok(self.accounts.clone())
    }
}

#[async_trait]
impl RewardMinter for InMemoryRewardChain {
    async fn mint(
        &self,
        owner: &AccountAddress,
        uri: &RewardUri,
    ) -> Result<MintReceipt, MintError> {
        if uri.as_str().is_empty() {
            return Err(MintError::EmptyUri);
        }
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(TransportError::TransactionFailed("mint reverted".to_owned()).into());
        }

        let mut ledger = self.ledger();
        ledger.transactions += 1;
        let token_id = TokenId(ledger.tokens.len() as u64);
        ledger.tokens.push((owner.clone(), uri.clone()));

        tracing::debug!(%owner, %uri, %token_id, "reward minted");

        Ok(MintReceipt {
            transaction_id: TransactionId::from_bytes(ledger.transactions.to_be_bytes().to_vec()),
            token_id,
            owner: owner.clone(),
            uri: uri.clone(),
        })
    }
}

#[async_trait]
impl RewardLedger for InMemoryRewardChain {
    async fn total_supply(&self) -> Result<u64, LedgerError> {
        Ok(self.ledger().tokens.len() as u64)
    }

    async fn balance_of(&self, owner: &AccountAddress) -> Result<u64, LedgerError> {
        let ledger = self.ledger();
        Ok(ledger.tokens.iter().filter(|(held_by, _)| held_by == owner).count() as u64)
    }

    async fn token_of_owner_by_index(
        &self,
        owner: &AccountAddress,
        index: u64,
    ) -> Result<TokenId, LedgerError> {
        let ledger = self.ledger();
        let mut owned = ledger
            .tokens
            .iter()
            .enumerate()
            .filter(|(_, (held_by, _))| held_by == owner);

        match owned.nth(index as usize) {
            Some((token, _)) => Ok(TokenId(token as u64)),
            None => {
                let balance = ledger
                    .tokens
                    .iter()
                    .filter(|(held_by, _)| held_by == owner)
                    .count() as u64;
                Err(LedgerError::IndexOutOfRange {
                    owner: owner.clone(),
                    index,
                    balance,
                })
            }
        }
    }

    async fn token_uri(&self, token: TokenId) -> Result<RewardUri, LedgerError> {
        self.ledger()
            .tokens
            .get(token.0 as usize)
            .map(|(_, uri)| uri.clone())
            .ok_or(LedgerError::TokenNotFound(token))
    }
}

impl RewardChain for InMemoryRewardChain {
    fn name(&self) -> &str {
        "InMemory"
    }

    fn network(&self) -> &str {
        "local"
    }
}
