//! Reward minting worker.
//!
//! Turns the engine's reward-won trigger into a mint on the reward chain.
//! Each mint runs as its own task so the move that won the game returns
//! immediately; the result only ever shows up as a log line and an event.

use std::sync::Arc;

use client_blockchain_core::{AccountAddress, RewardChain, RewardUri};
use game_core::RewardWon;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::events::{EventBus, RewardEvent};

/// Dispatches fire-and-forget mints for one owning account.
pub(crate) struct RewardDispatcher {
    chain: Arc<dyn RewardChain>,
    owner: AccountAddress,
    event_bus: EventBus,
}

impl RewardDispatcher {
    pub(crate) fn new(chain: Arc<dyn RewardChain>, owner: AccountAddress, event_bus: EventBus) -> Self {
        Self {
            chain,
            owner,
            event_bus,
        }
    }

    pub(crate) fn owner(&self) -> &AccountAddress {
        &self.owner
    }

    pub(crate) fn chain(&self) -> &dyn RewardChain {
        self.chain.as_ref()
    }

    /// Spawns the mint for `reward` and returns without waiting for it.
    ///
    /// Returns `None` when called outside a tokio runtime; the reward is then
    /// dropped with a warning.
    pub(crate) fn dispatch(&self, reward: &RewardWon) -> Option<JoinHandle<()>> {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(uri = %reward.reward_uri, "no async runtime available, reward not minted");
            return None;
        };

        let chain = Arc::clone(&self.chain);
        let owner = self.owner.clone();
        let uri = RewardUri::new(reward.reward_uri.clone());
        let event_bus = self.event_bus.clone();

        Some(handle.spawn(async move {
            match chain.mint(&owner, &uri).await {
                Ok(receipt) => {
                    info!(
                        %owner,
                        %uri,
                        token = %receipt.token_id,
                        tx = %receipt.transaction_id,
                        backend = chain.name(),
                        "reward minted"
                    );
                    event_bus.publish(RewardEvent::Minted { receipt });
                }
                Err(error) => {
                    warn!(%owner, %uri, %error, "minting failed");
                    event_bus.publish(RewardEvent::MintFailed {
                        owner,
                        uri,
                        error: error.to_string(),
                    });
                }
            }
        }))
    }
}
