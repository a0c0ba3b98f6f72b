//! Runtime configuration structures and loaders.
use std::env;

use client_blockchain_core::AccountAddress;
use game_core::GameConfig;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed of the first game. Later games derive theirs from it; without one
    /// every game draws a fresh seed.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    /// Account that receives reward tokens. Falls back to the wallet's first
    /// account.
    pub account: Option<AccountAddress>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: None,
            event_buffer_size: 100,
            account: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `WUMPUS_SEED`
    /// - `WUMPUS_REWARD_URI`
    /// - `WUMPUS_EVENT_BUFFER`
    /// - `WUMPUS_ACCOUNT`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("WUMPUS_SEED") {
            config.seed = Some(seed);
        }

        if let Some(uri) = read_env::<String>("WUMPUS_REWARD_URI").filter(|uri| !uri.is_empty()) {
            config.game_config = GameConfig::with_reward_uri(uri);
        }

        if let Some(capacity) = read_env::<usize>("WUMPUS_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        if let Some(account) = read_env::<String>("WUMPUS_ACCOUNT").filter(|a| !a.is_empty()) {
            config.account = Some(AccountAddress::new(account));
        }

        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_account(mut self, account: AccountAddress) -> Self {
        self.account = Some(account);
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.game_config.reward_uri, GameConfig::DEFAULT_REWARD_URI);
        assert_eq!(config.event_buffer_size, 100);
        assert!(config.seed.is_none());
        assert!(config.account.is_none());
    }

    #[test]
    fn builders_override_fields() {
        let config = RuntimeConfig::default()
            .with_seed(42)
            .with_account(AccountAddress::new("0xabc"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.account, Some(AccountAddress::new("0xabc")));
    }
}
