//! High-level runtime orchestrator.
//!
//! The runtime owns the live session, resolves moves through the engine,
//! publishes what happened on the event bus, and hands reward-won triggers to
//! the reward worker. It exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use client_blockchain_core::{AccountAddress, RewardChain, RewardUri};
use game_core::{Direction, GameEngine, MoveAction, MoveOutcome, PcgRng, Session, compute_seed};

use crate::api::{CommandProvider, PlayerCommand, Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, GameStateEvent, RewardEvent, Topic};
use crate::workers::RewardDispatcher;

/// Seed-mixing context for games after the first when a fixed seed is set.
const NEW_GAME_CONTEXT: u32 = 0x4E45_5747;

/// Main runtime that orchestrates a Wumpus session.
pub struct Runtime {
    config: RuntimeConfig,
    session: Session,
    /// Seed of the current board; `None` for an injected session.
    seed: Option<u64>,
    games: u64,
    event_bus: EventBus,
    rewards: Option<RewardDispatcher>,
    pending_mints: Vec<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Seed the current board was generated from.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of games started so far, including the current one.
    pub fn games_played(&self) -> u64 {
        self.games
    }

    /// Account that receives rewards, when a reward chain is attached.
    pub fn account(&self) -> Option<&AccountAddress> {
        self.rewards.as_ref().map(RewardDispatcher::owner)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Discards the current session and starts on a freshly generated board.
    ///
    /// Rewards already collected are unaffected.
    pub fn new_game(&mut self) -> &Session {
        let seed = next_seed(self.config.seed, self.games);
        self.session = Session::generate(seed, &PcgRng);
        self.seed = Some(seed);
        self.announce_game();
        &self.session
    }

    /// Resolves one move against the current session.
    ///
    /// Never waits on the reward chain: a winning move spawns the mint and
    /// returns straight away.
    pub fn submit_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = GameEngine::new(&mut self.session)
            .execute(&self.config.game_config, MoveAction::new(direction));

        match &outcome {
            MoveOutcome::Ignored(rejection) => debug!(%direction, %rejection, "move ignored"),
            MoveOutcome::Moved { from, to, perception } => {
                debug!(%direction, %from, %to, %perception, "player moved")
            }
            MoveOutcome::Died { at, hazard, .. } => info!(%at, %hazard, "player died"),
            MoveOutcome::Won { at, reward, .. } => {
                info!(%at, uri = %reward.reward_uri, "gold found")
            }
        }

        self.event_bus.publish(GameStateEvent::MoveResolved {
            direction,
            outcome: outcome.clone(),
            status: self.session.status(),
            hint: self.session.hint(),
        });

        if let Some(reward) = outcome.reward() {
            self.event_bus.publish(RewardEvent::Won {
                reward: reward.clone(),
            });
            self.pending_mints.retain(|mint| !mint.is_finished());
            if let Some(mint) = self.rewards.as_ref().and_then(|r| r.dispatch(reward)) {
                self.pending_mints.push(mint);
            }
        }

        outcome
    }

    /// Rewards minted to the owning account, in ownership order.
    ///
    /// Empty when no reward chain is attached.
    pub async fn collected_rewards(&self) -> Result<Vec<RewardUri>> {
        match &self.rewards {
            Some(rewards) => Ok(rewards.chain().collected_rewards(rewards.owner()).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Execute a single command from `provider`.
    ///
    /// Returns `false` once the provider asks to quit.
    pub async fn step(&mut self, provider: &dyn CommandProvider) -> Result<bool> {
        match provider.next_command(&self.session).await? {
            PlayerCommand::Move(direction) => {
                self.submit_move(direction);
            }
            PlayerCommand::NewGame => {
                self.new_game();
            }
            PlayerCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Run the command loop until the provider quits
    pub async fn run(&mut self, provider: &dyn CommandProvider) -> Result<()> {
        while self.step(provider).await? {}
        Ok(())
    }

    /// Shutdown the runtime gracefully, waiting for in-flight mints
    pub async fn shutdown(self) -> Result<()> {
        for mint in self.pending_mints {
            mint.await.map_err(RuntimeError::WorkerJoin)?;
        }
        Ok(())
    }

    fn announce_game(&mut self) {
        self.games += 1;

        info!(
            game = self.games,
            seed = ?self.seed,
            player = %self.session.player(),
            "new game started"
        );

        self.event_bus.publish(GameStateEvent::GameStarted {
            game: self.games,
            seed: self.seed,
            player: self.session.player(),
            hint: self.session.hint(),
        });
    }
}

/// Seed for the game after `games` games: the fixed seed first, then values
/// mixed from it; a random seed per game when none is fixed.
fn next_seed(fixed: Option<u64>, games: u64) -> u64 {
    match fixed {
        Some(base) if games == 0 => base,
        Some(base) => compute_seed(base, games, NEW_GAME_CONTEXT),
        None => rand::random(),
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    session: Option<Session>,
    chain: Option<Arc<dyn RewardChain>>,
    event_bus: Option<EventBus>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            session: None,
            chain: None,
            event_bus: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start on a prepared session instead of a generated one
    pub fn initial_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Attach the reward chain that receives mints (optional)
    pub fn reward_chain(mut self, chain: Arc<dyn RewardChain>) -> Self {
        self.chain = Some(chain);
        self
    }

    /// Publish on an existing bus (optional)
    ///
    /// Subscribers attached to `bus` beforehand also see the first
    /// `GameStarted`, which `build` publishes.
    pub fn event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Resolve the owning account and start the first game.
    ///
    /// Fails only when a reward chain is attached and no owner can be found.
    pub async fn build(self) -> Result<Runtime> {
        let event_bus = self
            .event_bus
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));

        let rewards = match self.chain {
            Some(chain) => {
                let owner = match &self.config.account {
                    Some(account) => account.clone(),
                    None => chain.primary_account().await?,
                };
                info!(
                    %owner,
                    backend = chain.name(),
                    network = chain.network(),
                    "reward chain connected"
                );
                Some(RewardDispatcher::new(chain, owner, event_bus.clone()))
            }
            None => None,
        };

        let (session, seed) = match self.session {
            Some(session) => (session, None),
            None => {
                let seed = next_seed(self.config.seed, 0);
                (Session::generate(seed, &PcgRng), Some(seed))
            }
        };

        let mut runtime = Runtime {
            config: self.config,
            session,
            seed,
            games: 0,
            event_bus,
            rewards,
            pending_mints: Vec::new(),
        };
        runtime.announce_game();

        Ok(runtime)
    }
}
