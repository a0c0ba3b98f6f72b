//! Runtime orchestration for the Wumpus game.
//!
//! This crate owns the live [`game_core::Session`], routes player commands
//! into the pure engine, and hands the reward-won trigger to a reward chain
//! without ever waiting on it. Consumers embed [`Runtime`] to start games,
//! submit moves, and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`config`] reads runtime settings from the environment
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod config;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{CommandProvider, PlayerCommand, Result, RuntimeError, ScriptedProvider};
pub use config::RuntimeConfig;
pub use events::{Event, EventBus, GameStateEvent, RewardEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder};
