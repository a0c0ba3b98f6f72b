//! Wumpus game client binary.
//!
//! Composition root: loads `.env`, sets up file logging, connects the reward
//! chain, builds the runtime, and runs the terminal command loop until the
//! player quits.

use std::sync::Arc;

use anyhow::{Context, Result};
use client_blockchain_core::{InMemoryRewardChain, RewardChain};
use runtime::{EventBus, Runtime, RuntimeConfig};
use wumpus_client::logging::{setup_logging, spawn_event_logger};
use wumpus_client::{ClientConfig, RewardView, TerminalProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let client_config = ClientConfig::from_env();
    let log_file = setup_logging(&client_config)?;

    let runtime_config = RuntimeConfig::from_env();
    let chain: Arc<dyn RewardChain> = Arc::new(InMemoryRewardChain::new());

    // Subscribe before `build` so the first game start is logged too.
    let event_bus = EventBus::with_capacity(runtime_config.event_buffer_size);
    let _event_logger = spawn_event_logger(&event_bus);

    let mut runtime = Runtime::builder()
        .config(runtime_config)
        .event_bus(event_bus)
        .reward_chain(Arc::clone(&chain))
        .build()
        .await
        .context("failed to start the game runtime")?;

    let rewards = runtime
        .account()
        .cloned()
        .map(|owner| RewardView::new(Arc::clone(&chain), owner));
    let provider = TerminalProvider::stdio(rewards);

    println!("Wumpus World (log: {})", log_file.display());
    runtime.run(&provider).await?;
    runtime.shutdown().await?;

    tracing::info!("client exited");
    Ok(())
}
