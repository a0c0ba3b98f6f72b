//! End-to-end sessions driven through the runtime with an in-memory reward chain.

use std::sync::Arc;
use std::time::Duration;

use client_blockchain_core::{InMemoryRewardChain, RewardLedger, RewardUri};
use game_core::{
    Direction, GameStatus, Hazard, Hint, MoveOutcome, MoveRejection, Perception, Placements,
    Position, Session,
};
use runtime::{
    Event, GameStateEvent, PlayerCommand, RewardEvent, Runtime, RuntimeConfig, ScriptedProvider,
    Topic,
};
use tokio::sync::broadcast;

/// Player (0,0), pit (0,1), wumpus (3,3), gold (2,2).
fn scenario() -> Session {
    let pos = |row, col| Position::new(row, col).unwrap();
    Session::from_placements(&Placements {
        player: pos(0, 0),
        pit: pos(0, 1),
        wumpus: pos(3, 3),
        gold: pos(2, 2),
    })
    .unwrap()
}

const TO_GOLD: [Direction; 4] = [
    Direction::Down,
    Direction::Down,
    Direction::Right,
    Direction::Right,
];

async fn runtime_with(chain: &InMemoryRewardChain) -> Runtime {
    Runtime::builder()
        .initial_session(scenario())
        .reward_chain(Arc::new(chain.clone()))
        .build()
        .await
        .expect("runtime should build")
}

async fn next_reward(rx: &mut broadcast::Receiver<Event>) -> RewardEvent {
    loop {
        match rx.recv().await.expect("reward topic open") {
            Event::Reward(RewardEvent::Won { .. }) => continue,
            Event::Reward(event) => return event,
            other => panic!("unexpected event on reward topic: {other:?}"),
        }
    }
}

#[tokio::test]
async fn finding_gold_mints_one_reward() {
    let chain = InMemoryRewardChain::new();
    let mut runtime = runtime_with(&chain).await;
    let mut rewards = runtime.subscribe(Topic::Reward);

    let outcomes: Vec<_> = TO_GOLD.iter().map(|&d| runtime.submit_move(d)).collect();

    assert!(matches!(outcomes[0], MoveOutcome::Moved { perception: Perception::Calm, .. }));
    let reward = outcomes[3].reward().expect("winning move carries the reward");
    assert_eq!(reward.reward_uri, "/images/gold.png");
    assert_eq!(runtime.session().status(), GameStatus::Won);
    assert_eq!(runtime.session().hint(), Hint::FoundGold);

    assert_eq!(
        rewards.recv().await.unwrap(),
        Event::Reward(RewardEvent::Won { reward: reward.clone() })
    );
    match next_reward(&mut rewards).await {
        RewardEvent::Minted { receipt } => {
            assert_eq!(receipt.uri, RewardUri::new("/images/gold.png"));
            assert_eq!(Some(&receipt.owner), runtime.account());
        }
        other => panic!("expected a mint, got {other:?}"),
    }

    assert_eq!(
        runtime.collected_rewards().await.unwrap(),
        vec![RewardUri::new("/images/gold.png")]
    );

    // Terminal states absorb further input, so no second reward.
    assert!(matches!(
        runtime.submit_move(Direction::Left),
        MoveOutcome::Ignored(MoveRejection::GameOver { status: GameStatus::Won })
    ));
    runtime.shutdown().await.unwrap();
    assert_eq!(chain.total_supply().await.unwrap(), 1);
}

#[tokio::test]
async fn failed_mint_does_not_affect_play() {
    let chain = InMemoryRewardChain::new();
    chain.set_failing(true);
    let mut runtime = runtime_with(&chain).await;
    let mut rewards = runtime.subscribe(Topic::Reward);

    for direction in TO_GOLD {
        runtime.submit_move(direction);
    }
    assert_eq!(runtime.session().status(), GameStatus::Won);

    match next_reward(&mut rewards).await {
        RewardEvent::MintFailed { uri, error, .. } => {
            assert_eq!(uri.as_str(), "/images/gold.png");
            assert!(error.contains("mint reverted"));
        }
        other => panic!("expected a failure, got {other:?}"),
    }
    assert!(runtime.collected_rewards().await.unwrap().is_empty());

    runtime.new_game();
    assert_eq!(runtime.session().status(), GameStatus::Playing);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn winning_move_does_not_wait_for_the_chain() {
    let chain = InMemoryRewardChain::new().with_latency(Duration::from_secs(30));
    let mut runtime = runtime_with(&chain).await;
    let mut rewards = runtime.subscribe(Topic::Reward);

    for direction in TO_GOLD {
        runtime.submit_move(direction);
    }
    assert_eq!(runtime.session().status(), GameStatus::Won);
    assert!(runtime.collected_rewards().await.unwrap().is_empty());

    runtime.new_game();
    assert_eq!(runtime.session().status(), GameStatus::Playing);

    assert!(matches!(
        next_reward(&mut rewards).await,
        RewardEvent::Minted { .. }
    ));
    assert_eq!(runtime.collected_rewards().await.unwrap().len(), 1);
}

#[tokio::test]
async fn walking_into_the_pit_ends_the_game() {
    let chain = InMemoryRewardChain::new();
    let mut runtime = runtime_with(&chain).await;
    let mut states = runtime.subscribe(Topic::GameState);

    let outcome = runtime.submit_move(Direction::Right);

    assert!(matches!(outcome, MoveOutcome::Died { hazard: Hazard::Pit, .. }));
    assert_eq!(runtime.session().hint(), Hint::TerribleFate);
    assert_eq!(
        states.recv().await.unwrap(),
        Event::GameState(GameStateEvent::MoveResolved {
            direction: Direction::Right,
            outcome,
            status: GameStatus::Dead,
            hint: Hint::TerribleFate,
        })
    );

    assert!(runtime.submit_move(Direction::Down).is_ignored());
    runtime.shutdown().await.unwrap();
    assert_eq!(chain.total_supply().await.unwrap(), 0);
}

#[tokio::test]
async fn scripted_session_runs_to_quit() {
    let chain = InMemoryRewardChain::new();
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig::default().with_seed(11))
        .initial_session(scenario())
        .reward_chain(Arc::new(chain.clone()))
        .build()
        .await
        .unwrap();
    let mut states = runtime.subscribe(Topic::GameState);

    let provider = ScriptedProvider::new(
        TO_GOLD
            .into_iter()
            .map(PlayerCommand::Move)
            .chain([PlayerCommand::NewGame, PlayerCommand::Quit, PlayerCommand::NewGame]),
    );
    runtime.run(&provider).await.unwrap();

    assert_eq!(provider.remaining(), 1);
    assert_eq!(runtime.games_played(), 2);
    assert_eq!(runtime.session().status(), GameStatus::Playing);

    let mut resolved = 0;
    let mut started = None;
    while let Ok(event) = states.try_recv() {
        match event {
            Event::GameState(GameStateEvent::MoveResolved { .. }) => resolved += 1,
            Event::GameState(GameStateEvent::GameStarted { game, seed, .. }) => {
                started = Some((game, seed))
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
    assert_eq!(resolved, 4);
    assert_eq!(started, Some((2, runtime.seed())));

    runtime.shutdown().await.unwrap();
    assert_eq!(chain.total_supply().await.unwrap(), 1);
}

#[tokio::test]
async fn events_serialize_to_json() {
    let mut runtime = Runtime::builder()
        .initial_session(scenario())
        .build()
        .await
        .unwrap();
    let mut states = runtime.subscribe(Topic::GameState);

    runtime.submit_move(Direction::Down);

    let event = states.recv().await.unwrap();
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("MoveResolved"));
    assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), event);
}
