//! Line-based command input.
//!
//! Each prompt renders the visible board, then reads one line. Unknown input
//! is reported and the prompt repeats; end of input quits.

use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use client_blockchain_core::{AccountAddress, RewardChain};
use game_core::{Direction, Session};
use runtime::{CommandProvider, PlayerCommand, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex as AsyncMutex;

/// Maps one input line to a command.
///
/// Accepts `w/a/s/d`, direction names, `n`/`new` and `q`/`quit`, ignoring
/// case and surrounding whitespace.
pub fn parse_command(line: &str) -> Option<PlayerCommand> {
    let word = line.trim().to_ascii_lowercase();
    let command = match word.as_str() {
        "w" => PlayerCommand::Move(Direction::Up),
        "a" => PlayerCommand::Move(Direction::Left),
        "s" => PlayerCommand::Move(Direction::Down),
        "d" => PlayerCommand::Move(Direction::Right),
        "n" | "new" => PlayerCommand::NewGame,
        "q" | "quit" | "exit" => PlayerCommand::Quit,
        other => PlayerCommand::Move(Direction::from_str(other).ok()?),
    };
    Some(command)
}

/// Where the reward count shown on screen comes from.
#[derive(Clone)]
pub struct RewardView {
    chain: Arc<dyn RewardChain>,
    owner: AccountAddress,
}

impl RewardView {
    pub fn new(chain: Arc<dyn RewardChain>, owner: AccountAddress) -> Self {
        Self { chain, owner }
    }

    async fn collected(&self) -> Option<usize> {
        match self.chain.collected_rewards(&self.owner).await {
            Ok(rewards) => Some(rewards.len()),
            Err(error) => {
                tracing::warn!(owner = %self.owner, %error, "failed to enumerate rewards");
                None
            }
        }
    }
}

/// Command provider reading lines from `R` and drawing to `W`.
pub struct TerminalProvider<R, W> {
    lines: AsyncMutex<Lines<R>>,
    out: Mutex<W>,
    rewards: Option<RewardView>,
}

impl TerminalProvider<BufReader<Stdin>, std::io::Stdout> {
    pub fn stdio(rewards: Option<RewardView>) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), std::io::stdout(), rewards)
    }
}

impl<R, W> TerminalProvider<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(reader: R, out: W, rewards: Option<RewardView>) -> Self {
        Self {
            lines: AsyncMutex::new(reader.lines()),
            out: Mutex::new(out),
            rewards,
        }
    }

    /// Consumes the provider and returns everything written so far.
    pub fn into_output(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, text: &str) -> std::io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

#[async_trait]
impl<R, W> CommandProvider for TerminalProvider<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn next_command(&self, session: &Session) -> Result<PlayerCommand> {
        let (account, collected) = match &self.rewards {
            Some(view) => (Some(view.owner.as_str()), view.collected().await),
            None => (None, Some(0)),
        };
        let screen = crate::view::render_screen(session, account, collected);
        self.write(&format!("\n{screen}"))?;

        let mut lines = self.lines.lock().await;
        loop {
            let Some(line) = lines.next_line().await? else {
                return Ok(PlayerCommand::Quit);
            };
            if let Some(command) = parse_command(&line) {
                tracing::debug!(?command, "command received");
                return Ok(command);
            }
            if !line.trim().is_empty() {
                tracing::debug!(input = %line.trim(), "unrecognized command");
                self.write(&format!("unknown command {:?}\n", line.trim()))?;
            }
            self.write("> ")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_blockchain_core::{InMemoryRewardChain, RewardLedger, RewardMinter, RewardUri};
    use game_core::{Placements, Position};
    use runtime::Runtime;

    fn session() -> Session {
        let pos = |row, col| Position::new(row, col).unwrap();
        Session::from_placements(&Placements {
            player: pos(0, 0),
            pit: pos(0, 1),
            wumpus: pos(3, 3),
            gold: pos(2, 2),
        })
        .unwrap()
    }

    #[test]
    fn parses_keys_and_words() {
        assert_eq!(parse_command("w"), Some(PlayerCommand::Move(Direction::Up)));
        assert_eq!(parse_command(" D "), Some(PlayerCommand::Move(Direction::Right)));
        assert_eq!(parse_command("left"), Some(PlayerCommand::Move(Direction::Left)));
        assert_eq!(parse_command("Down"), Some(PlayerCommand::Move(Direction::Down)));
        assert_eq!(parse_command("new"), Some(PlayerCommand::NewGame));
        assert_eq!(parse_command("q"), Some(PlayerCommand::Quit));
        assert_eq!(parse_command("jump"), None);
        assert_eq!(parse_command(""), None);
    }

    #[tokio::test]
    async fn skips_unknown_lines() {
        let provider = TerminalProvider::new(&b"jump\n\ns\n"[..], Vec::new(), None);

        let command = provider.next_command(&session()).await.unwrap();

        assert_eq!(command, PlayerCommand::Move(Direction::Down));
        let output = String::from_utf8(provider.into_output()).unwrap();
        assert!(output.contains("unknown command \"jump\""));
        assert!(output.contains("P # # #"));
    }

    #[tokio::test]
    async fn end_of_input_quits() {
        let provider = TerminalProvider::new(&b""[..], Vec::new(), None);
        assert_eq!(
            provider.next_command(&session()).await.unwrap(),
            PlayerCommand::Quit
        );
    }

    #[tokio::test]
    async fn screen_counts_collected_rewards() {
        let chain = InMemoryRewardChain::new();
        let owner = AccountAddress::new(InMemoryRewardChain::DEFAULT_ACCOUNT);
        chain.mint(&owner, &RewardUri::new("/images/gold.png")).await.unwrap();

        let view = RewardView::new(Arc::new(chain), owner);
        let provider = TerminalProvider::new(&b"q\n"[..], Vec::new(), Some(view));
        provider.next_command(&session()).await.unwrap();

        let output = String::from_utf8(provider.into_output()).unwrap();
        assert!(output.contains(&format!("Account: {}", InMemoryRewardChain::DEFAULT_ACCOUNT)));
        assert!(output.contains("Gold collected: 1"));
    }

    #[tokio::test]
    async fn drives_a_runtime_to_the_gold() {
        let chain = Arc::new(InMemoryRewardChain::new());
        let mut runtime = Runtime::builder()
            .initial_session(session())
            .reward_chain(chain.clone())
            .build()
            .await
            .unwrap();
        let owner = runtime.account().cloned().unwrap();

        let provider = TerminalProvider::new(
            &b"s\ns\nd\nd\nq\n"[..],
            Vec::new(),
            Some(RewardView::new(chain.clone(), owner.clone())),
        );
        runtime.run(&provider).await.unwrap();
        runtime.shutdown().await.unwrap();

        assert_eq!(chain.collected_rewards(&owner).await.unwrap().len(), 1);
        let output = String::from_utf8(provider.into_output()).unwrap();
        assert!(output.contains("You found the gold! You win!"));
    }
}
