//! Move resolution.
//!
//! The [`GameEngine`] is the authoritative reducer for [`Session`]. Every
//! move goes through `pre_validate` then `apply`; a move that fails
//! validation is reported as [`MoveOutcome::Ignored`] and leaves the session
//! exactly as it was.

use crate::action::{Direction, MoveAction, MoveRejection};
use crate::config::GameConfig;
use crate::perception::Perception;
use crate::state::{Hazard, Position, Session};

/// Trigger emitted on the `playing -> won` transition.
///
/// Terminal states are absorbing, so a session produces at most one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardWon {
    pub reward_uri: String,
}

impl RewardWon {
    pub fn new(reward_uri: impl Into<String>) -> Self {
        Self {
            reward_uri: reward_uri.into(),
        }
    }
}

/// Result of submitting one move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// Move rejected; the session is unchanged.
    Ignored(MoveRejection),

    /// Player stepped onto an empty cell and is still playing.
    Moved {
        from: Position,
        to: Position,
        perception: Perception,
    },

    /// Player stepped onto a hazard. The hazard stays on the board.
    Died {
        from: Position,
        at: Position,
        hazard: Hazard,
    },

    /// Player stepped onto the gold.
    Won {
        from: Position,
        at: Position,
        reward: RewardWon,
    },
}

impl MoveOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, MoveOutcome::Ignored(_))
    }

    /// The reward-won trigger, present only on the winning move.
    pub fn reward(&self) -> Option<&RewardWon> {
        match self {
            MoveOutcome::Won { reward, .. } => Some(reward),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Died { .. } | MoveOutcome::Won { .. })
    }
}

/// Game engine that resolves moves against a borrowed session.
pub struct GameEngine<'a> {
    session: &'a mut Session,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given session.
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Executes a move through the validation and resolution phases.
    pub fn execute(&mut self, config: &GameConfig, action: MoveAction) -> MoveOutcome {
        match action.pre_validate(self.session) {
            Ok(destination) => action.apply(self.session, destination, config),
            Err(rejection) => MoveOutcome::Ignored(rejection),
        }
    }
}

/// Pure form of [`GameEngine::execute`]: returns the next session instead of
/// mutating the given one.
pub fn resolve_move(
    session: &Session,
    config: &GameConfig,
    direction: Direction,
) -> (Session, MoveOutcome) {
    let mut next = session.clone();
    let outcome = GameEngine::new(&mut next).execute(config, MoveAction::new(direction));
    (next, outcome)
}
