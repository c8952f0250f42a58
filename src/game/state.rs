//! Match states and input events

use crate::core::types::CharacterId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen the match is on. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MatchState {
    /// Choosing the player's fighter
    #[default]
    SelectingPlayer,
    /// Choosing the next opponent from the pool
    SelectingOpponent,
    /// Trading blows with the active opponent
    Fighting,
    /// Every opponent defeated
    Won,
    /// Player defeated
    Lost,
}

impl MatchState {
    /// Won and Lost are only left through replay
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchState::Won | MatchState::Lost)
    }

    /// Does this state accept character picks?
    pub fn is_selecting(&self) -> bool {
        matches!(self, MatchState::SelectingPlayer | MatchState::SelectingOpponent)
    }

    /// Screen title
    pub fn headline(&self) -> &'static str {
        match self {
            MatchState::SelectingPlayer => "Pick Your Jedi",
            MatchState::SelectingOpponent => "Pick your enemy",
            MatchState::Fighting => "Versus",
            MatchState::Won => "You Win, Replay?",
            MatchState::Lost => "You Lose, Replay?",
        }
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Everything the input layer may send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Pick a fighter; player or opponent depending on the current state
    SelectCharacter(CharacterId),
    Fight,
    Replay,
}
