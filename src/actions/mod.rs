//! Actions: the four kinds of move a player can make.
//!
//! ## Action
//!
//! A closed sum over the turn phases. Each variant is legal only in its own
//! phase; [`Action::phase`] says which. Actions are immutable values with
//! structural equality, so legal-move sets can be compared and hashed.
//!
//! ## ActionRecord
//!
//! Entry in the game's history: who acted, what they did, and for random
//! die rolls the face that came up.

pub mod agent_move;
pub mod card_action;
pub mod die_roll;
pub mod safe_move;

pub use agent_move::{weak_compositions, AgentMoveAction, Composition};
pub use card_action::CardAction;
pub use die_roll::DieRollAction;
pub use safe_move::SafeMoveAction;

use serde::{Deserialize, Serialize};

use crate::board::{Board, DieFace};
use crate::cards::Card;
use crate::core::{Agent, GameRng, Phase, PlayerId};
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    DieRoll(DieRollAction),
    AgentMove(AgentMoveAction),
    Card(CardAction),
    SafeMove(SafeMoveAction),
}

impl Action {
    // === Constructors ===

    #[must_use]
    pub fn random_roll() -> Self {
        Action::DieRoll(DieRollAction::Random)
    }

    #[must_use]
    pub fn custom_roll(face: DieFace) -> Self {
        Action::DieRoll(DieRollAction::Custom(face))
    }

    pub fn move_agents(moves: impl IntoIterator<Item = (Agent, u8)>) -> Self {
        Action::AgentMove(AgentMoveAction::new(moves))
    }

    #[must_use]
    pub fn no_move() -> Self {
        Action::AgentMove(AgentMoveAction::no_move())
    }

    pub fn play_card(card: Card, agents: impl IntoIterator<Item = Agent>, number: i32) -> Self {
        Action::Card(CardAction::play(card, agents, number))
    }

    #[must_use]
    pub fn skip_card() -> Self {
        Action::Card(CardAction::skip())
    }

    #[must_use]
    pub fn move_safe(field: u8) -> Self {
        Action::SafeMove(SafeMoveAction::new(field))
    }

    // === Queries ===

    /// The phase in which this action may be taken.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Action::DieRoll(_) => Phase::DieRoll,
            Action::AgentMove(_) => Phase::AgentMove,
            Action::Card(_) => Phase::CardPlay,
            Action::SafeMove(_) => Phase::SafeMove,
        }
    }

    /// Apply the board effect. Returns the face for die rolls.
    pub fn apply(&self, board: &mut Board, rng: &mut GameRng) -> Result<Option<DieFace>> {
        match self {
            Action::DieRoll(roll) => Ok(Some(roll.apply(board, rng))),
            Action::AgentMove(m) => m.apply(board).map(|()| None),
            Action::Card(c) => c.apply(board).map(|()| None),
            Action::SafeMove(s) => s.apply(board).map(|()| None),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::DieRoll(a) => std::fmt::Display::fmt(a, f),
            Action::AgentMove(a) => std::fmt::Display::fmt(a, f),
            Action::Card(a) => std::fmt::Display::fmt(a, f),
            Action::SafeMove(a) => std::fmt::Display::fmt(a, f),
        }
    }
}

/// One entry in the action history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number (0-based) when the action was taken.
    pub turn: u32,

    /// Face shown, for die rolls.
    pub rolled: Option<DieFace>,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, rolled: Option<DieFace>) -> Self {
        Self {
            player,
            action,
            turn,
            rolled,
        }
    }
}
