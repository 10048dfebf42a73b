//! Error type shared by the whole engine.
//!
//! Every failure belongs to one of three classes, exposed through
//! [`HeimlichError::kind`]:
//!
//! - **Invalid argument**: malformed construction input (player counts, field
//!   indices, stack sizes, agents that are not in play).
//! - **Illegal move**: an action or card play that breaks the rules.
//! - **Illegal state**: an operation attempted in the wrong phase or situation.

use thiserror::Error;

use crate::core::{Agent, Phase, PlayerId};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeimlichError>;

/// Coarse classification of a [`HeimlichError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    IllegalMove,
    IllegalState,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HeimlichError {
    #[error("player count must be between 2 and 7, got {0}")]
    InvalidPlayerCount(usize),

    #[error("agent count must be between 5 and 7, got {0}")]
    InvalidAgentCount(usize),

    #[error("field index {0} is outside the board (0..=11)")]
    InvalidField(i64),

    #[error("agent {0} is not in play")]
    AgentNotInPlay(Agent),

    #[error("agent positions and scores must cover the same agents")]
    MismatchedAgents,

    #[error("card stack size must be between 0 and {max}, got {requested}")]
    InvalidStackSize { requested: usize, max: usize },

    #[error("{0} is not part of this game or its agent is hidden")]
    UnknownPlayer(PlayerId),

    #[error("card family does not support type {0}")]
    InvalidCardType(u8),

    #[error("invalid agent assignment: {0}")]
    InvalidAssignment(&'static str),

    #[error("a hand holds at most {max} cards, got {given}")]
    InvalidHand { given: usize, max: usize },

    #[error("card takes {min}..={max} agents, got {given}")]
    AgentArity { min: usize, max: usize, given: usize },

    #[error("card takes no number, got {0}")]
    UnexpectedNumber(i32),

    #[error("number {0} is not allowed for this card")]
    InvalidNumber(i32),

    #[error("agent {0} cannot be targeted by this card right now")]
    IneligibleAgent(Agent),

    #[error("agent {0} is named more than once")]
    DuplicateAgent(Agent),

    #[error("action is not legal in the current state: {0}")]
    IllegalAction(String),

    #[error("a {action} action cannot be applied during the {phase} phase")]
    WrongPhase { action: Phase, phase: Phase },

    #[error("cannot disqualify: only {active} players remain")]
    CannotDisqualify { active: usize },
}

impl HeimlichError {
    /// Which of the three failure classes this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        use HeimlichError::*;
        match self {
            InvalidPlayerCount(_)
            | InvalidAgentCount(_)
            | InvalidField(_)
            | AgentNotInPlay(_)
            | MismatchedAgents
            | InvalidStackSize { .. }
            | UnknownPlayer(_)
            | InvalidCardType(_)
            | InvalidAssignment(_)
            | InvalidHand { .. } => ErrorKind::InvalidArgument,
            AgentArity { .. }
            | UnexpectedNumber(_)
            | InvalidNumber(_)
            | IneligibleAgent(_)
            | DuplicateAgent(_)
            | IllegalAction(_) => ErrorKind::IllegalMove,
            WrongPhase { .. } | CannotDisqualify { .. } => ErrorKind::IllegalState,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(HeimlichError::InvalidPlayerCount(9).kind(), ErrorKind::InvalidArgument);
        assert_eq!(HeimlichError::InvalidNumber(4).kind(), ErrorKind::IllegalMove);
        assert_eq!(
            HeimlichError::CannotDisqualify { active: 2 }.kind(),
            ErrorKind::IllegalState
        );
    }

    #[test]
    fn test_error_messages_carry_values() {
        let err = HeimlichError::AgentArity { min: 2, max: 2, given: 1 };
        assert_eq!(err.to_string(), "card takes 2..=2 agents, got 1");

        let err = HeimlichError::WrongPhase {
            action: Phase::SafeMove,
            phase: Phase::DieRoll,
        };
        assert!(err.to_string().contains("SafeMove"));
    }
}
