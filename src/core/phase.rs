//! Turn phases.

use serde::{Deserialize, Serialize};

/// The four stages of a turn, in the order they normally occur.
///
/// `CardPlay` only occurs when the game is played with cards; `SafeMove`
/// only occurs when a move puts an agent on the safe's field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    DieRoll,
    AgentMove,
    CardPlay,
    SafeMove,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::DieRoll => "DieRoll",
            Phase::AgentMove => "AgentMove",
            Phase::CardPlay => "CardPlay",
            Phase::SafeMove => "SafeMove",
        };
        f.write_str(name)
    }
}
