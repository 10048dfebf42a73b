//! Agents: the seven coloured pieces on the board.
//!
//! Every player secretly controls one agent; the rest are dummies that
//! anyone may move. Agents are ordered so that iteration over them is
//! deterministic.

use serde::{Deserialize, Serialize};

/// Maximum number of agents a board can hold.
pub const MAX_AGENTS: usize = 7;

/// Minimum number of agents a board can hold.
pub const MIN_AGENTS: usize = 5;

/// One of the seven agent colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Agent {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    White,
}

impl Agent {
    /// All agents in their canonical order.
    pub const ALL: [Agent; MAX_AGENTS] = [
        Agent::Red,
        Agent::Blue,
        Agent::Green,
        Agent::Yellow,
        Agent::Orange,
        Agent::Purple,
        Agent::White,
    ];

    /// Position in the canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Agent at a canonical position, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Agent> {
        Self::ALL.get(index).copied()
    }

    /// The first `count` agents, which are the ones used by a board of that size.
    pub fn first(count: usize) -> impl Iterator<Item = Agent> {
        Self::ALL.into_iter().take(count)
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Agent::Red => "Red",
            Agent::Blue => "Blue",
            Agent::Green => "Green",
            Agent::Yellow => "Yellow",
            Agent::Orange => "Orange",
            Agent::Purple => "Purple",
            Agent::White => "White",
        };
        f.write_str(name)
    }
}
