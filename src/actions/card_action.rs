//! Playing a card, or passing.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::{Card, CardTargets};
use crate::core::Agent;
use crate::error::Result;

/// A card play (card, named agents, number) or a skip.
///
/// Agents are sorted at construction when the card does not care about
/// their order, so effect-equivalent plays compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardAction {
    card: Option<Card>,
    agents: CardTargets,
    number: i32,
}

impl CardAction {
    /// Pass without playing a card.
    #[must_use]
    pub fn skip() -> Self {
        Self::default()
    }

    pub fn play(card: Card, agents: impl IntoIterator<Item = Agent>, number: i32) -> Self {
        let mut agents: CardTargets = agents.into_iter().collect();
        if card.specification().order_invariant {
            agents.sort_unstable();
        }
        Self {
            card: Some(card),
            agents,
            number,
        }
    }

    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.card.is_none()
    }

    #[must_use]
    pub fn card(&self) -> Option<Card> {
        self.card
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Apply the card's effect; a skip leaves the board alone.
    pub fn apply(&self, board: &mut Board) -> Result<()> {
        match &self.card {
            Some(card) => card.apply(board, &self.agents, self.number),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for CardAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(card) = &self.card else {
            return f.write_str("CardAction: skip");
        };
        write!(f, "CardAction: {}", card)?;
        if !self.agents.is_empty() {
            let names: Vec<String> = self.agents.iter().map(ToString::to_string).collect();
            write!(f, " agents [{}]", names.join(", "))?;
        }
        if card.specification().number_needed {
            write!(f, " number {}", self.number)?;
        }
        Ok(())
    }
}
