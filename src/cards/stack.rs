//! The face-down draw pile.
//!
//! The top of the stack is the end of the vector, so drawing is a `pop`.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::move_agents::MoveAgentsKind;
use crate::core::GameRng;
use crate::error::{HeimlichError, Result};

/// Cards in a full, unplayed deck.
pub const STANDARD_DECK_SIZE: usize = 25;

/// The standard deck in a fixed, unshuffled order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
    cards.extend([Card::MoveSafe; 2]);
    cards.extend([Card::AddScorePoints; 2]);
    for kind in MoveAgentsKind::ALL {
        cards.extend(std::iter::repeat(Card::MoveAgents(kind)).take(kind.copies()));
    }
    cards
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStack {
    cards: Vec<Card>,
}

impl CardStack {
    /// An empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack holding exactly `cards`, the last one on top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The full standard deck, shuffled.
    pub fn standard(rng: &mut GameRng) -> Self {
        let mut stack = Self::from_cards(standard_deck());
        stack.shuffle(rng);
        stack
    }

    /// A shuffled standard deck drawn down to `size` cards.
    ///
    /// Used to stand in for a stack whose contents an observer must not see.
    pub fn with_size(size: usize, rng: &mut GameRng) -> Result<Self> {
        if size > STANDARD_DECK_SIZE {
            return Err(HeimlichError::InvalidStackSize {
                requested: size,
                max: STANDARD_DECK_SIZE,
            });
        }
        let mut stack = Self::standard(rng);
        stack.cards.truncate(size);
        Ok(stack)
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The top card, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }
}
