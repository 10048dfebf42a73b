//! Argument shape of a card.

use serde::{Deserialize, Serialize};

/// How a card is played: how many agents it names, whether it takes a
/// number, which effect variant it selects, and whether the order of the
/// named agents matters.
///
/// Two cards with the same family and specification are interchangeable;
/// the deck holds several physical copies of most cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSpecification {
    /// Fewest agents the card may name.
    pub min_agents: u8,
    /// Most agents the card may name.
    pub max_agents: u8,
    /// Whether the play carries a number (a field or a step count).
    pub number_needed: bool,
    /// Effect variant within the card's family.
    pub card_type: u8,
    /// Whether permuting the named agents leaves the effect unchanged.
    pub order_invariant: bool,
}

impl CardSpecification {
    #[must_use]
    pub const fn new(
        min_agents: u8,
        max_agents: u8,
        number_needed: bool,
        card_type: u8,
        order_invariant: bool,
    ) -> Self {
        Self {
            min_agents,
            max_agents,
            number_needed,
            card_type,
            order_invariant,
        }
    }

    /// Whether `count` agents is an acceptable arity.
    #[must_use]
    pub fn accepts_agent_count(&self, count: usize) -> bool {
        (usize::from(self.min_agents)..=usize::from(self.max_agents)).contains(&count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_agent_count() {
        let spec = CardSpecification::new(1, 2, false, 9, true);
        assert!(!spec.accepts_agent_count(0));
        assert!(spec.accepts_agent_count(1));
        assert!(spec.accepts_agent_count(2));
        assert!(!spec.accepts_agent_count(3));
    }

    #[test]
    fn test_structural_equality() {
        let a = CardSpecification::new(2, 2, false, 8, false);
        let b = CardSpecification::new(2, 2, false, 8, false);
        let c = CardSpecification::new(2, 2, false, 8, true);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
