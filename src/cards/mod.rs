//! Card system: specifications, the three card families, and the draw pile.
//!
//! ## Key Types
//!
//! - `CardSpecification`: arity, number and ordering rules of a card
//! - `Card`: closed set of card families
//! - `MoveAgentsKind`: the twelve movement effects
//! - `CardStack`: the shuffled draw pile

pub mod specification;
pub mod card;
pub mod move_agents;
pub mod stack;

pub use specification::CardSpecification;
pub use card::{Card, SCORE_CARD_BONUS, SCORE_CARD_CAP};
pub use move_agents::{CardTargets, MoveAgentsKind};
pub use stack::{standard_deck, CardStack, STANDARD_DECK_SIZE};
