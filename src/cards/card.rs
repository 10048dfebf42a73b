//! Action cards.
//!
//! ## Families
//!
//! - `MoveSafe`: relocate the safe to any other building.
//! - `AddScorePoints`: give two agents three points each, up to 40.
//! - `MoveAgents`: one of twelve movement effects, see [`MoveAgentsKind`].
//!
//! Cards are values: equality is by family and specification, so every
//! physical copy of a card compares equal to the others.
//!
//! ## Playing a card
//!
//! [`Card::apply`] validates in a fixed order before touching the board:
//! arity against the specification, a zero number when none is needed,
//! every agent in play and named once, then the family's own rules.
//! Nothing is mutated unless every check passes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::move_agents::{CardTargets, MoveAgentsKind};
use super::specification::CardSpecification;
use crate::actions::CardAction;
use crate::board::{Board, FIELD_COUNT};
use crate::core::{Agent, MAX_AGENTS};
use crate::error::{HeimlichError, Result};

/// Score cap for [`Card::AddScorePoints`].
pub const SCORE_CARD_CAP: i32 = 40;

/// Points [`Card::AddScorePoints`] grants each agent.
pub const SCORE_CARD_BONUS: i32 = 3;

const MOVE_SAFE_SPEC: CardSpecification = CardSpecification::new(0, 0, true, 0, true);
const ADD_SCORE_SPEC: CardSpecification = CardSpecification::new(2, 2, false, 0, true);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    MoveSafe,
    AddScorePoints,
    MoveAgents(MoveAgentsKind),
}

impl Card {
    /// A `MoveAgents` card by type code (0-11).
    pub fn move_agents(code: u8) -> Result<Card> {
        MoveAgentsKind::from_code(code).map(Card::MoveAgents)
    }

    #[must_use]
    pub fn specification(&self) -> CardSpecification {
        match self {
            Card::MoveSafe => MOVE_SAFE_SPEC,
            Card::AddScorePoints => ADD_SCORE_SPEC,
            Card::MoveAgents(kind) => kind.specification(),
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Card::MoveSafe => "Move the safe into a building of your choice.",
            Card::AddScorePoints => {
                "Move two score markers forward by three points each (max. to field 40)."
            }
            Card::MoveAgents(kind) => kind.description(),
        }
    }

    /// Validate a play and apply its effect to `board`.
    pub fn apply(&self, board: &mut Board, agents: &[Agent], number: i32) -> Result<()> {
        let spec = self.specification();
        if !spec.accepts_agent_count(agents.len()) {
            return Err(HeimlichError::AgentArity {
                min: usize::from(spec.min_agents),
                max: usize::from(spec.max_agents),
                given: agents.len(),
            });
        }
        if !spec.number_needed && number != 0 {
            return Err(HeimlichError::UnexpectedNumber(number));
        }
        for (i, &agent) in agents.iter().enumerate() {
            if !board.contains(agent) {
                return Err(HeimlichError::AgentNotInPlay(agent));
            }
            if agents[..i].contains(&agent) {
                return Err(HeimlichError::DuplicateAgent(agent));
            }
        }

        match self {
            Card::MoveSafe => {
                let field = u8::try_from(number)
                    .ok()
                    .filter(|&f| f < FIELD_COUNT && f != board.safe_position())
                    .ok_or(HeimlichError::InvalidNumber(number))?;
                board.move_safe(field)
            }
            Card::AddScorePoints => {
                for &agent in agents {
                    if board.score(agent)? >= SCORE_CARD_CAP {
                        return Err(HeimlichError::IneligibleAgent(agent));
                    }
                }
                for &agent in agents {
                    let score = board.score(agent)?;
                    board.add_score(agent, SCORE_CARD_BONUS.min(SCORE_CARD_CAP - score))?;
                }
                Ok(())
            }
            Card::MoveAgents(kind) => kind.apply(board, agents, number),
        }
    }

    /// Every legal play of this card on `board`.
    #[must_use]
    pub fn possible_actions(&self, board: &Board) -> Vec<CardAction> {
        let plays: Vec<(CardTargets, i32)> = match self {
            Card::MoveSafe => (0..FIELD_COUNT)
                .filter(|&f| f != board.safe_position())
                .map(|f| (SmallVec::new(), i32::from(f)))
                .collect(),
            Card::AddScorePoints => {
                let eligible: SmallVec<[Agent; MAX_AGENTS]> = board
                    .agent_scores()
                    .filter(|&(_, s)| s < SCORE_CARD_CAP)
                    .map(|(a, _)| a)
                    .collect();
                let mut pairs = Vec::new();
                for (i, &a) in eligible.iter().enumerate() {
                    for &b in &eligible[i + 1..] {
                        pairs.push((smallvec::smallvec![a, b], 0));
                    }
                }
                pairs
            }
            Card::MoveAgents(kind) => kind.possible_plays(board),
        };

        plays
            .into_iter()
            .map(|(agents, number)| CardAction::play(*self, agents, number))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::MoveSafe => write!(f, "MoveSafeCard: {}", self.description()),
            Card::AddScorePoints => write!(f, "AddScorePointsCard: {}", self.description()),
            Card::MoveAgents(kind) => {
                write!(f, "MoveAgentsCard ({}): {}", kind.code(), self.description())
            }
        }
    }
}
