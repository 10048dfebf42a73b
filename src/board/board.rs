//! Board state: agent positions, scores, the safe and the scoring flags.
//!
//! ## Layout
//!
//! Twelve buildings numbered 0-11 arranged in a ring. Field 11 is the ruins,
//! which costs three points when scoring happens. The safe starts on
//! field 7 and all agents start on field 0.
//!
//! ## Scoring flags
//!
//! An agent that arrives on the safe's field through a real move (a
//! displacement that is not a multiple of 12) gets its "just scored" flag
//! set. Leaving the safe clears that agent's flag. Moving the safe or
//! awarding points clears every flag. A turn enters the scoring phase iff
//! any flag is set when the moving part of the turn ends.
//!
//! The board is a plain value; `clone()` gives a fully independent copy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::die::DieFace;
use crate::core::{Agent, MAX_AGENTS, MIN_AGENTS};
use crate::error::{HeimlichError, Result};

/// Number of buildings on the ring.
pub const FIELD_COUNT: u8 = 12;

/// The ruins: scoring here costs points.
pub const RUINS_FIELD: u8 = 11;

/// Where the safe starts, and where it is reset to.
pub const SAFE_START_FIELD: u8 = 7;

/// Any agent reaching this score ends the game.
pub const WINNING_SCORE: i32 = 42;

/// Points an agent earns for sitting on `field` when scoring happens.
///
/// The ruins cost three points; every other building is worth its index.
pub fn points_for_field(field: u8) -> Result<i32> {
    check_field(field).map(field_points)
}

fn field_points(field: u8) -> i32 {
    if field == RUINS_FIELD {
        -3
    } else {
        i32::from(field)
    }
}

fn check_field(field: u8) -> Result<u8> {
    if field < FIELD_COUNT {
        Ok(field)
    } else {
        Err(HeimlichError::InvalidField(i64::from(field)))
    }
}

/// Positions, scores and scoring state for 5-7 agents.
///
/// Agents on a board of size `n` are always the first `n` agents in
/// canonical order, so per-agent data is stored in fixed arrays indexed by
/// [`Agent::index`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    agent_count: u8,
    positions: [u8; MAX_AGENTS],
    scores: [i32; MAX_AGENTS],
    just_scored: [bool; MAX_AGENTS],
    safe_position: u8,
    last_die_roll: Option<DieFace>,
}

impl Board {
    /// Fresh board: every agent on field 0 with zero points, safe on field 7.
    pub fn new(agent_count: usize) -> Result<Self> {
        if !(MIN_AGENTS..=MAX_AGENTS).contains(&agent_count) {
            return Err(HeimlichError::InvalidAgentCount(agent_count));
        }
        Ok(Self {
            agent_count: agent_count as u8,
            positions: [0; MAX_AGENTS],
            scores: [0; MAX_AGENTS],
            just_scored: [false; MAX_AGENTS],
            safe_position: SAFE_START_FIELD,
            last_die_roll: None,
        })
    }

    /// Board with explicit positions, scores and safe field.
    ///
    /// Both lists must name the same agents, and those agents must be the
    /// first 5-7 in canonical order. No scoring flags are set.
    pub fn from_parts(positions: &[(Agent, u8)], scores: &[(Agent, i32)], safe_position: u8) -> Result<Self> {
        let mut board = Self::new(positions.len())?;
        board.safe_position = check_field(safe_position)?;

        let mut seen_position = [false; MAX_AGENTS];
        for &(agent, field) in positions {
            let slot = board.slot(agent).map_err(|_| HeimlichError::MismatchedAgents)?;
            if seen_position[slot] {
                return Err(HeimlichError::DuplicateAgent(agent));
            }
            seen_position[slot] = true;
            board.positions[slot] = check_field(field)?;
        }

        let mut seen_score = [false; MAX_AGENTS];
        for &(agent, score) in scores {
            let slot = board.slot(agent).map_err(|_| HeimlichError::MismatchedAgents)?;
            if seen_score[slot] {
                return Err(HeimlichError::DuplicateAgent(agent));
            }
            seen_score[slot] = true;
            board.scores[slot] = score;
        }

        if seen_position != seen_score {
            return Err(HeimlichError::MismatchedAgents);
        }
        Ok(board)
    }

    fn slot(&self, agent: Agent) -> Result<usize> {
        if self.contains(agent) {
            Ok(agent.index())
        } else {
            Err(HeimlichError::AgentNotInPlay(agent))
        }
    }

    // === Queries ===

    /// Number of agents on this board.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        usize::from(self.agent_count)
    }

    /// Agents on this board, in canonical order.
    pub fn agents(&self) -> impl Iterator<Item = Agent> {
        Agent::first(self.agent_count())
    }

    /// Whether `agent` takes part in this game.
    #[must_use]
    pub fn contains(&self, agent: Agent) -> bool {
        agent.index() < self.agent_count()
    }

    /// Field an agent stands on.
    pub fn position(&self, agent: Agent) -> Result<u8> {
        Ok(self.positions[self.slot(agent)?])
    }

    /// An agent's score.
    pub fn score(&self, agent: Agent) -> Result<i32> {
        Ok(self.scores[self.slot(agent)?])
    }

    /// Whether the agent's arrival on the safe is still waiting to be scored.
    #[must_use]
    pub fn just_scored(&self, agent: Agent) -> bool {
        self.contains(agent) && self.just_scored[agent.index()]
    }

    /// `(agent, field)` for every agent, in canonical order.
    pub fn agent_positions(&self) -> impl Iterator<Item = (Agent, u8)> + '_ {
        self.agents().map(move |a| (a, self.positions[a.index()]))
    }

    /// `(agent, score)` for every agent, in canonical order.
    pub fn agent_scores(&self) -> impl Iterator<Item = (Agent, i32)> + '_ {
        self.agents().map(move |a| (a, self.scores[a.index()]))
    }

    /// Agents currently on `field`.
    #[must_use]
    pub fn agents_on_field(&self, field: u8) -> SmallVec<[Agent; MAX_AGENTS]> {
        self.agent_positions()
            .filter(|&(_, f)| f == field)
            .map(|(a, _)| a)
            .collect()
    }

    #[must_use]
    pub fn safe_position(&self) -> u8 {
        self.safe_position
    }

    /// Face shown by the most recent die roll.
    #[must_use]
    pub fn last_die_roll(&self) -> Option<DieFace> {
        self.last_die_roll
    }

    /// Highest score on the board.
    #[must_use]
    pub fn max_score(&self) -> i32 {
        self.agent_scores().map(|(_, s)| s).max().unwrap_or(0)
    }

    /// True iff any agent's arrival on the safe is waiting to be scored.
    #[must_use]
    pub fn scoring_triggered(&self) -> bool {
        self.just_scored[..self.agent_count()].iter().any(|&f| f)
    }

    /// True iff some agent has reached the winning score.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.max_score() >= WINNING_SCORE
    }

    // === Mutation ===

    pub fn set_last_die_roll(&mut self, face: Option<DieFace>) {
        self.last_die_roll = face;
    }

    /// Move an agent `delta` fields around the ring (negative moves back).
    pub fn move_agent(&mut self, agent: Agent, delta: i32) -> Result<()> {
        let slot = self.slot(agent)?;
        let steps = delta.rem_euclid(i32::from(FIELD_COUNT));
        if steps == 0 {
            return Ok(());
        }

        let from = self.positions[slot];
        if from == self.safe_position {
            self.just_scored[slot] = false;
        }
        let to = ((i32::from(from) + steps) % i32::from(FIELD_COUNT)) as u8;
        self.positions[slot] = to;
        if to == self.safe_position {
            self.just_scored[slot] = true;
        }
        Ok(())
    }

    /// Place an agent directly on `field`.
    ///
    /// Flags follow the same rules as [`Board::move_agent`]; staying on the
    /// same field changes nothing.
    pub fn move_agent_to(&mut self, agent: Agent, field: u8) -> Result<()> {
        let slot = self.slot(agent)?;
        let to = check_field(field)?;
        let from = self.positions[slot];
        if from == to {
            return Ok(());
        }

        if from == self.safe_position {
            self.just_scored[slot] = false;
        }
        self.positions[slot] = to;
        if to == self.safe_position {
            self.just_scored[slot] = true;
        }
        Ok(())
    }

    /// Relocate the safe. Clears every scoring flag.
    pub fn move_safe(&mut self, field: u8) -> Result<()> {
        self.safe_position = check_field(field)?;
        self.just_scored = [false; MAX_AGENTS];
        Ok(())
    }

    /// Add `points` to an agent's score.
    pub fn add_score(&mut self, agent: Agent, points: i32) -> Result<()> {
        let slot = self.slot(agent)?;
        self.scores[slot] += points;
        Ok(())
    }

    /// Overwrite an agent's score (scenario setup).
    pub fn set_score(&mut self, agent: Agent, score: i32) -> Result<()> {
        let slot = self.slot(agent)?;
        self.scores[slot] = score;
        Ok(())
    }

    /// Score every agent for the building it stands on and clear all flags.
    pub fn award_points(&mut self) {
        for slot in 0..self.agent_count() {
            self.scores[slot] += field_points(self.positions[slot]);
        }
        self.just_scored = [false; MAX_AGENTS];
    }
}
