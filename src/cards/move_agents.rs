//! The twelve agent-moving card variants.
//!
//! Each variant has a legality predicate, used both to enumerate legal plays
//! and to reject illegal ones, and an effect on the board. Arity and the
//! presence of a number are checked by [`Card::apply`](super::Card::apply)
//! before a variant sees its arguments; the checks here cover the rest.
//!
//! | code | variant | agents | number |
//! |---|---|---|---|
//! | 0 | `BackOneOrTwo` | 1 | -1 or -2 |
//! | 1 | `StepEitherWay` | 1 | -1 or 1 |
//! | 2 | `PairBack` | 2 | - |
//! | 3 | `PairForward` | 2 | - |
//! | 4 | `OffTheSafe` | 1 on the safe | -1 or 1 |
//! | 5 | `IntoRuins` | 1 not in the ruins | - |
//! | 6 | `AllToChurch` | 0 | - |
//! | 7 | `Swap` | 2 on different fields | - |
//! | 8 | `Join` | 2 on different fields, ordered | - |
//! | 9 | `RuinsToChurch` | 1-2 in the ruins | - |
//! | 10 | `ForwardUpToThree` | 1 | 1, 2 or 3 |
//! | 11 | `ToSafe` | 1 not on the safe | - |

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::specification::CardSpecification;
use crate::board::{Board, RUINS_FIELD};
use crate::core::{Agent, MAX_AGENTS};
use crate::error::{HeimlichError, Result};

/// Field 0, where the church stands.
const CHURCH_FIELD: u8 = 0;

/// Agents named by a single card play.
pub type CardTargets = SmallVec<[Agent; 2]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoveAgentsKind {
    BackOneOrTwo,
    StepEitherWay,
    PairBack,
    PairForward,
    OffTheSafe,
    IntoRuins,
    AllToChurch,
    Swap,
    Join,
    RuinsToChurch,
    ForwardUpToThree,
    ToSafe,
}

impl MoveAgentsKind {
    pub const ALL: [MoveAgentsKind; 12] = [
        MoveAgentsKind::BackOneOrTwo,
        MoveAgentsKind::StepEitherWay,
        MoveAgentsKind::PairBack,
        MoveAgentsKind::PairForward,
        MoveAgentsKind::OffTheSafe,
        MoveAgentsKind::IntoRuins,
        MoveAgentsKind::AllToChurch,
        MoveAgentsKind::Swap,
        MoveAgentsKind::Join,
        MoveAgentsKind::RuinsToChurch,
        MoveAgentsKind::ForwardUpToThree,
        MoveAgentsKind::ToSafe,
    ];

    /// Numeric type code (0-11).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(HeimlichError::InvalidCardType(code))
    }

    #[must_use]
    pub const fn specification(self) -> CardSpecification {
        use MoveAgentsKind::*;
        let code = self.code();
        match self {
            BackOneOrTwo | StepEitherWay | OffTheSafe | ForwardUpToThree => {
                CardSpecification::new(1, 1, true, code, true)
            }
            PairBack | PairForward | Swap => CardSpecification::new(2, 2, false, code, true),
            Join => CardSpecification::new(2, 2, false, code, false),
            IntoRuins | ToSafe => CardSpecification::new(1, 1, false, code, true),
            AllToChurch => CardSpecification::new(0, 0, false, code, true),
            RuinsToChurch => CardSpecification::new(1, 2, false, code, true),
        }
    }

    /// Physical copies in the standard deck.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self {
            MoveAgentsKind::AllToChurch | MoveAgentsKind::Swap | MoveAgentsKind::Join => 1,
            _ => 2,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        use MoveAgentsKind::*;
        match self {
            BackOneOrTwo => "Move an agent of your choice back by one or two buildings.",
            StepEitherWay => "Move an agent of your choice backward or forward by one building.",
            PairBack => "Move two agents of your choice back by one building each.",
            PairForward => "Move two agents of your choice forward by one building each.",
            OffTheSafe => "Move an agent that is on the safe away from the safe by one building.",
            IntoRuins => "Move an agent of your choice into the ruins.",
            AllToChurch => "Move all agents into the church.",
            Swap => "Swap the places of two agents.",
            Join => "Move one agent of your choice to another one (the first agent named moves).",
            RuinsToChurch => "Move one or two agents of your choice from the ruins into the church.",
            ForwardUpToThree => "Move an agent one, two or three buildings forward.",
            ToSafe => "Move an agent of your choice to the safe (triggers scoring).",
        }
    }

    /// Every legal `(agents, number)` play on `board`.
    #[must_use]
    pub fn possible_plays(self, board: &Board) -> Vec<(CardTargets, i32)> {
        use MoveAgentsKind::*;
        let positions: SmallVec<[(Agent, u8); MAX_AGENTS]> = board.agent_positions().collect();
        let safe = board.safe_position();
        let mut plays = Vec::new();

        let singles_with = |plays: &mut Vec<(CardTargets, i32)>, keep: &dyn Fn(u8) -> bool, numbers: &[i32]| {
            for &(agent, field) in &positions {
                if keep(field) {
                    for &n in numbers {
                        plays.push((smallvec![agent], n));
                    }
                }
            }
        };

        match self {
            BackOneOrTwo => singles_with(&mut plays, &|_| true, &[-1, -2]),
            StepEitherWay => singles_with(&mut plays, &|_| true, &[-1, 1]),
            OffTheSafe => singles_with(&mut plays, &|f| f == safe, &[-1, 1]),
            ForwardUpToThree => singles_with(&mut plays, &|_| true, &[1, 2, 3]),
            IntoRuins => singles_with(&mut plays, &|f| f != RUINS_FIELD, &[0]),
            ToSafe => singles_with(&mut plays, &|f| f != safe, &[0]),
            AllToChurch => plays.push((SmallVec::new(), 0)),
            PairBack | PairForward | Swap | RuinsToChurch => {
                if self == RuinsToChurch {
                    singles_with(&mut plays, &|f| f == RUINS_FIELD, &[0]);
                }
                for (i, &(a, fa)) in positions.iter().enumerate() {
                    for &(b, fb) in &positions[i + 1..] {
                        let legal = match self {
                            Swap => fa != fb,
                            RuinsToChurch => fa == RUINS_FIELD && fb == RUINS_FIELD,
                            _ => true,
                        };
                        if legal {
                            plays.push((smallvec![a, b], 0));
                        }
                    }
                }
            }
            Join => {
                for &(a, fa) in &positions {
                    for &(b, fb) in &positions {
                        if a != b && fa != fb {
                            plays.push((smallvec![a, b], 0));
                        }
                    }
                }
            }
        }
        plays
    }

    /// Check the variant's rules and apply the effect.
    ///
    /// `agents` must already have passed the arity and in-play checks.
    pub fn apply(self, board: &mut Board, agents: &[Agent], number: i32) -> Result<()> {
        use MoveAgentsKind::*;
        let safe = board.safe_position();

        match self {
            BackOneOrTwo => {
                require_number(number, &[-1, -2])?;
                board.move_agent(agents[0], number)
            }
            StepEitherWay => {
                require_number(number, &[-1, 1])?;
                board.move_agent(agents[0], number)
            }
            PairBack | PairForward => {
                let delta = if self == PairBack { -1 } else { 1 };
                for &agent in agents {
                    board.move_agent(agent, delta)?;
                }
                Ok(())
            }
            OffTheSafe => {
                require_number(number, &[-1, 1])?;
                require_field(board, agents[0], |f| f == safe)?;
                board.move_agent(agents[0], number)
            }
            IntoRuins => {
                require_field(board, agents[0], |f| f != RUINS_FIELD)?;
                board.move_agent_to(agents[0], RUINS_FIELD)
            }
            AllToChurch => {
                let all: SmallVec<[Agent; MAX_AGENTS]> = board.agents().collect();
                for agent in all {
                    board.move_agent_to(agent, CHURCH_FIELD)?;
                }
                Ok(())
            }
            Swap | Join => {
                let (a, b) = (agents[0], agents[1]);
                let (fa, fb) = (board.position(a)?, board.position(b)?);
                if fa == fb {
                    return Err(HeimlichError::IneligibleAgent(b));
                }
                board.move_agent_to(a, fb)?;
                if self == Swap {
                    board.move_agent_to(b, fa)?;
                }
                Ok(())
            }
            RuinsToChurch => {
                for &agent in agents {
                    require_field(board, agent, |f| f == RUINS_FIELD)?;
                }
                for &agent in agents {
                    board.move_agent_to(agent, CHURCH_FIELD)?;
                }
                Ok(())
            }
            ForwardUpToThree => {
                require_number(number, &[1, 2, 3])?;
                board.move_agent(agents[0], number)
            }
            ToSafe => {
                require_field(board, agents[0], |f| f != safe)?;
                board.move_agent_to(agents[0], safe)
            }
        }
    }
}

fn require_number(number: i32, allowed: &[i32]) -> Result<()> {
    if allowed.contains(&number) {
        Ok(())
    } else {
        Err(HeimlichError::InvalidNumber(number))
    }
}

fn require_field(board: &Board, agent: Agent, legal: impl Fn(u8) -> bool) -> Result<()> {
    if legal(board.position(agent)?) {
        Ok(())
    } else {
        Err(HeimlichError::IneligibleAgent(agent))
    }
}
