//! Moving agents by the die result.
//!
//! ## Move generation
//!
//! A die total `d` may be split across all `n` agents on the board in any
//! way: every weak composition of `d` into `n` parts is a legal move, with
//! zero entries dropped from the recorded mapping. The free-choice face
//! contributes the compositions of 1, 2 and 3. With cards in play the empty
//! move ("stay put and draw a card") is also legal.
//!
//! This is the hot path of legal-move generation: seven agents and a six
//! give C(12, 6) = 924 candidate moves.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, FIELD_COUNT, RUINS_FIELD};
use crate::core::{Agent, MAX_AGENTS};
use crate::error::Result;

/// One part-count vector per composition; index `i` belongs to the `i`-th agent.
pub type Composition = SmallVec<[u8; MAX_AGENTS]>;

/// Every way to write `total` as an ordered sum of `parts` non-negative integers.
///
/// Yields `C(total + parts - 1, parts - 1)` compositions, largest first part first.
///
/// ```
/// use heimlich::actions::weak_compositions;
///
/// assert_eq!(weak_compositions(3, 5).len(), 35);
/// assert_eq!(weak_compositions(2, 2).len(), 3);
/// ```
#[must_use]
pub fn weak_compositions(total: u8, parts: usize) -> Vec<Composition> {
    let mut out = Vec::new();
    if parts == 0 {
        if total == 0 {
            out.push(Composition::new());
        }
        return out;
    }
    let mut current = Composition::new();
    compose(total, parts, &mut current, &mut out);
    out
}

fn compose(remaining: u8, parts_left: usize, current: &mut Composition, out: &mut Vec<Composition>) {
    if parts_left == 1 {
        current.push(remaining);
        out.push(current.clone());
        current.pop();
        return;
    }
    for take in (0..=remaining).rev() {
        current.push(take);
        compose(remaining - take, parts_left - 1, current, out);
        current.pop();
    }
}

/// Steps per agent. Empty means "do not move, draw a card instead".
///
/// Entries are kept sorted by agent with zero counts removed, so two moves
/// with the same effect are equal and hash alike.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentMoveAction {
    moves: SmallVec<[(Agent, u8); 4]>,
}

impl AgentMoveAction {
    /// Build a move from `(agent, steps)` pairs. Repeated agents are summed.
    pub fn new(moves: impl IntoIterator<Item = (Agent, u8)>) -> Self {
        let mut steps = [0u8; MAX_AGENTS];
        for (agent, n) in moves {
            steps[agent.index()] = steps[agent.index()].saturating_add(n);
        }
        let moves = Agent::ALL
            .iter()
            .zip(steps)
            .filter(|&(_, n)| n > 0)
            .map(|(&a, n)| (a, n))
            .collect();
        Self { moves }
    }

    /// Decline to move and draw a card instead.
    #[must_use]
    pub fn no_move() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_no_move(&self) -> bool {
        self.moves.is_empty()
    }

    /// `(agent, steps)` pairs, sorted by agent.
    #[must_use]
    pub fn moves(&self) -> &[(Agent, u8)] {
        &self.moves
    }

    /// Sum of all steps.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.moves.iter().map(|&(_, n)| u32::from(n)).sum()
    }

    /// Whether applying this move to `board` would put any agent in the ruins.
    ///
    /// Must be asked before the move is applied.
    #[must_use]
    pub fn moves_into_ruins(&self, board: &Board) -> bool {
        self.moves.iter().any(|&(agent, n)| {
            board
                .position(agent)
                .map(|from| (u32::from(from) + u32::from(n)) % u32::from(FIELD_COUNT) == u32::from(RUINS_FIELD))
                .unwrap_or(false)
        })
    }

    /// Move every listed agent forward by its step count.
    pub fn apply(&self, board: &mut Board) -> Result<()> {
        for &(agent, _) in &self.moves {
            board.position(agent)?;
        }
        for &(agent, n) in &self.moves {
            board.move_agent(agent, i32::from(n))?;
        }
        Ok(())
    }

    /// Every legal move for the die face on `board`.
    #[must_use]
    pub fn possible_actions(board: &Board, with_cards: bool) -> Vec<AgentMoveAction> {
        let agents: SmallVec<[Agent; MAX_AGENTS]> = board.agents().collect();
        let mut out = Vec::new();

        if let Some(face) = board.last_die_roll() {
            for total in face.totals() {
                out.extend(
                    weak_compositions(total, agents.len())
                        .into_iter()
                        .map(|parts| Self::new(agents.iter().copied().zip(parts))),
                );
            }
        }
        if with_cards {
            out.push(Self::no_move());
        }
        out
    }
}

impl std::fmt::Display for AgentMoveAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_no_move() {
            return f.write_str("AgentMove: no move, draw a card");
        }
        f.write_str("AgentMove:")?;
        for (i, (agent, n)) in self.moves.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{} +{}", sep, agent, n)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DieFace;

    #[test]
    fn test_composition_counts() {
        assert_eq!(weak_compositions(3, 5).len(), 35);
        assert_eq!(weak_compositions(6, 7).len(), 924);
        assert_eq!(weak_compositions(1, 7).len(), 7);
        assert_eq!(weak_compositions(0, 3).len(), 1);
        assert_eq!(weak_compositions(0, 0).len(), 1);
        assert!(weak_compositions(2, 0).is_empty());
    }

    #[test]
    fn test_compositions_sum_to_total() {
        for parts in weak_compositions(4, 5) {
            assert_eq!(parts.len(), 5);
            assert_eq!(parts.iter().map(|&p| u32::from(p)).sum::<u32>(), 4);
        }
    }

    #[test]
    fn test_new_normalizes() {
        let a = AgentMoveAction::new([(Agent::Blue, 1), (Agent::Red, 0), (Agent::Red, 2)]);
        let b = AgentMoveAction::new([(Agent::Red, 2), (Agent::Blue, 1)]);
        assert_eq!(a, b);
        assert_eq!(a.moves(), &[(Agent::Red, 2), (Agent::Blue, 1)]);
        assert_eq!(a.total(), 3);

        assert!(AgentMoveAction::new([(Agent::Red, 0)]).is_no_move());
    }

    #[test]
    fn test_possible_actions_for_steps() {
        let mut board = Board::new(5).unwrap();
        board.set_last_die_roll(Some(DieFace::Steps(3)));

        let moves = AgentMoveAction::possible_actions(&board, false);
        assert_eq!(moves.len(), 35);
        assert!(moves.iter().all(|m| m.total() == 3));

        let with_cards = AgentMoveAction::possible_actions(&board, true);
        assert_eq!(with_cards.len(), 36);
        assert!(with_cards.contains(&AgentMoveAction::no_move()));
    }

    #[test]
    fn test_possible_actions_for_free_choice() {
        let mut board = Board::new(7).unwrap();
        board.set_last_die_roll(Some(DieFace::OneToThree));

        // C(7,6) + C(8,6) + C(9,6)
        let moves = AgentMoveAction::possible_actions(&board, false);
        assert_eq!(moves.len(), 7 + 28 + 84);
    }

    #[test]
    fn test_moves_into_ruins_uses_board_before_move() {
        let mut board = Board::new(5).unwrap();
        board.move_agent_to(Agent::Red, 9).unwrap();

        let action = AgentMoveAction::new([(Agent::Red, 2)]);
        assert!(action.moves_into_ruins(&board));

        action.apply(&mut board).unwrap();
        assert_eq!(board.position(Agent::Red).unwrap(), RUINS_FIELD);
        // From the ruins two more steps lands on field 1
        assert!(!action.moves_into_ruins(&board));
    }

    #[test]
    fn test_apply_rejects_missing_agent_without_mutating() {
        let mut board = Board::new(5).unwrap();
        let action = AgentMoveAction::new([(Agent::Red, 1), (Agent::White, 1)]);
        assert!(action.apply(&mut board).is_err());
        assert_eq!(board.position(Agent::Red).unwrap(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AgentMoveAction::new([(Agent::Red, 2), (Agent::Blue, 1)]).to_string(),
            "AgentMove: Red +2, Blue +1"
        );
        assert_eq!(AgentMoveAction::no_move().to_string(), "AgentMove: no move, draw a card");
    }
}
