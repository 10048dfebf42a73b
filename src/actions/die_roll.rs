//! Rolling the die.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Die, DieFace};
use crate::core::GameRng;

/// Start of a turn: roll the die, or, when custom rolls are enabled, name a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieRollAction {
    Random,
    Custom(DieFace),
}

impl DieRollAction {
    /// Legal rolls: the random roll, plus one custom roll per face if allowed.
    #[must_use]
    pub fn possible_actions(allow_custom: bool) -> Vec<DieRollAction> {
        let mut actions = Vec::with_capacity(Die::faces().len() + 1);
        if allow_custom {
            actions.extend(Die::faces().iter().map(|&face| DieRollAction::Custom(face)));
        }
        actions.push(DieRollAction::Random);
        actions
    }

    #[must_use]
    pub fn is_random(&self) -> bool {
        matches!(self, DieRollAction::Random)
    }

    /// Record the face on the board and return it.
    pub fn apply(&self, board: &mut Board, rng: &mut GameRng) -> DieFace {
        let face = match self {
            DieRollAction::Random => Die::roll(rng),
            DieRollAction::Custom(face) => *face,
        };
        tracing::trace!(%face, random = self.is_random(), "die rolled");
        board.set_last_die_roll(Some(face));
        face
    }
}

impl std::fmt::Display for DieRollAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DieRollAction::Random => f.write_str("DieRoll: random"),
            DieRollAction::Custom(face) => write!(f, "DieRoll: custom {}", face),
        }
    }
}
