//! Relocating the safe after a scoring round.

use serde::{Deserialize, Serialize};

use crate::board::{Board, FIELD_COUNT};
use crate::error::{HeimlichError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SafeMoveAction {
    field: u8,
}

impl SafeMoveAction {
    #[must_use]
    pub const fn new(field: u8) -> Self {
        Self { field }
    }

    /// Target field.
    #[must_use]
    pub fn field(&self) -> u8 {
        self.field
    }

    /// Every field except the safe's current one.
    #[must_use]
    pub fn possible_actions(board: &Board) -> Vec<SafeMoveAction> {
        (0..FIELD_COUNT)
            .filter(|&f| f != board.safe_position())
            .map(SafeMoveAction::new)
            .collect()
    }

    pub fn apply(&self, board: &mut Board) -> Result<()> {
        if self.field == board.safe_position() {
            return Err(HeimlichError::IllegalAction(format!(
                "safe is already on field {}",
                self.field
            )));
        }
        board.move_safe(self.field)
    }
}

impl std::fmt::Display for SafeMoveAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SafeMove: to field {}", self.field)
    }
}
