//! The contract a game offers to a game-playing harness.
//!
//! A harness repeatedly asks which actions are legal, applies one, and
//! checks whether the game has ended. Search agents additionally branch by
//! cloning (`do_action`), ask for redacted views of hidden information
//! (`game_for`) and read per-player utilities.
//!
//! ## Implementation Notes
//!
//! - `possible_actions`: empty once the game is over
//! - `do_action`: never mutates the receiver
//! - `game_for`: reveals only the requesting player's secrets

use crate::core::PlayerId;
use crate::error::Result;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players' agents share the top score.
    Winners(Vec<PlayerId>),
    /// The top score belongs to no active player.
    NoWinner,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::NoWinner => false,
        }
    }
}

/// Host-harness contract.
pub trait Game: Sized {
    type Action: PartialEq;
    type Record: Clone;

    fn number_of_players(&self) -> usize;

    /// Player expected to act next.
    fn current_player(&self) -> PlayerId;

    /// Every legal action for the current player.
    fn possible_actions(&self) -> Vec<Self::Action>;

    /// Membership in [`Game::possible_actions`].
    fn is_valid_action(&self, action: &Self::Action) -> bool {
        self.possible_actions().contains(action)
    }

    /// A new game with `action` applied; the receiver is unchanged.
    fn do_action(&self, action: &Self::Action) -> Result<Self>;

    /// Copy of the game as `player` is allowed to see it.
    fn game_for(&self, player: PlayerId) -> Result<Self>;

    fn is_game_over(&self) -> bool;

    fn utility_value(&self, player: PlayerId) -> Result<f64>;

    /// A new game with the current player removed from the rotation.
    fn disqualify_current_player(&self) -> Result<Self>;

    /// Every action taken so far, oldest first.
    fn action_records(&self) -> &im::Vector<Self::Record>;
}
