//! # heimlich
//!
//! A deterministic rules engine for the hidden-role board game
//! Heimlich & Co., built to be driven by game-playing harnesses and
//! search algorithms.
//!
//! ## Design Principles
//!
//! 1. **Legal moves first**: every phase enumerates its complete legal
//!    action set; anything outside it is rejected without touching state.
//!
//! 2. **Values, not references**: boards, cards and actions are plain
//!    values. Cloning a game yields a fully independent copy.
//!
//! 3. **Hidden information by construction**: `game_for(player)` strips
//!    every secret the player is not entitled to see.
//!
//! ## Architecture
//!
//! - **Closed sums**: cards and actions are enums with exhaustive matching.
//!
//! - **Persistent history**: the action history is an `im::Vector`, so
//!   `do_action` clones are cheap for tree search.
//!
//! - **Seeded randomness**: die rolls, shuffles and the secret agent
//!   assignment all come from one ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: players, agents, phases, RNG, configuration
//! - `board`: board state and the die
//! - `cards`: card specifications, families and the draw pile
//! - `actions`: the four action kinds and move generation
//! - `rules`: harness contract and game results
//! - `game`: the orchestrator

pub mod core;
pub mod error;
pub mod board;
pub mod cards;
pub mod actions;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Agent, GameConfig, GameRng, Phase, PlayerId};

pub use crate::error::{ErrorKind, HeimlichError, Result};

pub use crate::board::{Board, Die, DieFace};

pub use crate::cards::{Card, CardSpecification, CardStack, MoveAgentsKind};

pub use crate::actions::{
    Action, ActionRecord, AgentMoveAction, CardAction, DieRollAction, SafeMoveAction,
};

pub use crate::rules::{Game, GameResult};

pub use crate::game::{GameBuilder, HeimlichGame};
