//! The harness-facing game contract.
//!
//! `Game` is what a game-playing harness (or a search algorithm) needs:
//! - Legal actions for the current player
//! - Pure and in-place state transitions
//! - Redacted per-player views, utilities and the end-of-game result

pub mod engine;

pub use engine::{Game, GameResult};
