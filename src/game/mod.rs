//! The game orchestrator and its builder.

pub mod builder;
pub mod game;

pub use builder::GameBuilder;
pub use game::{Hand, HeimlichGame, DISQUALIFIED_UTILITY, MAX_HAND_SIZE, STARTING_HAND_SIZE};
