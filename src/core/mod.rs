//! Core engine types: players, agents, phases, RNG, configuration.

pub mod agent;
pub mod player;
pub mod phase;
pub mod rng;
pub mod config;

pub use agent::{Agent, MAX_AGENTS, MIN_AGENTS};
pub use player::PlayerId;
pub use phase::Phase;
pub use rng::GameRng;
pub use config::{dummy_agents, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
