//! Game configuration.
//!
//! `GameConfig` captures everything that is fixed before the first turn:
//! how many players sit at the table, whether the card variant is in play,
//! whether chance nodes may be chosen explicitly, and the RNG seed.
//!
//! The board size follows from the player count: small tables get three
//! dummy agents, larger ones fill the board up to seven agents.

use serde::{Deserialize, Serialize};

use crate::error::{HeimlichError, Result};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 7;

/// Number of agents nobody owns for a table of `player_count` players.
///
/// Two or three players play with three dummies; four or more fill the
/// board up to seven agents.
#[must_use]
pub fn dummy_agents(player_count: usize) -> usize {
    if player_count <= 3 {
        3
    } else {
        7usize.saturating_sub(player_count)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-7).
    pub player_count: usize,

    /// Play the variant with the card stack and hands.
    pub with_cards: bool,

    /// Offer one explicit die-roll action per face in addition to the random roll.
    pub allow_custom_die_rolls: bool,

    /// Seed for die rolls, shuffles and the secret agent assignment.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            with_cards: false,
            allow_custom_die_rolls: false,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` players with default options.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Enable or disable the card variant.
    #[must_use]
    pub fn with_cards(mut self, with_cards: bool) -> Self {
        self.with_cards = with_cards;
        self
    }

    /// Enable or disable explicit die-roll actions.
    #[must_use]
    pub fn with_custom_die_rolls(mut self, allow: bool) -> Self {
        self.allow_custom_die_rolls = allow;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of agents on the board for this table.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.player_count + dummy_agents(self.player_count)
    }

    /// Reject unsupported player counts.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(HeimlichError::InvalidPlayerCount(self.player_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_agents() {
        assert_eq!(dummy_agents(2), 3);
        assert_eq!(dummy_agents(3), 3);
        assert_eq!(dummy_agents(4), 3);
        assert_eq!(dummy_agents(5), 2);
        assert_eq!(dummy_agents(6), 1);
        assert_eq!(dummy_agents(7), 0);
    }

    #[test]
    fn test_agent_count_stays_on_board() {
        for players in MIN_PLAYERS..=MAX_PLAYERS {
            let count = GameConfig::new(players).agent_count();
            assert!((5..=7).contains(&count), "{} players gave {} agents", players, count);
        }
    }

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new(4)
            .with_cards(true)
            .with_custom_die_rolls(true)
            .with_seed(7);

        assert_eq!(config.player_count, 4);
        assert!(config.with_cards);
        assert!(config.allow_custom_die_rolls);
        assert_eq!(config.seed, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_player_counts() {
        assert_eq!(
            GameConfig::new(1).validate(),
            Err(HeimlichError::InvalidPlayerCount(1))
        );
        assert_eq!(
            GameConfig::new(8).validate(),
            Err(HeimlichError::InvalidPlayerCount(8))
        );
    }

    #[test]
    fn test_game_config_serde() {
        let config = GameConfig::new(3).with_cards(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
