//! Fluent construction of games, including custom starting positions.

use rustc_hash::{FxHashMap, FxHashSet};

use super::game::{Hand, HeimlichGame, MAX_HAND_SIZE, STARTING_HAND_SIZE};
use crate::board::Board;
use crate::cards::{Card, CardStack};
use crate::core::{Agent, GameConfig, GameRng, PlayerId};
use crate::error::{HeimlichError, Result};

/// Builder for [`HeimlichGame`].
///
/// Anything not set explicitly is derived from the config: a fresh board,
/// a shuffled secret agent assignment, a shuffled standard deck and
/// two-card opening hands.
///
/// ```
/// use heimlich::core::{Agent, GameConfig};
/// use heimlich::board::Board;
/// use heimlich::game::GameBuilder;
///
/// let mut board = Board::new(6).unwrap();
/// board.move_safe(2).unwrap();
///
/// let game = GameBuilder::new(GameConfig::new(3))
///     .board(board)
///     .assign_agents(vec![Agent::Red, Agent::Blue, Agent::Green])
///     .build()
///     .unwrap();
/// assert_eq!(game.board().safe_position(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: GameConfig,
    board: Option<Board>,
    assignment: Option<Vec<Agent>>,
    stack: Option<CardStack>,
    hands: FxHashMap<PlayerId, Vec<Card>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: None,
            assignment: None,
            stack: None,
            hands: FxHashMap::default(),
        }
    }

    /// Start from a custom board. Its agent count must suit the player count.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Give player `i` the agent `agents[i]` instead of a random one.
    #[must_use]
    pub fn assign_agents(mut self, agents: Vec<Agent>) -> Self {
        self.assignment = Some(agents);
        self
    }

    /// Use `stack` as the draw pile instead of a shuffled standard deck.
    #[must_use]
    pub fn stack(mut self, stack: CardStack) -> Self {
        self.stack = Some(stack);
        self
    }

    /// Give `player` exactly these cards instead of a dealt opening hand.
    #[must_use]
    pub fn hand(mut self, player: PlayerId, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hands.insert(player, cards.into_iter().collect());
        self
    }

    pub fn build(self) -> Result<HeimlichGame> {
        let GameBuilder {
            config,
            board,
            assignment,
            stack,
            mut hands,
        } = self;
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let player_count = config.player_count;

        let board = match board {
            Some(board) if board.agent_count() != config.agent_count() => {
                return Err(HeimlichError::InvalidAgentCount(board.agent_count()));
            }
            Some(board) => board,
            None => Board::new(config.agent_count())?,
        };

        let agents = match assignment {
            Some(agents) => {
                check_assignment(&agents, player_count, &board)?;
                agents
            }
            None => {
                let mut agents: Vec<Agent> = board.agents().collect();
                rng.shuffle(&mut agents);
                agents.truncate(player_count);
                agents
            }
        };
        let player_agents: FxHashMap<PlayerId, Agent> = PlayerId::all(player_count).zip(agents).collect();

        if !config.with_cards && (stack.is_some() || !hands.is_empty()) {
            return Err(HeimlichError::InvalidAssignment("hands and stacks need the card variant"));
        }
        if hands.keys().any(|p| p.index() >= player_count) {
            return Err(HeimlichError::InvalidAssignment("hand given to a player not at the table"));
        }

        let mut stack = match stack {
            Some(stack) => stack,
            None if config.with_cards => CardStack::standard(&mut rng),
            None => CardStack::new(),
        };

        let mut dealt: FxHashMap<PlayerId, Hand> = FxHashMap::default();
        for player in PlayerId::all(player_count) {
            let hand: Hand = match hands.remove(&player) {
                Some(cards) if cards.len() > MAX_HAND_SIZE => {
                    return Err(HeimlichError::InvalidHand {
                        given: cards.len(),
                        max: MAX_HAND_SIZE,
                    });
                }
                Some(cards) => cards.into_iter().collect(),
                None if config.with_cards => {
                    std::iter::from_fn(|| stack.draw()).take(STARTING_HAND_SIZE).collect()
                }
                None => Hand::new(),
            };
            dealt.insert(player, hand);
        }

        tracing::debug!(
            players = player_count,
            agents = board.agent_count(),
            with_cards = config.with_cards,
            seed = config.seed,
            "game created"
        );
        Ok(HeimlichGame::from_parts(config, board, player_agents, dealt, stack, rng))
    }
}

fn check_assignment(agents: &[Agent], player_count: usize, board: &Board) -> Result<()> {
    if agents.len() != player_count {
        return Err(HeimlichError::InvalidAssignment("need exactly one agent per player"));
    }
    if let Some(&missing) = agents.iter().find(|a| !board.contains(**a)) {
        return Err(HeimlichError::AgentNotInPlay(missing));
    }
    let distinct: FxHashSet<_> = agents.iter().collect();
    if distinct.len() != agents.len() {
        return Err(HeimlichError::InvalidAssignment("players must control distinct agents"));
    }
    Ok(())
}
