//! The Heimlich & Co. game: phase state machine, legal-move generation,
//! hidden information and disqualification.
//!
//! ## Turn structure
//!
//! ```text
//! DieRoll -> AgentMove -> [CardPlay]* -> (SafeMove) -> DieRoll
//! ```
//!
//! The card round only exists when playing with cards. It passes from
//! player to player on every skip and ends once every active player has
//! skipped in a row. SafeMove follows only when some agent reached the
//! safe's field; points are awarded on entering it.
//!
//! ## Turn owner vs. current player
//!
//! The turn owner rolled the die. During the card round the current player
//! moves around the table; when the turn ends the next turn goes to the
//! active player after the turn owner.
//!
//! ## Cloning
//!
//! `do_action`, `game_for` and `disqualify_current_player` return new games.
//! The board, hands, stack and secret maps are owned values and the history
//! is a persistent `im::Vector`, so no clone can observe another's mutation.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::actions::{Action, ActionRecord, AgentMoveAction, DieRollAction, SafeMoveAction};
use crate::board::{Board, SAFE_START_FIELD};
use crate::cards::{Card, CardStack};
use crate::core::{Agent, GameConfig, GameRng, Phase, PlayerId};
use crate::error::{HeimlichError, Result};
use crate::rules::{Game, GameResult};

use super::builder::GameBuilder;

/// Most cards a player may hold.
pub const MAX_HAND_SIZE: usize = 4;

/// Cards dealt to each player before the first turn.
pub const STARTING_HAND_SIZE: usize = 2;

/// Utility reported for disqualified players; below any reachable score.
pub const DISQUALIFIED_UTILITY: f64 = f64::MIN;

/// A player's secret hand.
pub type Hand = SmallVec<[Card; MAX_HAND_SIZE]>;

#[derive(Clone, Debug)]
pub struct HeimlichGame {
    config: GameConfig,
    board: Board,
    player_agents: FxHashMap<PlayerId, Agent>,
    hands: FxHashMap<PlayerId, Hand>,
    stack: CardStack,
    history: im::Vector<ActionRecord>,
    current_player: PlayerId,
    turn_owner: PlayerId,
    turn: u32,
    phase: Phase,
    skip_streak: usize,
    disqualified: FxHashSet<PlayerId>,
    rng: GameRng,
}

impl HeimlichGame {
    /// New game with the default seed.
    pub fn new(player_count: usize, with_cards: bool) -> Result<Self> {
        Self::from_config(GameConfig::new(player_count).with_cards(with_cards))
    }

    pub fn from_config(config: GameConfig) -> Result<Self> {
        GameBuilder::new(config).build()
    }

    pub(crate) fn from_parts(
        config: GameConfig,
        board: Board,
        player_agents: FxHashMap<PlayerId, Agent>,
        hands: FxHashMap<PlayerId, Hand>,
        stack: CardStack,
        rng: GameRng,
    ) -> Self {
        Self {
            config,
            board,
            player_agents,
            hands,
            stack,
            history: im::Vector::new(),
            current_player: PlayerId::new(0),
            turn_owner: PlayerId::new(0),
            turn: 0,
            phase: Phase::DieRoll,
            skip_streak: 0,
            disqualified: FxHashSet::default(),
            rng,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn number_of_players(&self) -> usize {
        self.config.player_count
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The player whose die roll started the current turn.
    #[must_use]
    pub fn turn_owner(&self) -> PlayerId {
        self.turn_owner
    }

    /// Completed turns so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Consecutive skips in the current card round.
    #[must_use]
    pub fn skip_streak(&self) -> usize {
        self.skip_streak
    }

    #[must_use]
    pub fn is_with_cards(&self) -> bool {
        self.config.with_cards
    }

    #[must_use]
    pub fn allows_custom_die_rolls(&self) -> bool {
        self.config.allow_custom_die_rolls
    }

    /// Let search code pick die faces explicitly.
    pub fn set_allow_custom_die_rolls(&mut self, allow: bool) {
        self.config.allow_custom_die_rolls = allow;
    }

    /// The agent `player` controls, if visible in this copy.
    #[must_use]
    pub fn agent_of(&self, player: PlayerId) -> Option<Agent> {
        self.player_agents.get(&player).copied()
    }

    /// `player`'s hand, if visible in this copy.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&[Card]> {
        self.hands.get(&player).map(|h| h.as_slice())
    }

    #[must_use]
    pub fn card_stack(&self) -> &CardStack {
        &self.stack
    }

    #[must_use]
    pub fn is_disqualified(&self, player: PlayerId) -> bool {
        self.disqualified.contains(&player)
    }

    /// Disqualified players, in seat order.
    #[must_use]
    pub fn disqualified_players(&self) -> Vec<PlayerId> {
        let mut players: Vec<_> = self.disqualified.iter().copied().collect();
        players.sort_unstable();
        players
    }

    #[must_use]
    pub fn active_player_count(&self) -> usize {
        self.number_of_players() - self.disqualified.len()
    }

    #[must_use]
    pub fn action_records(&self) -> &im::Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn previous_action_record(&self) -> Option<&ActionRecord> {
        self.history.back()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    // === Legal actions ===

    /// Every legal action for the current player, without duplicates.
    #[must_use]
    pub fn possible_actions(&self) -> Vec<Action> {
        if self.is_game_over() {
            return Vec::new();
        }
        match self.phase {
            Phase::DieRoll => DieRollAction::possible_actions(self.config.allow_custom_die_rolls)
                .into_iter()
                .map(Action::DieRoll)
                .collect(),
            Phase::AgentMove => AgentMoveAction::possible_actions(&self.board, self.config.with_cards)
                .into_iter()
                .map(Action::AgentMove)
                .collect(),
            Phase::CardPlay => {
                let mut seen = FxHashSet::default();
                let mut actions = Vec::new();
                if let Some(hand) = self.hands.get(&self.current_player) {
                    for (i, card) in hand.iter().enumerate() {
                        if hand[..i].contains(card) {
                            continue;
                        }
                        for play in card.possible_actions(&self.board) {
                            if seen.insert(play.clone()) {
                                actions.push(Action::Card(play));
                            }
                        }
                    }
                }
                actions.push(Action::skip_card());
                actions
            }
            Phase::SafeMove => SafeMoveAction::possible_actions(&self.board)
                .into_iter()
                .map(Action::SafeMove)
                .collect(),
        }
    }

    /// Whether `action` is in [`HeimlichGame::possible_actions`].
    ///
    /// Agent moves are checked structurally instead of by enumeration.
    #[must_use]
    pub fn is_valid_action(&self, action: &Action) -> bool {
        if self.is_game_over() || action.phase() != self.phase {
            return false;
        }
        match action {
            Action::AgentMove(m) if m.is_no_move() => self.config.with_cards,
            Action::AgentMove(m) => {
                let Some(face) = self.board.last_die_roll() else {
                    return false;
                };
                let total_ok = u8::try_from(m.total()).map_or(false, |t| face.totals().contains(&t));
                total_ok && m.moves().iter().all(|&(a, _)| self.board.contains(a))
            }
            _ => self.possible_actions().contains(action),
        }
    }

    // === Transitions ===

    /// Apply `action` in place. On error the game is unchanged.
    pub fn apply_action(&mut self, action: &Action) -> Result<()> {
        if action.phase() != self.phase {
            return Err(HeimlichError::WrongPhase {
                action: action.phase(),
                phase: self.phase,
            });
        }
        if !self.is_valid_action(action) {
            return Err(HeimlichError::IllegalAction(action.to_string()));
        }

        let player = self.current_player;
        let into_ruins = matches!(action, Action::AgentMove(m) if m.moves_into_ruins(&self.board));

        let mut board = self.board.clone();
        let rolled = action.apply(&mut board, &mut self.rng)?;
        self.board = board;
        self.history
            .push_back(ActionRecord::new(player, action.clone(), self.turn, rolled));

        match action {
            Action::DieRoll(_) => self.enter_phase(Phase::AgentMove),
            Action::AgentMove(m) => {
                if self.config.with_cards {
                    if into_ruins || m.is_no_move() {
                        self.draw_card(player);
                    }
                    self.enter_phase(Phase::CardPlay);
                } else {
                    self.resolve_turn()?;
                }
            }
            Action::Card(play) => match play.card() {
                Some(card) => {
                    self.discard(player, card);
                    self.skip_streak = 0;
                }
                None => {
                    self.skip_streak += 1;
                    self.current_player = self.next_active_after(player);
                    if self.skip_streak >= self.active_player_count() {
                        self.resolve_turn()?;
                    }
                }
            },
            Action::SafeMove(_) => self.finish_turn(),
        }
        Ok(())
    }

    /// A new game with `action` applied.
    pub fn do_action(&self, action: &Action) -> Result<Self> {
        let mut next = self.clone();
        next.apply_action(action)?;
        Ok(next)
    }

    fn enter_phase(&mut self, phase: Phase) {
        tracing::debug!(from = %self.phase, to = %phase, player = %self.current_player, "phase change");
        self.phase = phase;
    }

    /// End of the moving part of a turn: score if an agent reached the safe.
    fn resolve_turn(&mut self) -> Result<()> {
        if self.board.scoring_triggered() {
            self.enter_safe_move()
        } else {
            self.finish_turn();
            Ok(())
        }
    }

    fn enter_safe_move(&mut self) -> Result<()> {
        self.current_player = self.turn_owner;
        self.skip_streak = 0;
        self.board.award_points();
        self.enter_phase(Phase::SafeMove);

        if self.disqualified.contains(&self.turn_owner) {
            self.board.move_safe(SAFE_START_FIELD)?;
            self.finish_turn();
        }
        Ok(())
    }

    fn finish_turn(&mut self) {
        let next = self.next_active_after(self.turn_owner);
        self.turn_owner = next;
        self.current_player = next;
        self.skip_streak = 0;
        self.turn += 1;
        self.enter_phase(Phase::DieRoll);
    }

    fn next_active_after(&self, player: PlayerId) -> PlayerId {
        let count = self.number_of_players();
        let mut next = player.next(count);
        for _ in 0..count {
            if !self.disqualified.contains(&next) {
                break;
            }
            next = next.next(count);
        }
        next
    }

    fn draw_card(&mut self, player: PlayerId) {
        let Some(hand) = self.hands.get_mut(&player) else {
            return;
        };
        if hand.len() >= MAX_HAND_SIZE {
            return;
        }
        if let Some(card) = self.stack.draw() {
            tracing::trace!(%player, remaining = self.stack.count(), "card drawn");
            hand.push(card);
        }
    }

    fn discard(&mut self, player: PlayerId, card: Card) {
        if let Some(hand) = self.hands.get_mut(&player) {
            if let Some(i) = hand.iter().position(|c| *c == card) {
                hand.remove(i);
                tracing::trace!(%player, %card, "card played");
            }
        }
    }

    // === Hidden information ===

    /// Copy of the game as `player` sees it.
    ///
    /// Only `player`'s own agent and hand survive. The stack is replaced by
    /// a freshly shuffled one of the same size, the RNG by a derived stream
    /// and the configured seed by that stream's seed, so the copy reveals
    /// neither the set-up, the deck order nor future rolls.
    pub fn game_for(&self, player: PlayerId) -> Result<Self> {
        if player.index() >= self.number_of_players() {
            return Err(HeimlichError::UnknownPlayer(player));
        }
        let mut view = self.clone();
        view.player_agents.retain(|p, _| *p == player);
        view.hands.retain(|p, _| *p == player);
        view.rng = self
            .rng
            .for_context(&format!("view:{}:{}", player.index(), self.history.len()));
        view.config.seed = view.rng.seed();
        view.stack = CardStack::with_size(self.stack.count(), &mut view.rng)?;
        Ok(view)
    }

    // === Disqualification ===

    /// A new game without the current player in the rotation.
    ///
    /// Rejected when only two active players remain.
    pub fn disqualify_current_player(&self) -> Result<Self> {
        let active = self.active_player_count();
        if active <= 2 {
            return Err(HeimlichError::CannotDisqualify { active });
        }

        let mut game = self.clone();
        let player = game.current_player;
        game.disqualified.insert(player);
        tracing::info!(%player, phase = %game.phase, "player disqualified");

        match game.phase {
            Phase::DieRoll | Phase::AgentMove => game.finish_turn(),
            Phase::CardPlay => {
                game.current_player = game.next_active_after(player);
                if game.skip_streak >= game.active_player_count() {
                    game.resolve_turn()?;
                }
            }
            Phase::SafeMove => {
                game.board.move_safe(SAFE_START_FIELD)?;
                game.finish_turn();
            }
        }
        Ok(game)
    }

    // === Outcome ===

    /// Final result once the game is over.
    ///
    /// Winners are the active players whose agents hold the top score.
    /// A view from [`HeimlichGame::game_for`] only knows the viewer's agent,
    /// so results and utilities are only meaningful on the full game.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        let top = self.board.max_score();
        let mut winners: Vec<PlayerId> = self
            .player_agents
            .iter()
            .filter(|(p, a)| !self.disqualified.contains(*p) && self.board.score(**a) == Ok(top))
            .map(|(p, _)| *p)
            .collect();
        winners.sort_unstable();

        Some(match winners.len() {
            0 => GameResult::NoWinner,
            1 => GameResult::Winner(winners[0]),
            _ => GameResult::Winners(winners),
        })
    }

    /// The player's agent's score, with end-of-game and disqualification rules.
    ///
    /// On a redacted view this is computed from the viewer's agent alone.
    pub fn utility_value(&self, player: PlayerId) -> Result<f64> {
        let agent = self
            .player_agents
            .get(&player)
            .copied()
            .ok_or(HeimlichError::UnknownPlayer(player))?;
        if self.disqualified.contains(&player) {
            return Ok(DISQUALIFIED_UTILITY);
        }
        let score = f64::from(self.board.score(agent)?);
        match self.result() {
            Some(GameResult::NoWinner) => Ok(0.0),
            _ => Ok(score),
        }
    }
}

impl Game for HeimlichGame {
    type Action = Action;
    type Record = ActionRecord;

    fn number_of_players(&self) -> usize {
        HeimlichGame::number_of_players(self)
    }

    fn current_player(&self) -> PlayerId {
        HeimlichGame::current_player(self)
    }

    fn possible_actions(&self) -> Vec<Action> {
        HeimlichGame::possible_actions(self)
    }

    fn is_valid_action(&self, action: &Action) -> bool {
        HeimlichGame::is_valid_action(self, action)
    }

    fn do_action(&self, action: &Action) -> Result<Self> {
        HeimlichGame::do_action(self, action)
    }

    fn game_for(&self, player: PlayerId) -> Result<Self> {
        HeimlichGame::game_for(self, player)
    }

    fn is_game_over(&self) -> bool {
        HeimlichGame::is_game_over(self)
    }

    fn utility_value(&self, player: PlayerId) -> Result<f64> {
        HeimlichGame::utility_value(self, player)
    }

    fn disqualify_current_player(&self) -> Result<Self> {
        HeimlichGame::disqualify_current_player(self)
    }

    fn action_records(&self) -> &im::Vector<ActionRecord> {
        HeimlichGame::action_records(self)
    }
}
