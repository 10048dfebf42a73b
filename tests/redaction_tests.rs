//! Hidden information and clone independence.
//!
//! `game_for` produces the copy a player is allowed to see; `do_action`
//! produces successors that share nothing mutable with their parent.

use heimlich::board::{Board, DieFace};
use heimlich::cards::{Card, MoveAgentsKind};
use heimlich::core::{Agent, GameConfig, Phase, PlayerId};
use heimlich::error::HeimlichError;
use heimlich::game::{GameBuilder, HeimlichGame};
use heimlich::{Action, GameResult};

fn card_game(players: usize) -> HeimlichGame {
    GameBuilder::new(
        GameConfig::new(players)
            .with_cards(true)
            .with_custom_die_rolls(true)
            .with_seed(5),
    )
    .build()
    .unwrap()
}

/// Test that a view keeps only the viewer's own agent.
#[test]
fn test_view_hides_other_agents() {
    let game = card_game(4);
    let viewer = PlayerId::new(2);
    let view = game.game_for(viewer).unwrap();

    assert_eq!(view.agent_of(viewer), game.agent_of(viewer));
    for other in PlayerId::all(4).filter(|&p| p != viewer) {
        assert!(game.agent_of(other).is_some());
        assert_eq!(view.agent_of(other), None);
    }
}

/// Test that a view keeps only the viewer's own hand.
#[test]
fn test_view_hides_other_hands() {
    let game = card_game(3);
    let view = game.game_for(PlayerId::new(0)).unwrap();

    assert_eq!(view.hand(PlayerId::new(0)), game.hand(PlayerId::new(0)));
    assert_eq!(view.hand(PlayerId::new(1)), None);
    assert_eq!(view.hand(PlayerId::new(2)), None);
}

/// Test that a view's stack has the right size but not the real order.
#[test]
fn test_view_replaces_stack() {
    let game = card_game(2);
    let view = game.game_for(PlayerId::new(1)).unwrap();

    assert_eq!(view.card_stack().count(), game.card_stack().count());
    // A freshly shuffled 21-card stack matching the real one is vanishingly unlikely
    assert_ne!(view.card_stack(), game.card_stack());
}

/// Test that a view's config cannot be used to rebuild the hidden set-up.
#[test]
fn test_view_config_does_not_rebuild_secrets() {
    let game = GameBuilder::new(GameConfig::new(5).with_cards(true).with_seed(1234))
        .build()
        .unwrap();
    let viewer = PlayerId::new(0);
    let view = game.game_for(viewer).unwrap();

    assert_ne!(view.config().seed, game.config().seed);
    assert_eq!(view.config().player_count, game.config().player_count);
    assert_eq!(view.config().with_cards, game.config().with_cards);

    let rebuilt = HeimlichGame::from_config(view.config().clone()).unwrap();
    assert_ne!(rebuilt.card_stack(), game.card_stack());
    let all_hidden_match = PlayerId::all(5)
        .filter(|&p| p != viewer)
        .all(|p| rebuilt.agent_of(p) == game.agent_of(p) && rebuilt.hand(p) == game.hand(p));
    assert!(!all_hidden_match);
}

/// Test that public state survives redaction.
#[test]
fn test_view_keeps_public_state() {
    let mut game = card_game(3);
    game.apply_action(&Action::custom_roll(DieFace::Steps(3))).unwrap();
    game.apply_action(&Action::move_agents([(Agent::Red, 2), (Agent::Green, 1)]))
        .unwrap();

    let view = game.game_for(PlayerId::new(1)).unwrap();
    assert_eq!(view.board(), game.board());
    assert_eq!(view.phase(), game.phase());
    assert_eq!(view.current_player(), game.current_player());
    assert_eq!(view.action_records(), game.action_records());
}

/// Test that unknown viewers are rejected.
#[test]
fn test_view_unknown_player() {
    let game = card_game(3);
    assert_eq!(
        game.game_for(PlayerId::new(3)).unwrap_err(),
        HeimlichError::UnknownPlayer(PlayerId::new(3))
    );
}

/// Test that a view cannot report utilities of hidden players.
#[test]
fn test_view_utility_of_hidden_player() {
    let view = card_game(3).game_for(PlayerId::new(0)).unwrap();
    assert_eq!(view.utility_value(PlayerId::new(0)).unwrap(), 0.0);
    assert_eq!(
        view.utility_value(PlayerId::new(1)).unwrap_err(),
        HeimlichError::UnknownPlayer(PlayerId::new(1))
    );
}

/// Test that a view's result only accounts for the viewer's agent.
#[test]
fn test_view_result_sees_only_viewer() {
    let mut board = Board::new(5).unwrap();
    board.set_score(Agent::Red, 10).unwrap();
    board.set_score(Agent::Blue, 42).unwrap();
    let game = GameBuilder::new(GameConfig::new(2))
        .board(board)
        .assign_agents(vec![Agent::Red, Agent::Blue])
        .build()
        .unwrap();
    assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::new(1))));
    assert_eq!(game.utility_value(PlayerId::new(0)).unwrap(), 10.0);

    let view = game.game_for(PlayerId::new(0)).unwrap();
    assert_eq!(view.result(), Some(GameResult::NoWinner));
    assert_eq!(view.utility_value(PlayerId::new(0)).unwrap(), 0.0);
}

/// Test that the viewer can still play on from the view.
#[test]
fn test_view_is_playable() {
    let game = card_game(2);
    let view = game.game_for(PlayerId::new(0)).unwrap();

    let rolled = view.do_action(&Action::custom_roll(DieFace::Steps(1))).unwrap();
    assert_eq!(rolled.phase(), Phase::AgentMove);
    let moved = rolled.do_action(&Action::no_move()).unwrap();
    assert_eq!(moved.phase(), Phase::CardPlay);
    assert_eq!(moved.hand(PlayerId::new(0)).unwrap().len(), 3);
}

/// Test that the same view is produced twice for the same state.
#[test]
fn test_view_is_deterministic() {
    let game = card_game(3);
    let a = game.game_for(PlayerId::new(1)).unwrap();
    let b = game.game_for(PlayerId::new(1)).unwrap();
    assert_eq!(a.card_stack(), b.card_stack());
}

/// Test that mutating a successor never shows through in its parent.
#[test]
fn test_do_action_clones_are_independent() {
    let to_church = Card::MoveAgents(MoveAgentsKind::AllToChurch);
    let game = GameBuilder::new(GameConfig::new(2).with_cards(true).with_custom_die_rolls(true))
        .hand(PlayerId::new(0), [to_church, Card::MoveSafe])
        .build()
        .unwrap();
    let rolled = game.do_action(&Action::custom_roll(DieFace::Steps(4))).unwrap();
    let moved = rolled.do_action(&Action::move_agents([(Agent::Red, 4)])).unwrap();

    let mut child = moved.clone();
    child.apply_action(&Action::play_card(Card::MoveSafe, [], 0)).unwrap();
    child.apply_action(&Action::play_card(to_church, [], 0)).unwrap();

    // Parent states are exactly as they were
    assert_eq!(game.phase(), Phase::DieRoll);
    assert!(game.action_records().is_empty());
    assert_eq!(rolled.action_records().len(), 1);
    assert_eq!(moved.action_records().len(), 2);
    assert_eq!(moved.board().position(Agent::Red).unwrap(), 4);
    assert_eq!(moved.board().safe_position(), 7);
    assert_eq!(moved.hand(PlayerId::new(0)).unwrap().len(), 2);

    assert_eq!(child.board().position(Agent::Red).unwrap(), 0);
    assert_eq!(child.board().safe_position(), 0);
    assert!(child.hand(PlayerId::new(0)).unwrap().is_empty());
    assert_eq!(child.action_records().len(), 4);
}

/// Test that sibling successors do not interfere.
#[test]
fn test_sibling_successors() {
    let game = card_game(2).do_action(&Action::custom_roll(DieFace::OneToThree)).unwrap();
    let successors: Vec<HeimlichGame> = game
        .possible_actions()
        .iter()
        .map(|a| game.do_action(a).unwrap())
        .collect();

    for (action, next) in game.possible_actions().iter().zip(&successors) {
        assert_eq!(next.previous_action_record().unwrap().action, *action);
        assert_eq!(next.action_records().len(), 2);
    }
    assert_eq!(game.action_records().len(), 1);
}
