//! Property tests for move generation and random playouts.

use proptest::prelude::*;

use heimlich::actions::weak_compositions;
use heimlich::board::{Die, DieFace};
use heimlich::core::{GameConfig, GameRng, PlayerId};
use heimlich::game::{HeimlichGame, MAX_HAND_SIZE};
use heimlich::{Action, Phase};

fn binomial(n: u64, k: u64) -> u64 {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

fn face() -> impl Strategy<Value = DieFace> {
    prop::sample::select(Die::faces().to_vec())
}

/// Play `steps` random legal actions, checking invariants along the way.
fn playout(config: GameConfig, rng_seed: u64, steps: usize, disqualify: bool) -> HeimlichGame {
    let mut game = HeimlichGame::from_config(config).unwrap();
    let mut rng = GameRng::new(rng_seed);

    for step in 0..steps {
        if game.is_game_over() {
            assert!(game.possible_actions().is_empty());
            break;
        }
        if disqualify && step % 97 == 50 && game.active_player_count() > 2 {
            game = game.disqualify_current_player().unwrap();
        }

        let actions = game.possible_actions();
        assert!(!actions.is_empty());
        let action = rng.choose(&actions).unwrap().clone();
        let before = game.clone();
        game.apply_action(&action).unwrap();

        // The previous state is untouched by the successor
        assert_eq!(before.action_records().len() + 1, game.action_records().len());

        assert!(!game.is_disqualified(game.current_player()));
        assert!(game.skip_streak() <= game.active_player_count());
        for player in PlayerId::all(game.number_of_players()) {
            if let Some(hand) = game.hand(player) {
                assert!(hand.len() <= MAX_HAND_SIZE);
            }
        }
        if game.phase() == Phase::DieRoll {
            assert_eq!(game.current_player(), game.turn_owner());
        }
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn composition_count_matches_binomial(total in 0u8..=6, parts in 1usize..=7) {
        let comps = weak_compositions(total, parts);
        let expected = binomial(u64::from(total) + parts as u64 - 1, parts as u64 - 1);
        prop_assert_eq!(comps.len() as u64, expected);
        for c in &comps {
            prop_assert_eq!(c.len(), parts);
            prop_assert_eq!(c.iter().map(|&x| u32::from(x)).sum::<u32>(), u32::from(total));
        }
    }

    #[test]
    fn compositions_are_distinct(total in 0u8..=6, parts in 1usize..=7) {
        let comps = weak_compositions(total, parts);
        let mut sorted = comps.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), comps.len());
    }

    #[test]
    fn every_agent_move_applies(players in 2usize..=7, with_cards: bool, face in face()) {
        let config = GameConfig::new(players).with_cards(with_cards).with_custom_die_rolls(true);
        let game = HeimlichGame::from_config(config).unwrap();
        let rolled = game.do_action(&Action::custom_roll(face)).unwrap();

        let actions = rolled.possible_actions();
        prop_assert!(!actions.is_empty());
        prop_assert_eq!(actions.contains(&Action::no_move()), with_cards);
        for action in &actions {
            prop_assert!(rolled.is_valid_action(action));
            let next = rolled.do_action(action).unwrap();
            prop_assert_ne!(next.phase(), Phase::AgentMove);
        }
    }

    #[test]
    fn random_playouts_keep_invariants(
        players in 2usize..=7,
        with_cards: bool,
        seed in any::<u64>(),
        rng_seed in any::<u64>(),
    ) {
        let config = GameConfig::new(players).with_cards(with_cards).with_seed(seed);
        playout(config, rng_seed, 400, false);
    }

    #[test]
    fn random_playouts_with_disqualification(
        players in 3usize..=7,
        seed in any::<u64>(),
        rng_seed in any::<u64>(),
    ) {
        let config = GameConfig::new(players).with_cards(true).with_seed(seed);
        let game = playout(config, rng_seed, 400, true);
        prop_assert!(game.active_player_count() >= 2);
    }

    #[test]
    fn same_seed_same_playout(seed in any::<u64>(), rng_seed in any::<u64>()) {
        let config = GameConfig::new(4).with_cards(true).with_seed(seed);
        let a = playout(config.clone(), rng_seed, 200, false);
        let b = playout(config, rng_seed, 200, false);
        prop_assert_eq!(a.board(), b.board());
        prop_assert_eq!(a.action_records(), b.action_records());
    }
}
