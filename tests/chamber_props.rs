//! Property tests over chamber generation and random play.

use proptest::prelude::*;

use shell_duel::{
    Action, Aim, Chamber, DuelConfig, DuelEngine, FighterId, GamePhase, GameRng, RandomSource, Region, RoundStart,
    ShotKind,
};

proptest! {
    #[test]
    fn prop_generated_chamber_shape(seed in any::<u64>()) {
        let chamber = Chamber::generate(&DuelConfig::default(), &mut GameRng::new(seed));
        let live = chamber.shots().iter().filter(|s| s.kind == ShotKind::Live).count();

        prop_assert_eq!(chamber.len(), 8);
        prop_assert!((3..=5).contains(&live));
        prop_assert_eq!(chamber.index(), 0);
        prop_assert!(chamber.shots().iter().all(|s| !s.revealed));
        prop_assert_eq!(chamber.info().total, 8);
    }

    #[test]
    fn prop_custom_live_range(seed in any::<u64>(), min in 0usize..4, extra in 0usize..4) {
        let config = DuelConfig::default().with_chamber_size(10).with_live_range(min, min + extra);
        let chamber = Chamber::generate(&config, &mut GameRng::new(seed));
        let live = chamber.info().live;

        prop_assert_eq!(chamber.len(), 10);
        prop_assert!(live >= min && live <= min + extra);
    }

    #[test]
    fn prop_chamber_info_is_pure(seed in any::<u64>(), shots in 0usize..8) {
        let mut chamber = Chamber::generate(&DuelConfig::default(), &mut GameRng::new(seed));
        for _ in 0..shots {
            chamber.fire();
        }
        let before = chamber.clone();
        let info = chamber.info();

        prop_assert_eq!(&chamber, &before);
        prop_assert_eq!(info.total, 8 - shots);
        prop_assert_eq!(info.live + info.blank, info.total);
    }

    /// Random play never breaks the state invariants and always finishes.
    #[test]
    fn prop_random_matches_hold_invariants(seed in any::<u64>()) {
        let engine = DuelEngine::new(DuelConfig::default()).unwrap();
        let mut rng = GameRng::new(seed);
        let mut player_rng = rng.fork();
        let mut state = engine.create_game("prop", "Ana", Region::Bisaya, &mut rng);
        let mut rounds_won = 0;

        loop {
            prop_assert!(state.chamber.index() <= state.chamber.len());
            prop_assert!(state.player.health <= state.player.max_health);
            prop_assert!(state.opponent.health <= state.opponent.max_health);
            prop_assert!(state.damage_multiplier == 1 || state.damage_multiplier == 2);

            if state.is_round_over() {
                rounds_won += 1;
                prop_assert_eq!(state.player.wins + state.opponent.wins, rounds_won);
                prop_assert!(state.player.is_knocked_out() != state.opponent.is_knocked_out());
                match engine.start_new_round(&mut state, &mut rng) {
                    RoundStart::Started(round) => prop_assert_eq!(round, rounds_won + 1),
                    RoundStart::MatchOver(_) => break,
                }
                continue;
            }

            match state.current_turn {
                FighterId::Player => {
                    let actions = engine.legal_actions(&state, FighterId::Player);
                    prop_assert!(actions.contains(&Action::Shoot(Aim::AtOpponent)));
                    let action = actions[player_rng.next_below(actions.len())].clone();
                    engine.apply(&mut state, FighterId::Player, &action, &mut rng).unwrap();
                }
                FighterId::Opponent => {
                    let turn = engine.ai_turn(&mut state, &mut rng).unwrap();
                    prop_assert!((0.0..=1.0).contains(&turn.decision.live_probability));
                }
            }
        }

        prop_assert_eq!(state.round, 3);
        prop_assert_eq!(state.game_phase, GamePhase::GameOver);
        prop_assert_eq!(state.player.wins + state.opponent.wins, 3);
    }
}
