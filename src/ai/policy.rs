//! Opponent decision policies.
//!
//! A policy looks at the state on the AI's turn and decides which item (if
//! any) to use and where to aim. It only reads the state; the engine applies
//! the decision.

use crate::core::{GameState, RandomSource};
use crate::rules::Aim;

use super::config::HeuristicConfig;

/// What the AI will do this turn.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    /// Item to use before firing.
    pub item: Option<String>,

    /// Where to fire.
    pub aim: Aim,

    /// Live probability the decision was based on.
    pub live_probability: f64,
}

/// Policy for the fighter whose turn it is.
pub trait OpponentPolicy {
    /// Decide a turn. The chamber is loaded when this is called.
    fn decide<R: RandomSource>(&self, state: &GameState, rng: &mut R) -> Decision;
}

/// Probability-threshold heuristic.
///
/// Draw order is fixed so seeded games replay exactly:
/// 1. item-use roll (every turn)
/// 2. item index (only when the roll succeeds and the inventory is not empty)
/// 3. self-shot coin (every turn)
///
/// The AI shoots itself only when the live probability is under the
/// threshold and the coin succeeds.
#[derive(Clone, Debug, Default)]
pub struct Heuristic {
    config: HeuristicConfig,
}

impl Heuristic {
    #[must_use]
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }
}

impl OpponentPolicy for Heuristic {
    fn decide<R: RandomSource>(&self, state: &GameState, rng: &mut R) -> Decision {
        let live_probability = state.chamber.live_probability();
        let items = &state.active().items;

        let item = if rng.chance(self.config.item_use_chance) && !items.is_empty() {
            Some(items[rng.next_below(items.len())].id.clone())
        } else {
            None
        };

        let coin = rng.chance(self.config.self_shot_chance);
        let aim = if live_probability < self.config.self_shot_threshold && coin {
            Aim::AtSelf
        } else {
            Aim::AtOpponent
        };

        log::debug!(
            "[ai] {} decides: item {:?}, aim {:?} (p_live {:.2})",
            state.current_turn,
            item,
            aim,
            live_probability
        );

        Decision {
            item,
            aim,
            live_probability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShotKind::{self, Blank, Live};
    use crate::core::{Chamber, DuelConfig, FighterId, GameRng, Region, ScriptedRng};
    use crate::rules::DuelEngine;

    fn opponent_turn(kinds: &[ShotKind]) -> GameState {
        let engine = DuelEngine::new(DuelConfig::default()).unwrap();
        let mut state = engine.create_game("g", "Ana", Region::Bisaya, &mut GameRng::new(1));
        state.chamber = Chamber::from_kinds(kinds.iter().copied());
        state.current_turn = FighterId::Opponent;
        state
    }

    #[test]
    fn test_low_probability_and_coin_shoots_self() {
        // 1 live in 4 = 0.25
        let state = opponent_turn(&[Blank, Live, Blank, Blank]);
        let mut rng = ScriptedRng::floats([0.9, 0.1]);

        let decision = Heuristic::default().decide(&state, &mut rng);

        assert_eq!(decision.item, None);
        assert_eq!(decision.aim, Aim::AtSelf);
        assert_eq!(decision.live_probability, 0.25);
        assert!(rng.drained());
    }

    #[test]
    fn test_failed_coin_shoots_opponent() {
        let state = opponent_turn(&[Blank, Live, Blank, Blank]);
        let mut rng = ScriptedRng::floats([0.9, 0.7]);

        assert_eq!(Heuristic::default().decide(&state, &mut rng).aim, Aim::AtOpponent);
    }

    #[test]
    fn test_high_probability_ignores_coin() {
        // 0.5 is not under the 0.4 threshold
        let state = opponent_turn(&[Live, Blank]);
        let mut rng = ScriptedRng::floats([0.9, 0.0]);

        let decision = Heuristic::default().decide(&state, &mut rng);
        assert_eq!(decision.aim, Aim::AtOpponent);
        assert_eq!(rng.floats_drawn(), 2);
    }

    #[test]
    fn test_item_roll_then_index_then_coin() {
        let state = opponent_turn(&[Blank, Blank, Blank, Live]);
        let expected = state.opponent.items[2].id.clone();
        let mut rng = ScriptedRng::new([0.1, 0.5], [2]);

        let decision = Heuristic::default().decide(&state, &mut rng);

        assert_eq!(decision.item, Some(expected));
        assert_eq!(decision.aim, Aim::AtSelf);
        assert_eq!(rng.floats_drawn(), 2);
        assert_eq!(rng.ints_drawn(), 1);
    }

    #[test]
    fn test_empty_inventory_skips_index_draw() {
        let mut state = opponent_turn(&[Live]);
        state.opponent.items.clear();
        let mut rng = ScriptedRng::floats([0.0, 0.0]);

        let decision = Heuristic::default().decide(&state, &mut rng);
        assert_eq!(decision.item, None);
        assert_eq!(rng.ints_drawn(), 0);
        assert_eq!(rng.floats_drawn(), 2);
    }

    #[test]
    fn test_aggressive_never_shoots_self() {
        let state = opponent_turn(&[Blank, Blank, Blank, Blank]);
        let policy = Heuristic::new(HeuristicConfig::aggressive());
        let mut rng = GameRng::new(5);

        for _ in 0..50 {
            let decision = policy.decide(&state, &mut rng);
            assert_eq!(decision.aim, Aim::AtOpponent);
            assert_eq!(decision.item, None);
        }
    }
}
