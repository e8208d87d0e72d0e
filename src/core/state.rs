//! The match aggregate.
//!
//! `GameState` owns both fighters, the chamber and all round/match
//! bookkeeping. It is the only thing engine operations mutate, and it
//! serializes to the camelCase JSON shape clients consume.

use serde::{Deserialize, Serialize};

use super::chamber::Chamber;
use super::fighter::{Fighter, FighterId};

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Setup,
    /// Round dealt, no shot fired yet.
    ItemSelection,
    Shooting,
    /// A fighter was knocked out, or the match is finished.
    GameOver,
}

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Winner(FighterId),
    /// Both fighters won the same number of rounds.
    Draw,
}

impl MatchResult {
    #[must_use]
    pub fn is_winner(&self, fighter: FighterId) -> bool {
        matches!(self, MatchResult::Winner(f) if *f == fighter)
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub id: String,
    pub player: Fighter,
    pub opponent: Fighter,
    pub current_turn: FighterId,
    #[serde(flatten)]
    pub chamber: Chamber,
    pub game_phase: GamePhase,
    /// 1-based round number.
    pub round: u32,
    pub max_rounds: u32,
    pub last_action: String,
    /// 1, or the boosted multiplier until the next shot resolves.
    pub damage_multiplier: u32,
}

impl GameState {
    #[must_use]
    pub fn fighter(&self, id: FighterId) -> &Fighter {
        match id {
            FighterId::Player => &self.player,
            FighterId::Opponent => &self.opponent,
        }
    }

    pub fn fighter_mut(&mut self, id: FighterId) -> &mut Fighter {
        match id {
            FighterId::Player => &mut self.player,
            FighterId::Opponent => &mut self.opponent,
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active(&self) -> &Fighter {
        self.fighter(self.current_turn)
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.game_phase == GamePhase::GameOver
    }

    /// True when the last round has been played out.
    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.round >= self.max_rounds
    }

    /// Winner by round wins; ties are a draw.
    #[must_use]
    pub fn standings(&self) -> MatchResult {
        use std::cmp::Ordering;

        match self.player.wins.cmp(&self.opponent.wins) {
            Ordering::Greater => MatchResult::Winner(FighterId::Player),
            Ordering::Less => MatchResult::Winner(FighterId::Opponent),
            Ordering::Equal => MatchResult::Draw,
        }
    }

    /// The match result once the final round is over.
    #[must_use]
    pub fn match_result(&self) -> Option<MatchResult> {
        (self.is_round_over() && self.is_final_round()).then(|| self.standings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Fighter, Region, ShotKind};
    use crate::items::Inventory;

    fn state() -> GameState {
        GameState {
            id: "g".to_string(),
            player: Fighter::new(FighterId::Player, "Ana", Region::Bisaya, 6, Inventory::new()),
            opponent: Fighter::new(FighterId::Opponent, "Tagalog Fighter", Region::Tagalog, 6, Inventory::new()),
            current_turn: FighterId::Player,
            chamber: Chamber::from_kinds([ShotKind::Live, ShotKind::Blank]),
            game_phase: GamePhase::ItemSelection,
            round: 1,
            max_rounds: 3,
            last_action: String::new(),
            damage_multiplier: 1,
        }
    }

    #[test]
    fn test_fighter_lookup() {
        let mut s = state();
        assert_eq!(s.fighter(FighterId::Opponent).name, "Tagalog Fighter");
        s.fighter_mut(FighterId::Player).health = 3;
        assert_eq!(s.player.health, 3);
        assert_eq!(s.active().id, FighterId::Player);
    }

    #[test]
    fn test_standings() {
        let mut s = state();
        assert_eq!(s.standings(), MatchResult::Draw);
        s.player.wins = 2;
        assert_eq!(s.standings(), MatchResult::Winner(FighterId::Player));
        s.opponent.wins = 3;
        assert_eq!(s.standings(), MatchResult::Winner(FighterId::Opponent));
        assert!(s.standings().is_winner(FighterId::Opponent));
        assert!(!MatchResult::Draw.is_winner(FighterId::Player));
    }

    #[test]
    fn test_match_result_only_after_final_round() {
        let mut s = state();
        s.game_phase = GamePhase::GameOver;
        assert_eq!(s.match_result(), None);

        s.round = 3;
        s.opponent.wins = 1;
        assert_eq!(s.match_result(), Some(MatchResult::Winner(FighterId::Opponent)));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(state()).unwrap();
        for key in [
            "id",
            "player",
            "opponent",
            "currentTurn",
            "chamber",
            "currentChamberIndex",
            "gamePhase",
            "round",
            "maxRounds",
            "lastAction",
            "damageMultiplier",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["gamePhase"], "item_selection");
        assert_eq!(json["currentTurn"], "player");

        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state());
    }
}
