//! Actions a fighter can take on its turn, and what they produced.

use serde::{Deserialize, Serialize};

use crate::ai::Decision;
use crate::core::{FighterId, MatchResult, ShotKind};
use crate::items::ItemEffect;

/// Where a shot is aimed, relative to the shooter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aim {
    AtSelf,
    AtOpponent,
}

/// A complete turn action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Shoot(Aim),
    UseItem(String),
}

/// How a fired shot resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    Blank,
    /// Live, absorbed by the target's shield.
    Blocked,
    Hit,
}

/// Everything a resolved shot did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotReport {
    pub shooter: FighterId,
    pub target: FighterId,
    pub kind: ShotKind,
    pub outcome: ShotOutcome,
    /// Damage dealt; 0 for blanks and blocked shots.
    pub damage: u32,
    pub knockout: bool,
    /// The chamber was regenerated before this shot.
    pub reloaded: bool,
}

/// Result of an item use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOutcome {
    /// The item was consumed. `peeked` is set for peek items.
    Used {
        effect: ItemEffect,
        peeked: Option<ShotKind>,
    },
    /// No item with that id and uses left; nothing changed.
    NoSuchItem,
    /// A reserved effect; nothing changed and the item was kept.
    Unsupported(ItemEffect),
}

impl ItemOutcome {
    #[must_use]
    pub fn is_used(&self) -> bool {
        matches!(self, ItemOutcome::Used { .. })
    }
}

/// Result of [`Action`] application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Shot(ShotReport),
    Item(ItemOutcome),
}

impl Outcome {
    /// Damage dealt by the action.
    #[must_use]
    pub fn damage(&self) -> u32 {
        match self {
            Outcome::Shot(report) => report.damage,
            Outcome::Item(_) => 0,
        }
    }
}

/// Everything an AI turn did.
#[derive(Clone, Debug, PartialEq)]
pub struct AiTurn {
    pub decision: Decision,
    pub item: Option<ItemOutcome>,
    pub shot: ShotReport,
}

impl AiTurn {
    #[must_use]
    pub fn damage(&self) -> u32 {
        self.shot.damage
    }
}

/// What `start_new_round` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStart {
    /// A new round was dealt; carries its number.
    Started(u32),
    /// The final round was already played; the match is finalized.
    MatchOver(MatchResult),
}
