//! Fighter identity and per-fighter state.
//!
//! ## FighterId
//!
//! The two seats of a duel: the human `Player` and the AI `Opponent`.
//!
//! ## Fighter
//!
//! Health, shield, inventory and round wins for one seat. Owned by
//! [`GameState`](super::GameState).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DuelError;
use crate::items::{Inventory, Item};

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FighterId {
    Player,
    Opponent,
}

impl FighterId {
    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            FighterId::Player => FighterId::Opponent,
            FighterId::Opponent => FighterId::Player,
        }
    }

    /// True for the human seat.
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, FighterId::Player)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FighterId::Player => "player",
            FighterId::Opponent => "opponent",
        }
    }
}

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regional affiliation. Decides item flavor and taunt language only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Bisaya,
    Tagalog,
}

impl Region {
    /// The region the opponent is drawn from.
    #[must_use]
    pub const fn rival(self) -> Self {
        match self {
            Region::Bisaya => Region::Tagalog,
            Region::Tagalog => Region::Bisaya,
        }
    }

    /// Display name of an AI fighter from this region.
    #[must_use]
    pub const fn fighter_name(self) -> &'static str {
        match self {
            Region::Bisaya => "Bisaya Fighter",
            Region::Tagalog => "Tagalog Fighter",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Region::Bisaya => "bisaya",
            Region::Tagalog => "tagalog",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = DuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bisaya" => Ok(Region::Bisaya),
            "tagalog" => Ok(Region::Tagalog),
            _ => Err(DuelError::UnknownRegion(s.to_string())),
        }
    }
}

/// What a live shot did to the fighter it was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    /// The shield absorbed the whole shot and is gone.
    Blocked,
    /// The full shot landed; health drops by it, clamped at 0.
    Damaged(u32),
}

/// One combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fighter {
    pub id: FighterId,
    pub name: String,
    pub region: Region,
    pub health: u32,
    pub max_health: u32,
    pub items: Inventory,
    pub shield: bool,
    pub wins: u32,
}

impl Fighter {
    /// A fighter at full health with no shield and no wins.
    #[must_use]
    pub fn new(id: FighterId, name: impl Into<String>, region: Region, max_health: u32, items: Inventory) -> Self {
        Self {
            id,
            name: name.into(),
            region,
            health: max_health,
            max_health,
            items,
            shield: false,
            wins: 0,
        }
    }

    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.health == 0
    }

    /// Apply a live shot. Any shield is consumed and blocks all of it.
    pub fn take_hit(&mut self, damage: u32) -> Hit {
        if self.shield {
            self.shield = false;
            return Hit::Blocked;
        }
        let dealt = damage.min(self.health);
        self.health -= dealt;
        Hit::Damaged(damage)
    }

    /// Restore health up to the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Back to full health with no shield and a fresh inventory. Wins are kept.
    pub fn reset_for_round(&mut self, items: Inventory) {
        self.health = self.max_health;
        self.shield = false;
        self.items = items;
    }

    /// First item with this id that still has a use.
    pub fn usable_item_mut(&mut self, item_id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == item_id && i.is_usable())
    }

    /// Drop every item without remaining uses.
    pub fn discard_spent_items(&mut self) {
        self.items.retain(|i| i.is_usable());
    }
}
