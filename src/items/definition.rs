//! Item templates and the per-region catalogs.
//!
//! A template is the static description of an item; fighters own
//! [`Item`](super::Item) copies made from it with `instantiate`.

use serde::{Deserialize, Serialize};

use crate::core::Region;

use super::instance::Item;

/// What an item does when used.
///
/// `SkipTurn` and `ReverseDamage` are part of the effect domain but no
/// catalog produces them and the engine does not resolve them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemEffect {
    /// Restore health, capped at max health.
    Heal,
    /// Block the next live shot aimed at the user.
    Shield,
    /// Reveal the shot at the chamber index without firing it.
    Peek,
    /// Multiply the damage of the next shot fired by anyone.
    DoubleDamage,
    /// Reserved.
    SkipTurn,
    /// Reserved.
    ReverseDamage,
}

impl ItemEffect {
    /// Whether the engine resolves this effect.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        match self {
            ItemEffect::Heal | ItemEffect::Shield | ItemEffect::Peek | ItemEffect::DoubleDamage => true,
            ItemEffect::SkipTurn | ItemEffect::ReverseDamage => false,
        }
    }
}

/// Static description of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub name_local: &'static str,
    pub description: &'static str,
    pub description_local: &'static str,
    pub max_uses: u8,
    pub effect: ItemEffect,
}

impl ItemTemplate {
    /// A fresh item with full uses.
    #[must_use]
    pub fn instantiate(&self) -> Item {
        Item {
            id: self.id.to_string(),
            name: self.name.to_string(),
            name_local: self.name_local.to_string(),
            description: self.description.to_string(),
            description_local: self.description_local.to_string(),
            uses: self.max_uses,
            max_uses: self.max_uses,
            effect: self.effect,
        }
    }
}

pub const BISAYA_ITEMS: [ItemTemplate; 4] = [
    ItemTemplate {
        id: "tubâ",
        name: "Tubâ (Coconut Wine)",
        name_local: "Tubâ",
        description: "Restores 2 health",
        description_local: "Balik 2 ka health",
        max_uses: 1,
        effect: ItemEffect::Heal,
    },
    ItemTemplate {
        id: "anting_anting",
        name: "Anting-Anting Amulet",
        name_local: "Anting-Anting",
        description: "Block next damage",
        description_local: "Panalipod sa sunod nga away",
        max_uses: 1,
        effect: ItemEffect::Shield,
    },
    ItemTemplate {
        id: "espiritista",
        name: "Espiritista Vision",
        name_local: "Espiritista",
        description: "See next shot",
        description_local: "Makita ang sunod nga bala",
        max_uses: 1,
        effect: ItemEffect::Peek,
    },
    ItemTemplate {
        id: "bunal",
        name: "Power Bunal",
        name_local: "Kusog nga Bunal",
        description: "Double damage on next shot",
        description_local: "Doble ang damage sa sunod",
        max_uses: 1,
        effect: ItemEffect::DoubleDamage,
    },
];

pub const TAGALOG_ITEMS: [ItemTemplate; 4] = [
    ItemTemplate {
        id: "lambanog",
        name: "Lambanog (Coconut Vodka)",
        name_local: "Lambanog",
        description: "Restores 2 health",
        description_local: "Bumalik ang 2 buhay",
        max_uses: 1,
        effect: ItemEffect::Heal,
    },
    ItemTemplate {
        id: "habas",
        name: "Habas Amulet",
        name_local: "Anting-Habas",
        description: "Block next damage",
        description_local: "Hadlang sa susunod na pinsala",
        max_uses: 1,
        effect: ItemEffect::Shield,
    },
    ItemTemplate {
        id: "manghuhula",
        name: "Fortune Teller",
        name_local: "Manghuhula",
        description: "See next shot",
        description_local: "Makita ang susunod na bala",
        max_uses: 1,
        effect: ItemEffect::Peek,
    },
    ItemTemplate {
        id: "suntok",
        name: "Power Suntok",
        name_local: "Malakas na Suntok",
        description: "Double damage on next shot",
        description_local: "Doble ang damage sa susunod",
        max_uses: 1,
        effect: ItemEffect::DoubleDamage,
    },
];

/// The item pool a region draws from.
#[must_use]
pub fn catalog(region: Region) -> &'static [ItemTemplate] {
    match region {
        Region::Bisaya => &BISAYA_ITEMS,
        Region::Tagalog => &TAGALOG_ITEMS,
    }
}
