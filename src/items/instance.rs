//! Owned items and inventories.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{RandomSource, Region};

use super::definition::{catalog, ItemEffect, ItemTemplate};

/// A fighter's inventory. Sized for a full round's deal without allocating.
pub type Inventory = SmallVec<[Item; 4]>;

/// An item owned by a fighter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique within the owner's inventory.
    pub id: String,
    pub name: String,
    pub name_local: String,
    pub description: String,
    pub description_local: String,
    /// Remaining uses.
    pub uses: u8,
    pub max_uses: u8,
    pub effect: ItemEffect,
}

impl Item {
    /// Whether the item still has a use left.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.uses > 0
    }
}

/// Deal `count` random items from the region's catalog.
///
/// The catalog is shuffled with `rng` and the first `count` taken, so ids
/// within the result are unique. `count` is capped at the catalog size.
pub fn draw_items<R: RandomSource>(region: Region, count: usize, rng: &mut R) -> Inventory {
    let mut pool: SmallVec<[&ItemTemplate; 4]> = catalog(region).iter().collect();
    rng.shuffle(pool.as_mut_slice());
    pool.into_iter().take(count).map(ItemTemplate::instantiate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_draw_full_pool() {
        let mut rng = GameRng::new(42);
        let items = draw_items(Region::Bisaya, 4, &mut rng);

        assert_eq!(items.len(), 4);
        let mut ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["anting_anting", "bunal", "espiritista", "tubâ"]);
        assert!(items.iter().all(Item::is_usable));
    }

    #[test]
    fn test_draw_caps_at_pool_size() {
        let mut rng = GameRng::new(1);
        assert_eq!(draw_items(Region::Tagalog, 10, &mut rng).len(), 4);
        assert!(draw_items(Region::Tagalog, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_draw_order_follows_rng() {
        // Identity shuffle keeps catalog order
        let mut rng = ScriptedRng::ints([3, 2, 1]);
        let items = draw_items(Region::Tagalog, 2, &mut rng);
        assert_eq!(items[0].id, "lambanog");
        assert_eq!(items[1].id, "habas");
    }

    #[test]
    fn test_item_json_shape() {
        let mut rng = GameRng::new(3);
        let item = &draw_items(Region::Bisaya, 1, &mut rng)[0];
        let json = serde_json::to_value(item).unwrap();

        assert!(json.get("nameLocal").is_some());
        assert!(json.get("descriptionLocal").is_some());
        assert_eq!(json["maxUses"], 1);
        assert_eq!(json["uses"], 1);
    }
}
