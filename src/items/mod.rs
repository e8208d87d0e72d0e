//! Single-use tactical items.
//!
//! - `ItemEffect`: the closed set of effects (two reserved, unimplemented)
//! - `ItemTemplate`: static catalog entries, one pool per region
//! - `Item`: an owned copy with remaining uses

mod definition;
mod instance;

pub use definition::{catalog, ItemEffect, ItemTemplate, BISAYA_ITEMS, TAGALOG_ITEMS};
pub use instance::{draw_items, Inventory, Item};
