//! # shell-duel
//!
//! A two-fighter "shell game" duel engine. Fighters take turns firing a
//! shared chamber of live and blank shots at themselves or each other, and
//! spend single-use items to heal, shield, peek at the next shot, or double
//! its damage. Matches are best of a fixed number of rounds.
//!
//! ## Design Principles
//!
//! 1. **State In, State Out**: the engine borrows a [`GameState`] and
//!    mutates it; it owns no games and does no I/O.
//!
//! 2. **Injected Randomness**: every random decision goes through a
//!    [`RandomSource`], so seeded games replay exactly and tests can script
//!    individual draws.
//!
//! 3. **Rejections Are Pure**: an action from the wrong fighter, or after a
//!    knockout, fails without touching the state.
//!
//! ## Modules
//!
//! - `core`: fighters, chamber, state, RNG, configuration
//! - `items`: item catalogs and inventories
//! - `rules`: the duel engine and its action/outcome types
//! - `ai`: the opponent policy trait and the default heuristic
//! - `store`: game repositories keyed by id
//! - `taunts`: taunt capability, fallback lines and clean-up
//! - `service`: the per-route arena an HTTP layer would wrap

pub mod ai;
pub mod core;
pub mod error;
pub mod items;
pub mod rules;
pub mod service;
pub mod store;
pub mod taunts;

pub use crate::ai::{Decision, Heuristic, HeuristicConfig, OpponentPolicy};
pub use crate::core::{
    Chamber, ChamberInfo, ChamberShot, DuelConfig, Fighter, FighterId, GamePhase, GameRng, GameState,
    Hit, MatchResult, RandomSource, Region, ScriptedRng, ShotKind,
};
pub use crate::error::{DuelError, Result};
pub use crate::items::{Inventory, Item, ItemEffect};
pub use crate::rules::{Action, AiTurn, Aim, DuelEngine, ItemOutcome, Outcome, RoundStart, ShotOutcome, ShotReport};
pub use crate::service::{ActionResponse, Arena};
pub use crate::store::{GameStore, MemoryStore, Session};
pub use crate::taunts::{NoTaunts, Situation, TauntConfig, TauntError, TauntService, TauntSource};
