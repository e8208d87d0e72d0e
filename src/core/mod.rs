//! Core duel types: fighters, chamber, state, RNG, configuration.
//!
//! Everything here is plain data plus local invariants (shield arithmetic,
//! chamber consumption). Turn sequencing lives in [`crate::rules`].

pub mod chamber;
pub mod config;
pub mod fighter;
pub mod rng;
pub mod state;

pub use chamber::{Chamber, ChamberInfo, ChamberShot, ShotKind};
pub use config::DuelConfig;
pub use fighter::{Fighter, FighterId, Hit, Region};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use state::{GameState, GamePhase, MatchResult};
