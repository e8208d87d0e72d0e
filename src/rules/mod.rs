//! Duel rules.
//!
//! [`DuelEngine`] applies every transition of a match: dealing rounds,
//! firing, items and the opponent's turn. The types in `action` describe
//! what a fighter asked for and what happened.

mod action;
mod engine;

pub use action::{Action, AiTurn, Aim, ItemOutcome, Outcome, RoundStart, ShotOutcome, ShotReport};
pub use engine::DuelEngine;
