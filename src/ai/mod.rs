//! Opponent AI.
//!
//! - `OpponentPolicy`: trait the engine drives on the AI's turn
//! - `Heuristic`: the default live-probability threshold policy
//! - `HeuristicConfig`: its tunable thresholds

mod config;
mod policy;

pub use config::HeuristicConfig;
pub use policy::{Decision, Heuristic, OpponentPolicy};
