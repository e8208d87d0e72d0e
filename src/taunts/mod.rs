//! Opponent taunts.
//!
//! Taunt text comes from an external generator modelled as a fallible
//! [`TauntSource`]. [`TauntService`] rolls whether to taunt at all, cleans
//! the generated text, and falls back to a static per-region line when the
//! source fails or returns something unusable.
//!
//! ## Sources
//!
//! - `NoTaunts`: always fails, so every taunt is a fallback line
//! - any `Fn(Region, Situation) -> Result<String, TauntError>` closure

mod fallback;
mod service;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Region;

pub use fallback::{fallback_lines, BISAYA_TAUNTS, TAGALOG_TAUNTS};
pub use service::{clean_taunt, TauntConfig, TauntService};

/// What just happened, as context for the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Situation {
    Hit,
    Miss,
    TrashTalk,
    Victory,
    Pain,
    Confidence,
}

impl Situation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Situation::Hit => "hit",
            Situation::Miss => "miss",
            Situation::TrashTalk => "trash_talk",
            Situation::Victory => "victory",
            Situation::Pain => "pain",
            Situation::Confidence => "confidence",
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a source produced no taunt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TauntError {
    #[error("taunt source unavailable")]
    Unavailable,
    #[error("taunt generation failed: {0}")]
    Failed(String),
}

/// Generates taunt text for a fighter of `region`.
pub trait TauntSource: Send + Sync {
    fn generate(&self, region: Region, situation: Situation) -> Result<String, TauntError>;
}

impl<F> TauntSource for F
where
    F: Fn(Region, Situation) -> Result<String, TauntError> + Send + Sync,
{
    fn generate(&self, region: Region, situation: Situation) -> Result<String, TauntError> {
        self(region, situation)
    }
}

/// A source that never answers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTaunts;

impl TauntSource for NoTaunts {
    fn generate(&self, _region: Region, _situation: Situation) -> Result<String, TauntError> {
        Err(TauntError::Unavailable)
    }
}
