//! Taunt roll, clean-up and fallback.

use serde::{Deserialize, Serialize};

use crate::core::{RandomSource, Region};
use crate::error::{DuelError, Result};

use super::fallback;
use super::{Situation, TauntSource};

const LABELS: [&str; 2] = ["trash talk:", "taunt:"];

/// Taunt behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TauntConfig {
    /// Chance that an opponent turn produces a taunt at all.
    pub chance: f64,

    /// Cleaned text shorter than this (in characters) is replaced by a
    /// fallback line.
    pub min_len: usize,
}

impl Default for TauntConfig {
    fn default() -> Self {
        Self { chance: 0.3, min_len: 5 }
    }
}

impl TauntConfig {
    #[must_use]
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = chance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.chance) {
            return Err(DuelError::InvalidConfig(format!(
                "taunt chance must be in [0, 1], got {}",
                self.chance
            )));
        }
        Ok(())
    }
}

/// Strip whitespace, one pair of surrounding quotes and a leading
/// `Trash talk:` / `Taunt:` label (any case).
#[must_use]
pub fn clean_taunt(raw: &str) -> String {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix(['"', '\'']) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(['"', '\'']) {
        text = rest;
    }
    for label in LABELS {
        let matches = text
            .get(..label.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(label));
        if matches {
            text = &text[label.len()..];
            break;
        }
    }
    text.trim().to_string()
}

/// Wraps a [`TauntSource`] with the roll and fallback policy.
#[derive(Clone, Debug)]
pub struct TauntService<T> {
    source: T,
    config: TauntConfig,
}

impl<T: TauntSource> TauntService<T> {
    #[must_use]
    pub fn new(source: T, config: TauntConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub fn config(&self) -> &TauntConfig {
        &self.config
    }

    /// Whether this turn gets a taunt.
    pub fn roll<R: RandomSource>(&self, rng: &mut R) -> bool {
        rng.chance(self.config.chance)
    }

    /// A taunt for `region`. Never fails: errors and unusable text fall
    /// back to a static line.
    pub fn taunt<R: RandomSource>(&self, region: Region, situation: Situation, rng: &mut R) -> String {
        match self.source.generate(region, situation) {
            Ok(raw) => {
                let text = clean_taunt(&raw);
                if text.chars().count() >= self.config.min_len {
                    log::debug!("[taunts] {} {}: {}", region, situation, text);
                    return text;
                }
                log::warn!("[taunts] generated text too short ({:?}), using fallback", raw);
            }
            Err(e) => log::warn!("[taunts] {}, using fallback", e),
        }
        fallback::pick(region, rng).to_string()
    }
}
