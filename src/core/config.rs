//! Duel configuration.
//!
//! The defaults reproduce the classic ruleset: an 8-shot chamber with 3 to 5
//! live rounds, 6 health, 4 items per fighter and a best-of-3 match.
//! Builder-style `with_*` methods adjust individual values, `validate`
//! checks the combination.

use serde::{Deserialize, Serialize};

use crate::error::{DuelError, Result};

/// Rules shared by every game an engine runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Shots per chamber load.
    pub chamber_size: usize,

    /// Fewest live rounds in a load.
    pub min_live: usize,

    /// Most live rounds in a load (inclusive).
    pub max_live: usize,

    /// Health each fighter starts a round with.
    pub max_health: u32,

    /// Rounds in a match.
    pub max_rounds: u32,

    /// Items dealt to each fighter per round.
    pub items_per_fighter: usize,

    /// Health restored by a heal item.
    pub heal_amount: u32,

    /// Damage of a live shot before the multiplier.
    pub base_damage: u32,

    /// Multiplier set by a double-damage item.
    pub boosted_multiplier: u32,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            chamber_size: 8,
            min_live: 3,
            max_live: 5,
            max_health: 6,
            max_rounds: 3,
            items_per_fighter: 4,
            heal_amount: 2,
            base_damage: 1,
            boosted_multiplier: 2,
        }
    }
}

impl DuelConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chamber size.
    #[must_use]
    pub fn with_chamber_size(mut self, size: usize) -> Self {
        self.chamber_size = size;
        self
    }

    /// Set the inclusive range of live rounds per load.
    #[must_use]
    pub fn with_live_range(mut self, min: usize, max: usize) -> Self {
        self.min_live = min;
        self.max_live = max;
        self
    }

    /// Set starting health.
    #[must_use]
    pub fn with_max_health(mut self, health: u32) -> Self {
        self.max_health = health;
        self
    }

    /// Set the number of rounds in a match.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set items dealt per fighter per round.
    #[must_use]
    pub fn with_items_per_fighter(mut self, count: usize) -> Self {
        self.items_per_fighter = count;
        self
    }

    /// Check that the values describe a playable duel.
    pub fn validate(&self) -> Result<()> {
        if self.chamber_size == 0 {
            return Err(DuelError::InvalidConfig("chamber_size must be positive".into()));
        }
        if self.min_live > self.max_live {
            return Err(DuelError::InvalidConfig(format!(
                "min_live ({}) exceeds max_live ({})",
                self.min_live, self.max_live
            )));
        }
        if self.max_live > self.chamber_size {
            return Err(DuelError::InvalidConfig(format!(
                "max_live ({}) exceeds chamber_size ({})",
                self.max_live, self.chamber_size
            )));
        }
        if self.max_health == 0 {
            return Err(DuelError::InvalidConfig("max_health must be positive".into()));
        }
        if self.max_rounds == 0 {
            return Err(DuelError::InvalidConfig("max_rounds must be positive".into()));
        }
        if self.base_damage == 0 || self.boosted_multiplier == 0 {
            return Err(DuelError::InvalidConfig("damage values must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DuelConfig::default();
        assert_eq!(config.chamber_size, 8);
        assert_eq!((config.min_live, config.max_live), (3, 5));
        assert_eq!(config.max_health, 6);
        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.items_per_fighter, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DuelConfig::new()
            .with_chamber_size(6)
            .with_live_range(1, 2)
            .with_max_health(3)
            .with_max_rounds(5)
            .with_items_per_fighter(2);

        assert_eq!(config.chamber_size, 6);
        assert_eq!(config.max_live, 2);
        assert_eq!(config.max_health, 3);
        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.items_per_fighter, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = DuelConfig::new().with_live_range(5, 3);
        assert!(matches!(config.validate(), Err(DuelError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_live_count() {
        let config = DuelConfig::new().with_chamber_size(4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DuelConfig = serde_json::from_str(r#"{"max_health": 4}"#).unwrap();
        assert_eq!(config.max_health, 4);
        assert_eq!(config.chamber_size, 8);
    }
}
