//! Heuristic opponent configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DuelError, Result};

/// Thresholds for [`Heuristic`](super::Heuristic).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Chance of using a random item before firing.
    pub item_use_chance: f64,

    /// Shooting itself is only considered below this live probability.
    pub self_shot_threshold: f64,

    /// Chance of actually shooting itself when under the threshold.
    pub self_shot_chance: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            item_use_chance: 0.4,
            self_shot_threshold: 0.4,
            self_shot_chance: 0.6,
        }
    }
}

impl HeuristicConfig {
    /// Never uses items and always shoots the other fighter.
    #[must_use]
    pub fn aggressive() -> Self {
        Self {
            item_use_chance: 0.0,
            self_shot_threshold: 0.0,
            self_shot_chance: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("item_use_chance", self.item_use_chance),
            ("self_shot_threshold", self.self_shot_threshold),
            ("self_shot_chance", self.self_shot_chance),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(DuelError::InvalidConfig(format!("{name} must be in [0, 1], got {value}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HeuristicConfig::default();
        assert_eq!(config.item_use_chance, 0.4);
        assert_eq!(config.self_shot_threshold, 0.4);
        assert_eq!(config.self_shot_chance, 0.6);
        assert!(config.validate().is_ok());
        assert!(HeuristicConfig::aggressive().validate().is_ok());
    }

    #[test]
    fn test_validate_range() {
        let config = HeuristicConfig {
            self_shot_chance: 1.5,
            ..HeuristicConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
