//! The shared firing chamber.
//!
//! A chamber is an ordered load of live and blank shots consumed one at a
//! time. Shots before `index` have been fired (and are revealed); shots at
//! or after it are hidden unless peeked.

use serde::{Deserialize, Serialize};

use super::config::DuelConfig;
use super::rng::RandomSource;

/// Kind of round in a chamber slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotKind {
    Live,
    Blank,
}

/// One slot of the chamber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChamberShot {
    #[serde(rename = "type")]
    pub kind: ShotKind,
    pub revealed: bool,
}

impl ChamberShot {
    /// An unrevealed shot.
    #[must_use]
    pub const fn hidden(kind: ShotKind) -> Self {
        Self { kind, revealed: false }
    }
}

/// Unrevealed shots left in the chamber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChamberInfo {
    pub live: usize,
    pub blank: usize,
    pub total: usize,
}

/// The loaded chamber and the position of the next shot.
///
/// Serializes as the `chamber` and `currentChamberIndex` fields of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chamber {
    #[serde(rename = "chamber")]
    shots: Vec<ChamberShot>,
    #[serde(rename = "currentChamberIndex")]
    index: usize,
}

impl Chamber {
    /// Generate a fresh load.
    ///
    /// The live count is uniform over `min_live..=max_live`; live shots are
    /// laid out first, blanks after, then the whole load is shuffled.
    pub fn generate<R: RandomSource>(config: &DuelConfig, rng: &mut R) -> Self {
        let live = config.min_live + rng.next_below(config.max_live.saturating_sub(config.min_live) + 1);
        let mut shots: Vec<ChamberShot> = (0..config.chamber_size)
            .map(|i| ChamberShot::hidden(if i < live { ShotKind::Live } else { ShotKind::Blank }))
            .collect();
        rng.shuffle(shots.as_mut_slice());
        Self { shots, index: 0 }
    }

    /// A chamber with exactly these shots, in order, all hidden.
    #[must_use]
    pub fn from_kinds(kinds: impl IntoIterator<Item = ShotKind>) -> Self {
        Self {
            shots: kinds.into_iter().map(ChamberShot::hidden).collect(),
            index: 0,
        }
    }

    #[must_use]
    pub fn shots(&self) -> &[ChamberShot] {
        &self.shots
    }

    /// Position of the next shot to fire.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// True once every shot has been fired.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.index >= self.shots.len()
    }

    /// Shots from the current index on.
    #[must_use]
    pub fn remaining(&self) -> &[ChamberShot] {
        &self.shots[self.index.min(self.shots.len())..]
    }

    /// Reload if spent. Returns true when a new load was generated.
    pub fn ensure_loaded<R: RandomSource>(&mut self, config: &DuelConfig, rng: &mut R) -> bool {
        if !self.is_spent() {
            return false;
        }
        *self = Self::generate(config, rng);
        true
    }

    /// Reveal and consume the shot at the current index.
    ///
    /// Returns `None` if the chamber is spent; call `ensure_loaded` first.
    pub fn fire(&mut self) -> Option<ShotKind> {
        let shot = self.shots.get_mut(self.index)?;
        shot.revealed = true;
        self.index += 1;
        Some(shot.kind)
    }

    /// Reveal the shot at the current index without consuming it.
    pub fn peek(&mut self) -> Option<ShotKind> {
        let shot = self.shots.get_mut(self.index)?;
        shot.revealed = true;
        Some(shot.kind)
    }

    /// Fraction of remaining shots that are live, revealed or not.
    ///
    /// `0.0` for a spent chamber.
    #[must_use]
    pub fn live_probability(&self) -> f64 {
        let remaining = self.remaining();
        if remaining.is_empty() {
            return 0.0;
        }
        let live = remaining.iter().filter(|s| s.kind == ShotKind::Live).count();
        live as f64 / remaining.len() as f64
    }

    /// Count unrevealed shots from the current index on.
    #[must_use]
    pub fn info(&self) -> ChamberInfo {
        let (live, blank) = self
            .remaining()
            .iter()
            .filter(|s| !s.revealed)
            .fold((0, 0), |(live, blank), s| match s.kind {
                ShotKind::Live => (live + 1, blank),
                ShotKind::Blank => (live, blank + 1),
            });
        ChamberInfo { live, blank, total: live + blank }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_generate_counts() {
        let config = DuelConfig::default();
        let mut rng = GameRng::new(42);

        for _ in 0..200 {
            let chamber = Chamber::generate(&config, &mut rng);
            let live = chamber.shots().iter().filter(|s| s.kind == ShotKind::Live).count();
            assert_eq!(chamber.len(), 8);
            assert!((3..=5).contains(&live));
            assert_eq!(chamber.index(), 0);
            assert!(chamber.shots().iter().all(|s| !s.revealed));
        }
    }

    #[test]
    fn test_generate_live_count_from_first_draw() {
        let config = DuelConfig::default();
        // first draw picks the extra live count, the rest drive an identity shuffle
        let mut rng = ScriptedRng::ints([2, 7, 6, 5, 4, 3, 2, 1]);
        let chamber = Chamber::generate(&config, &mut rng);

        let kinds: Vec<_> = chamber.shots().iter().map(|s| s.kind).collect();
        assert_eq!(&kinds[..5], &[ShotKind::Live; 5]);
        assert_eq!(&kinds[5..], &[ShotKind::Blank; 3]);
        assert!(rng.drained());
    }

    #[test]
    fn test_fire_reveals_and_advances() {
        let mut chamber = Chamber::from_kinds([ShotKind::Live, ShotKind::Blank]);

        assert_eq!(chamber.fire(), Some(ShotKind::Live));
        assert!(chamber.shots()[0].revealed);
        assert!(!chamber.shots()[1].revealed);
        assert_eq!(chamber.index(), 1);

        assert_eq!(chamber.fire(), Some(ShotKind::Blank));
        assert!(chamber.is_spent());
        assert_eq!(chamber.fire(), None);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut chamber = Chamber::from_kinds([ShotKind::Blank, ShotKind::Live]);

        assert_eq!(chamber.peek(), Some(ShotKind::Blank));
        assert_eq!(chamber.index(), 0);
        assert!(chamber.shots()[0].revealed);
        assert_eq!(chamber.info(), ChamberInfo { live: 1, blank: 0, total: 1 });
    }

    #[test]
    fn test_ensure_loaded_only_when_spent() {
        let config = DuelConfig::default();
        let mut rng = GameRng::new(9);
        let mut chamber = Chamber::from_kinds([ShotKind::Live]);

        assert!(!chamber.ensure_loaded(&config, &mut rng));
        assert_eq!(chamber.len(), 1);

        chamber.fire();
        assert!(chamber.ensure_loaded(&config, &mut rng));
        assert_eq!(chamber.len(), 8);
        assert_eq!(chamber.index(), 0);
    }

    #[test]
    fn test_live_probability() {
        let mut chamber = Chamber::from_kinds([ShotKind::Live, ShotKind::Blank, ShotKind::Blank, ShotKind::Live]);
        assert_eq!(chamber.live_probability(), 0.5);
        chamber.fire();
        assert!((chamber.live_probability() - 1.0 / 3.0).abs() < 1e-9);
        chamber.fire();
        chamber.fire();
        chamber.fire();
        assert_eq!(chamber.live_probability(), 0.0);
    }

    #[test]
    fn test_info_skips_fired_shots() {
        let mut chamber = Chamber::from_kinds([ShotKind::Live, ShotKind::Live, ShotKind::Blank]);
        chamber.fire();
        let before = chamber.clone();

        assert_eq!(chamber.info(), ChamberInfo { live: 1, blank: 1, total: 2 });
        assert_eq!(chamber, before);
    }

    #[test]
    fn test_json_field_names() {
        let chamber = Chamber::from_kinds([ShotKind::Live]);
        let json = serde_json::to_value(&chamber).unwrap();
        assert_eq!(json["currentChamberIndex"], 0);
        assert_eq!(json["chamber"][0]["type"], "live");
        assert_eq!(json["chamber"][0]["revealed"], false);
    }
}
