//! Game repositories.
//!
//! A [`GameStore`] maps game ids to [`Session`]s. Each session sits behind
//! its own mutex, so callers holding one game's lock never block callers
//! working on another game.

mod memory;

use std::sync::{Arc, Mutex};

use crate::core::{GameRng, GameState};
use crate::error::Result;

pub use memory::MemoryStore;

/// Shared handle to one game's session.
pub type SessionHandle = Arc<Mutex<Session>>;

/// One live match and the randomness that drives it.
#[derive(Clone, Debug)]
pub struct Session {
    pub state: GameState,

    /// Drives every engine call for this game.
    pub rng: GameRng,

    /// Taunt rolls and fallback picks. Kept apart from `rng` so flavor
    /// text never changes the game's random stream.
    pub flavor: GameRng,
}

impl Session {
    /// Wrap a freshly created state. The flavor stream is forked from `rng`.
    #[must_use]
    pub fn new(state: GameState, mut rng: GameRng) -> Self {
        let flavor = rng.fork();
        Self { state, rng, flavor }
    }
}

/// Repository of sessions keyed by game id.
pub trait GameStore: Send + Sync {
    /// Look up a session. Fails with `GameNotFound` for unknown ids.
    fn get(&self, id: &str) -> Result<SessionHandle>;

    /// Store a session under `id`, replacing any previous one.
    fn insert(&self, id: String, session: Session) -> Result<SessionHandle>;

    /// Drop a session. Returns whether one existed.
    fn remove(&self, id: &str) -> Result<bool>;

    /// Number of stored sessions.
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
