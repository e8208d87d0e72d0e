//! In-process store.

use std::sync::{Arc, Mutex, RwLock};

use rustc_hash::FxHashMap;

use crate::error::{DuelError, Result};

use super::{GameStore, Session, SessionHandle};

/// Sessions held in memory for the life of the process.
///
/// The map lock is only held to look up, insert or remove a handle; game
/// operations lock the session itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: RwLock<FxHashMap<String, SessionHandle>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn get(&self, id: &str) -> Result<SessionHandle> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| DuelError::Poisoned("store".into()))?;
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| DuelError::GameNotFound(id.to_string()))
    }

    fn insert(&self, id: String, session: Session) -> Result<SessionHandle> {
        let handle = Arc::new(Mutex::new(session));
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| DuelError::Poisoned("store".into()))?;
        if sessions.insert(id.clone(), Arc::clone(&handle)).is_some() {
            log::debug!("[store] replaced game {}", id);
        } else {
            log::debug!("[store] stored game {}", id);
        }
        Ok(handle)
    }

    fn remove(&self, id: &str) -> Result<bool> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| DuelError::Poisoned("store".into()))?;
        let existed = sessions.remove(id).is_some();
        log::debug!("[store] removed game {}: {}", id, existed);
        Ok(existed)
    }

    fn len(&self) -> Result<usize> {
        self.sessions
            .read()
            .map(|sessions| sessions.len())
            .map_err(|_| DuelError::Poisoned("store".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DuelConfig, GameRng, Region};
    use crate::rules::DuelEngine;

    fn session(id: &str) -> Session {
        let mut rng = GameRng::new(7);
        let engine = DuelEngine::new(DuelConfig::default()).unwrap();
        let state = engine.create_game(id, "Ana", Region::Bisaya, &mut rng);
        Session::new(state, rng)
    }

    #[test]
    fn test_insert_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());

        store.insert("a".into(), session("a")).unwrap();
        let handle = store.get("a").unwrap();
        assert_eq!(handle.lock().unwrap().state.id, "a");
        assert_eq!(store.len().unwrap(), 1);

        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert_eq!(store.get("a").unwrap_err(), DuelError::GameNotFound("a".into()));
    }

    #[test]
    fn test_handles_share_session() {
        let store = MemoryStore::new();
        store.insert("a".into(), session("a")).unwrap();

        store.get("a").unwrap().lock().unwrap().state.round = 2;
        assert_eq!(store.get("a").unwrap().lock().unwrap().state.round, 2);
    }

    #[test]
    fn test_insert_replaces() {
        let store = MemoryStore::new();
        store.insert("a".into(), session("a")).unwrap();
        let mut replacement = session("a");
        replacement.state.round = 3;
        store.insert("a".into(), replacement).unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.get("a").unwrap().lock().unwrap().state.round, 3);
    }

    #[test]
    fn test_flavor_stream_is_separate() {
        let s = session("a");
        assert_ne!(s.rng.seed(), s.flavor.seed());
    }
}
