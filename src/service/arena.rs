//! Games by id, with taunts after opponent turns.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::core::{ChamberInfo, FighterId, GameRng, GameState, Region};
use crate::error::{DuelError, Result};
use crate::ai::{Heuristic, OpponentPolicy};
use crate::rules::{DuelEngine, ItemOutcome};
use crate::store::{GameStore, Session};
use crate::taunts::{Situation, TauntService, TauntSource};

/// Body returned by the action routes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub game_state: GameState,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub damage: Option<u32>,
    /// What an item use did, for `use_item` and for AI turns that used one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub item: Option<ItemOutcome>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub taunt: Option<String>,
}

impl ActionResponse {
    fn new(game_state: GameState) -> Self {
        Self {
            game_state,
            damage: None,
            item: None,
            taunt: None,
        }
    }

    fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }
}

/// Runs engine operations against stored games.
///
/// Game locks are held only while the engine runs. Taunt generation happens
/// after the lock is released.
pub struct Arena<S, T, P = Heuristic> {
    engine: DuelEngine<P>,
    store: S,
    taunts: TauntService<T>,
    /// Source of per-game seeds.
    seeds: Mutex<GameRng>,
}

impl<S: GameStore, T: TauntSource, P: OpponentPolicy> Arena<S, T, P> {
    #[must_use]
    pub fn new(engine: DuelEngine<P>, store: S, taunts: TauntService<T>, seed: u64) -> Self {
        Self {
            engine,
            store,
            taunts,
            seeds: Mutex::new(GameRng::new(seed)),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &DuelEngine<P> {
        &self.engine
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a match under `id`, replacing any game already stored there.
    pub fn create_fight(&self, id: &str, player_name: &str, region: Region) -> Result<GameState> {
        let mut rng = self
            .seeds
            .lock()
            .map_err(|_| DuelError::Poisoned("seeds".into()))?
            .fork();
        let state = self.engine.create_game(id, player_name, region, &mut rng);
        self.store.insert(id.to_string(), Session::new(state.clone(), rng))?;
        log::debug!("[arena] created fight {}", id);
        Ok(state)
    }

    pub fn shoot_opponent(&self, id: &str) -> Result<ActionResponse> {
        self.with_session(id, |engine, session| {
            let report = engine.shoot_opponent(&mut session.state, &mut session.rng)?;
            Ok(ActionResponse::new(session.state.clone()).with_damage(report.damage))
        })
    }

    pub fn shoot_self(&self, id: &str) -> Result<ActionResponse> {
        self.with_session(id, |engine, session| {
            let report = engine.shoot_self(&mut session.state, &mut session.rng)?;
            Ok(ActionResponse::new(session.state.clone()).with_damage(report.damage))
        })
    }

    /// Player item use. Unknown ids return the unchanged state.
    pub fn use_item(&self, id: &str, item_id: &str) -> Result<ActionResponse> {
        self.with_session(id, |engine, session| {
            let outcome = engine.use_item(&mut session.state, item_id, FighterId::Player, &mut session.rng)?;
            let mut response = ActionResponse::new(session.state.clone());
            response.item = Some(outcome);
            Ok(response)
        })
    }

    /// Opponent turn, followed by a taunt roll on the flavor stream.
    ///
    /// The roll and a fork of the flavor stream are taken under the game
    /// lock; the taunt itself is generated after the lock is released, so a
    /// slow source never holds up other calls on this game.
    pub fn ai_turn(&self, id: &str) -> Result<ActionResponse> {
        let (mut response, pending) = self.with_session(id, |engine, session| {
            let turn = engine.ai_turn(&mut session.state, &mut session.rng)?;
            let damage = turn.damage();
            let mut response = ActionResponse::new(session.state.clone()).with_damage(damage);
            response.item = turn.item;

            let pending = if self.taunts.roll(&mut session.flavor) {
                let situation = if damage > 0 { Situation::Hit } else { Situation::Miss };
                Some((session.state.opponent.region, situation, session.flavor.fork()))
            } else {
                None
            };
            Ok((response, pending))
        })?;

        if let Some((region, situation, mut flavor)) = pending {
            response.taunt = Some(self.taunts.taunt(region, situation, &mut flavor));
        }
        Ok(response)
    }

    pub fn next_round(&self, id: &str) -> Result<GameState> {
        self.with_session(id, |engine, session| {
            engine.start_new_round(&mut session.state, &mut session.rng);
            Ok(session.state.clone())
        })
    }

    pub fn game(&self, id: &str) -> Result<GameState> {
        self.with_session(id, |_, session| Ok(session.state.clone()))
    }

    pub fn chamber_info(&self, id: &str) -> Result<ChamberInfo> {
        self.with_session(id, |engine, session| Ok(engine.chamber_info(&session.state)))
    }

    /// Forget a game.
    pub fn end_game(&self, id: &str) -> Result<()> {
        if self.store.remove(id)? {
            log::debug!("[arena] ended fight {}", id);
            Ok(())
        } else {
            Err(DuelError::GameNotFound(id.to_string()))
        }
    }

    fn with_session<R>(&self, id: &str, f: impl FnOnce(&DuelEngine<P>, &mut Session) -> Result<R>) -> Result<R> {
        let handle = self.store.get(id)?;
        let mut session = handle.lock().map_err(|_| DuelError::Poisoned(id.to_string()))?;
        f(&self.engine, &mut *session)
    }
}
